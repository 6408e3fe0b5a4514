pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;

pub use config::Config;
pub use error::ModelFetchError;
pub use fetch::{FetchOutcome, fetch_model};

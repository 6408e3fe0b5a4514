mod fetcher;
mod types;

pub use fetcher::{
    classify_size, download_to_path, ensure_output_directory, fetch_model, fetch_model_with,
};
pub use types::{AttemptOutcome, AttemptRecord, FetchOutcome};

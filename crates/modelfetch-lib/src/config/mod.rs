mod loader;
mod model;

pub use loader::load_config;
pub use model::{
    Config, DEFAULT_CANDIDATE_URLS, DEFAULT_MIN_SIZE_BYTES, DEFAULT_OUTPUT_PATH, OutputConfig,
};

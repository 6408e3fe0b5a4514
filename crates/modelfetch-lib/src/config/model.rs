use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Mirrors of the MobileFaceNet model, in the order they are tried.
pub const DEFAULT_CANDIDATE_URLS: [&str; 3] = [
    "https://raw.githubusercontent.com/shubham0204/Face-Recognition-Flutter/main/assets/mobilefacenet.tflite",
    "https://raw.githubusercontent.com/PiyushMaheswari/Face-Recognition-Flutter/main/assets/mobilefacenet.tflite",
    "https://raw.githubusercontent.com/Rajat-2005/Face-Recognition-Flutter/main/assets/mobilefacenet.tflite",
];

pub const DEFAULT_OUTPUT_PATH: &str = "assets/models/mobilefacenet.tflite";

/// Anything at or below this size is assumed to be a hosting error page.
pub const DEFAULT_MIN_SIZE_BYTES: u64 = 1000;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub candidate_urls: Vec<String>,
    pub output: OutputConfig,
    pub min_size_bytes: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            candidate_urls: DEFAULT_CANDIDATE_URLS
                .iter()
                .map(|url| url.to_string())
                .collect(),
            output: OutputConfig::default(),
            min_size_bytes: DEFAULT_MIN_SIZE_BYTES,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

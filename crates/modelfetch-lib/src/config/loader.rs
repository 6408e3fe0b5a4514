use super::Config;
use crate::error::ModelFetchError;
use config::Config as ConfigBuilder;

pub fn load_config(config_path: &str) -> Result<Config, ModelFetchError> {
    let config_builder = ConfigBuilder::builder()
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CANDIDATE_URLS, DEFAULT_MIN_SIZE_BYTES, DEFAULT_OUTPUT_PATH};
    use std::path::{Path, PathBuf};

    fn write_config(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_load_config_full_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "modelfetch.yaml",
            r#"
candidate_urls:
  - "https://mirror-a.example.com/model.tflite"
  - "https://mirror-b.example.com/model.tflite"
output:
  path: "out/model.tflite"
min_size_bytes: 4096
"#,
        );

        let config = load_config(&path).unwrap();

        assert_eq!(
            config.candidate_urls,
            vec![
                "https://mirror-a.example.com/model.tflite".to_string(),
                "https://mirror-b.example.com/model.tflite".to_string(),
            ]
        );
        assert_eq!(config.output.path, PathBuf::from("out/model.tflite"));
        assert_eq!(config.min_size_bytes, 4096);
    }

    #[test]
    fn test_load_config_missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "modelfetch.toml", "min_size_bytes = 10\n");

        let config = load_config(&path).unwrap();

        assert_eq!(config.candidate_urls.len(), DEFAULT_CANDIDATE_URLS.len());
        assert_eq!(config.candidate_urls[0], DEFAULT_CANDIDATE_URLS[0]);
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.min_size_bytes, 10);
        assert_ne!(config.min_size_bytes, DEFAULT_MIN_SIZE_BYTES);
    }

    #[test]
    fn test_load_config_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "modelfetch.toml", "retries = 3\n");

        let result = load_config(&path);

        assert!(matches!(result, Err(ModelFetchError::Config(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.yaml");

        let result = load_config(path.to_str().unwrap());

        assert!(result.is_err());
    }
}

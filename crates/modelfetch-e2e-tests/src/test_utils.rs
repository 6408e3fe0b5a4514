use eyre::Result;
use modelfetch_lib::config::{Config, OutputConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MODEL_FILE_NAME: &str = "mobilefacenet.tflite";

/// Deterministic stand-in for model bytes.
pub fn model_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Serve `body_len` bytes with `status` at `route`, expecting exactly
/// `expected_hits` requests.
pub async fn mount_mirror(
    server: &MockServer,
    route: &str,
    status: u16,
    body_len: usize,
    expected_hits: u64,
) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(model_bytes(body_len)))
        .expect(expected_hits)
        .mount(server)
        .await;
}

/// A URL nothing is listening on, for connection-level failures.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/{MODEL_FILE_NAME}")
}

pub fn output_path_in(dir: &Path) -> PathBuf {
    dir.join("assets").join("models").join(MODEL_FILE_NAME)
}

pub fn create_test_config(candidate_urls: Vec<String>, output_path: PathBuf) -> Config {
    Config {
        candidate_urls,
        output: OutputConfig { path: output_path },
        ..Config::default()
    }
}

pub fn setup_test_environment() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

/// Write `config` as JSON next to the download destination.
pub fn write_config_file(dir: &Path, config: &Config) -> Result<PathBuf> {
    let config_path = dir.join("modelfetch.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(config)?)?;
    Ok(config_path)
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("modelfetch_lib=trace,modelfetch_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}

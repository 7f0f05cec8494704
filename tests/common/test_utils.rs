use std::sync::Arc;
use stream_relay::{
    Result,
    config::{Config, GenerationParametersConfig, InferenceConfig, LogsConfig, ServerConfig},
    inference::InferenceClient,
    server::AppState,
};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        inference: create_test_inference_config(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

pub fn create_test_inference_config() -> InferenceConfig {
    InferenceConfig {
        endpoint_url: "http://localhost:9000/invocations".to_string(),
        system_prompt: "please be helpful".to_string(),
        parameters: GenerationParametersConfig::default(),
    }
}

/// Build an application state around a mock or real client
pub fn create_test_state(client: Arc<dyn InferenceClient>) -> AppState {
    AppState {
        client,
        inference: Arc::new(create_test_inference_config()),
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
inference:
  endpoint_url: "http://localhost:9000/invocations"
  system_prompt: "please be helpful"
  parameters:
    do_sample: true
    max_new_tokens: 1024
    temperature: 0.2

server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
"#;

/// Minimal configuration relying on serde defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
inference:
  endpoint_url: "http://localhost:9000/invocations"
"#;

/// Configuration with an empty endpoint, rejected at load time
pub const EMPTY_ENDPOINT_CONFIG_YAML: &str = r#"
inference:
  endpoint_url: ""
"#;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub inference: InferenceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// URL of the remote streaming inference endpoint.
    pub endpoint_url: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default)]
    pub parameters: GenerationParametersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParametersConfig {
    #[serde(default = "default_do_sample")]
    pub do_sample: bool,
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub stop: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    /// Rejects configurations the server cannot start with. The endpoint
    /// URL must be present and well-formed before the handler is reachable.
    pub fn validate(&self) -> Result<()> {
        if self.inference.endpoint_url.trim().is_empty() {
            return Err(Error::config(
                "inference.endpoint_url must not be empty",
            ));
        }
        reqwest::Url::parse(&self.inference.endpoint_url).map_err(|e| {
            Error::config(format!(
                "inference.endpoint_url is not a valid URL: {}",
                e
            ))
        })?;
        Ok(())
    }
}

impl Default for GenerationParametersConfig {
    fn default() -> Self {
        Self {
            do_sample: default_do_sample(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            stop: Vec::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_system_prompt() -> String {
    "please be helpful".to_string()
}

fn default_do_sample() -> bool {
    true
}

fn default_max_new_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.2
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

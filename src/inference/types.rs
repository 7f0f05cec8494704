use crate::config::GenerationParametersConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// Generation parameters, serialized with the field names the remote
/// service expects (`do_sample`, `max_new_tokens`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub do_sample: bool,
    pub max_new_tokens: u32,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub stop: Vec<String>,
}

impl From<GenerationParametersConfig> for GenerationParameters {
    fn from(config: GenerationParametersConfig) -> Self {
        Self {
            do_sample: config.do_sample,
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            stop: config.stop,
        }
    }
}

/// JSON request body sent to the remote streaming inference endpoint.
/// Built once per invocation and immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub messages: Vec<ChatMessage>,
    pub parameters: GenerationParameters,
    pub stream: bool,
}

impl InferenceRequest {
    pub fn streaming(messages: Vec<ChatMessage>, parameters: GenerationParameters) -> Self {
        Self {
            messages,
            parameters,
            stream: true,
        }
    }
}

/// One decoded JSON fragment from the remote response stream.
///
/// A fragment without a `choices` array deserializes with an empty list
/// rather than failing, so it simply carries no delta.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

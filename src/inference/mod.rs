mod client;
mod types;

pub use client::{ByteStream, HttpInferenceClient, InferenceClient};
pub use types::{ChatMessage, ChunkChoice, ChunkDelta, GenerationParameters, InferenceRequest, StreamChunk};

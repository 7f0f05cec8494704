use async_trait::async_trait;
use bytes::Bytes;
use futures::{StreamExt, stream};
use std::sync::{Arc, Mutex};
use stream_relay::{
    Error, Result,
    inference::{ByteStream, InferenceClient, InferenceRequest},
};

/// Mock inference client for testing. Replays a scripted sequence of
/// transport chunks and records every request it receives.
pub struct MockInferenceClient {
    pub chunks: Arc<Mutex<Vec<Bytes>>>,
    pub requests: Arc<Mutex<Vec<InferenceRequest>>>,
    pub error: Option<String>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            chunks: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_chunks(self, chunks: Vec<Bytes>) -> Self {
        *self.chunks.lock().unwrap() = chunks;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn invoke_stream(&self, request: InferenceRequest) -> Result<ByteStream> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let chunks = self.chunks.lock().unwrap().clone();
        Ok(stream::iter(chunks.into_iter().map(Ok)).boxed())
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}

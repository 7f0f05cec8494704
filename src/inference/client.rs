use super::types::InferenceRequest;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use tracing::debug;

/// Lazily produced remote response body. Each item is one framed transport
/// chunk; chunks arrive in generation order and may split JSON fragments
/// at arbitrary byte boundaries.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends one streaming inference request and returns the response body
    /// as a stream of byte chunks. Fails if the call cannot be established
    /// or the endpoint answers with a non-success status.
    async fn invoke_stream(&self, request: InferenceRequest) -> Result<ByteStream>;
}

/// HTTP implementation backed by a shared `reqwest` client. Built once at
/// startup and reused read-only across invocations.
pub struct HttpInferenceClient {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpInferenceClient {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url: config.endpoint_url,
        }
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn invoke_stream(&self, request: InferenceRequest) -> Result<ByteStream> {
        debug!(
            "Invoking inference endpoint with {} messages",
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes_stream().map_err(Error::Network).boxed())
    }
}

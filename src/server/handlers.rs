use super::types::{ErrorResponse, GenerateRequest};
use crate::config::InferenceConfig;
use crate::inference::{ChatMessage, GenerationParameters, InferenceClient, InferenceRequest};
use crate::relay;
use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn InferenceClient>,
    pub inference: Arc<InferenceConfig>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4().to_string();
    info!(
        "Received generate request {} ({} input bytes)",
        request_id,
        request.input.len()
    );

    if request.input.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "input must not be empty".to_string(),
            }),
        ));
    }

    let messages = vec![
        ChatMessage::system(state.inference.system_prompt.clone()),
        ChatMessage::user(request.input),
    ];
    let payload = InferenceRequest::streaming(
        messages,
        GenerationParameters::from(state.inference.parameters.clone()),
    );

    // An establishment failure surfaces here, before any body bytes exist.
    let upstream = match state.client.invoke_stream(payload).await {
        Ok(upstream) => upstream,
        Err(e) => {
            error!(
                "Failed to invoke inference endpoint for request {}: {}",
                request_id, e
            );
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Inference call failed: {}", e),
                }),
            ));
        }
    };

    // Content type is declared before any delta is written; the body ends
    // exactly once, when the remote sequence is exhausted.
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .body(Body::from_stream(relay::delta_stream(upstream)))
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to build response: {}", e),
                }),
            )
        })
}

pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{ErrorResponse, GenerateRequest};

use crate::inference::HttpInferenceClient;
use crate::{Result, config::Config};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Shared remote client, read-only after initialization
    let client = HttpInferenceClient::new(config.inference.clone());

    let app_state = AppState {
        client: Arc::new(client),
        inference: Arc::new(config.inference.clone()),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Root-level handlers: greeting and health check.

use axum::extract::State;
use axum::Json;
use reel_db::repositories::MovieRepo;
use serde::Serialize;

use crate::response::MessageResponse;
use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of movies currently held in memory.
    pub movie_count: usize,
}

/// GET /
pub async fn greet() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hola mundo",
    })
}

/// GET /health -- returns service status and collection size.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        movie_count: MovieRepo::count(&state.store).await,
    })
}

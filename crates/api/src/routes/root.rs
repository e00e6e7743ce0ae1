use axum::routing::get;
use axum::Router;

use crate::handlers::root;
use crate::state::AppState;

/// Root-level routes.
///
/// ```text
/// GET /        -> greet
/// GET /health  -> health_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::greet))
        .route("/health", get(root::health_check))
}

//! Origin gate middleware.
//!
//! Runs before routing. Requests without an `Origin` header and requests
//! from allow-listed origins pass through; anything else is answered with
//! 403 and never reaches a handler. CORS response headers for permitted
//! origins are added separately by the CORS layer (see [`crate::router`]).

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::Response;
use reel_core::error::CoreError;
use reel_core::origin::is_origin_allowed;

use crate::error::AppError;
use crate::state::AppState;

/// Reject requests from origins outside `state.config.cors_origins`.
///
/// An empty `Origin` header counts as absent. A value that is not visible
/// ASCII cannot match any allow-list entry and is rejected.
pub async fn origin_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request.headers().get(ORIGIN).filter(|v| !v.is_empty());
    let origin = header.map(|v| v.to_str().unwrap_or_default());

    if !is_origin_allowed(origin, &state.config.cors_origins) {
        let declared = header
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();
        return Err(CoreError::OriginNotAllowed(declared).into());
    }

    Ok(next.run(request).await)
}

pub mod movies;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                      greeting
/// /health                service health
///
/// /movies                list (?genre=), create
/// /movies/{id}           get, update (PATCH), delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .nest("/movies", movies::router())
}

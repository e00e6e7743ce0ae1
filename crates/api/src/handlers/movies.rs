//! Handlers for the `/movies` resource.
//!
//! Payloads are taken as raw JSON and run through the movie schema before
//! anything touches the store, so a rejected request never mutates the
//! collection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::types::MovieId;
use reel_core::validation::{validate_movie, validate_partial_movie};
use reel_db::repositories::MovieRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::GenreFilter;
use crate::response::MessageResponse;
use crate::state::AppState;

fn movie_not_found(id: MovieId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// GET /movies
///
/// List all movies, or only those tagged with `?genre=` (case-insensitive).
pub async fn list_movies(
    State(state): State<AppState>,
    Query(filter): Query<GenreFilter>,
) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list(&state.store, filter.genre.as_deref()).await;

    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| movie_not_found(id))?;

    Ok(Json(movie))
}

/// POST /movies
///
/// Create a movie from a complete payload. The id is assigned here; any id
/// in the payload is ignored.
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<impl IntoResponse> {
    let input = validate_movie(&body).map_err(CoreError::from)?;
    let movie = MovieRepo::create(&state.store, input).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// Overwrite the supplied fields of an existing movie. The payload is
/// validated before the lookup, so an invalid body is a 400 even for an
/// unknown id.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    AppJson(body): AppJson<Value>,
) -> AppResult<impl IntoResponse> {
    let patch = validate_partial_movie(&body).map_err(CoreError::from)?;
    if patch.is_empty() {
        tracing::debug!(movie_id = %id, "Update carries no recognized fields");
    }

    let movie = MovieRepo::update(&state.store, &id, patch)
        .await
        .ok_or_else(|| movie_not_found(id))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<impl IntoResponse> {
    if !MovieRepo::delete(&state.store, &id).await {
        return Err(movie_not_found(id));
    }

    tracing::info!(movie_id = %id, "Movie deleted");

    Ok(Json(MessageResponse {
        message: "Movie deleted",
    }))
}

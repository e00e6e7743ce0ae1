//! In-memory movie storage.
//!
//! The collection lives in a [`MovieStore`] that is built once at startup and
//! handed to the HTTP layer through its state. Nothing is persisted: the
//! store is seeded from a static dataset and discarded on exit.

pub mod repositories;

use std::path::Path;
use std::sync::Arc;

use reel_core::movie::Movie;
use reel_core::validation::{validate_movie, ValidationFailure};
use tokio::sync::RwLock;

/// Dataset compiled into the binary and used when no seed file is configured.
pub const EMBEDDED_SEED: &str = include_str!("../data/movies.json");

/// Errors raised while building a store from a seed dataset.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed dataset is not a valid movie list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed dataset contains duplicate id {0}")]
    DuplicateId(String),

    #[error("Seed movie {id} is invalid: {failure}")]
    InvalidMovie {
        id: String,
        failure: ValidationFailure,
    },
}

/// Shared handle to the movie collection.
///
/// Cloning is cheap and every clone refers to the same collection. Reads
/// take a shared lock and mutations an exclusive one, so each repository
/// operation is atomic with respect to the others.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl MovieStore {
    /// Build a store holding `movies`, rejecting duplicate or invalid records.
    pub fn new(movies: Vec<Movie>) -> Result<Self, StoreError> {
        let mut seen = std::collections::HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                return Err(StoreError::DuplicateId(movie.id.clone()));
            }
            check_seed_movie(movie)?;
        }

        Ok(Self {
            movies: Arc::new(RwLock::new(movies)),
        })
    }

    pub(crate) fn movies(&self) -> &RwLock<Vec<Movie>> {
        &self.movies
    }
}

/// Parse a JSON array of movies.
pub fn parse_seed(json: &str) -> Result<Vec<Movie>, StoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Create a store from the embedded dataset, or from `seed_path` when given.
pub fn create_store(seed_path: Option<&Path>) -> Result<MovieStore, StoreError> {
    let movies = match seed_path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
            parse_seed(&json)?
        }
        None => parse_seed(EMBEDDED_SEED)?,
    };

    tracing::debug!(count = movies.len(), "Seed dataset loaded");
    MovieStore::new(movies)
}

/// Seed records must satisfy the same schema as client payloads.
fn check_seed_movie(movie: &Movie) -> Result<(), StoreError> {
    let value = serde_json::to_value(movie)?;
    validate_movie(&value)
        .map(|_| ())
        .map_err(|failure| StoreError::InvalidMovie {
            id: movie.id.clone(),
            failure,
        })
}

//! Query parameter types for API handlers.

use serde::Deserialize;

/// Optional genre filter for movie listing (`?genre=`).
#[derive(Debug, Default, Deserialize)]
pub struct GenreFilter {
    pub genre: Option<String>,
}

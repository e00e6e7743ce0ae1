//! Movie entity, genre enumeration, and the normalized payloads produced by
//! validation.
//!
//! [`NewMovie`] is the result of full validation (creation) and
//! [`MoviePatch`] the result of partial validation (update). Neither carries
//! an identifier: ids are assigned by the store and never change.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::MovieId;

// ---------------------------------------------------------------------------
// Schema constants
// ---------------------------------------------------------------------------

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;

/// Latest accepted release year.
pub const MAX_YEAR: i32 = 2100;

/// Rating assigned on creation when the payload omits one.
pub const DEFAULT_RATING: f64 = 5.0;

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Genres a movie may be tagged with.
///
/// The serialized form is the display label (`"Sci-Fi"`, not `"SciFi"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Crime,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    /// Every genre, in declaration order.
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Crime,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// Wire label for this genre.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Crime => "Crime",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Parse a wire label. Matching is exact.
    pub fn from_label(label: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|g| g.as_str() == label)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A movie record as stored in the collection and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes.
    pub duration: i32,
    pub rating: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Build a stored movie from a validated creation payload.
    pub fn from_new(id: MovieId, new: NewMovie) -> Self {
        Self {
            id,
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            rating: new.rating,
            poster: new.poster,
            genre: new.genre,
        }
    }

    /// Overwrite the fields present in `patch`. The id is never touched.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }

    /// Whether any of this movie's genres equals `filter`, ignoring ASCII case.
    pub fn has_genre(&self, filter: &str) -> bool {
        self.genre
            .iter()
            .any(|g| g.as_str().eq_ignore_ascii_case(filter))
    }
}

// ---------------------------------------------------------------------------
// Validated payloads
// ---------------------------------------------------------------------------

/// A fully validated creation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: i32,
    pub rating: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A set of field replacements. `None` means "leave unchanged".
///
/// The `validate` rules here are the format and range half of the movie
/// schema; type checking happens while the payload is read (see
/// [`crate::validation`]).
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MoviePatch {
    #[validate(length(min = 1, message = "Movie title must not be empty"))]
    pub title: Option<String>,

    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: Option<i32>,

    #[validate(length(min = 1, message = "Director must not be empty"))]
    pub director: Option<String>,

    #[validate(range(min = 1, message = "Duration must be a positive number of minutes"))]
    pub duration: Option<i32>,

    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f64>,

    #[validate(url(message = "Poster must be a valid URL"))]
    pub poster: Option<String>,

    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }
}

/// Movie identifiers are opaque strings. Newly created movies receive a
/// UUID v4 rendered in its hyphenated form.
pub type MovieId = String;

/// Generate a fresh identifier for a newly created movie.
pub fn new_movie_id() -> MovieId {
    uuid::Uuid::new_v4().to_string()
}

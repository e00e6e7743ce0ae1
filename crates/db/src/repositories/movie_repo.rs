//! Repository for the movie collection.
//!
//! Every operation takes the store lock exactly once, so a read-modify-write
//! such as [`MovieRepo::update`] cannot interleave with another mutation.
//! Insertion order is preserved.

use reel_core::movie::{Movie, MoviePatch, NewMovie};
use reel_core::types::new_movie_id;

use crate::MovieStore;

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies, optionally restricted to those tagged with `genre`
    /// (case-insensitive). An empty filter is treated as no filter.
    pub async fn list(store: &MovieStore, genre: Option<&str>) -> Vec<Movie> {
        let movies = store.movies().read().await;
        match genre.filter(|g| !g.is_empty()) {
            Some(genre) => movies
                .iter()
                .filter(|m| m.has_genre(genre))
                .cloned()
                .collect(),
            None => movies.clone(),
        }
    }

    /// Find a movie by its id.
    pub async fn find_by_id(store: &MovieStore, id: &str) -> Option<Movie> {
        let movies = store.movies().read().await;
        movies.iter().find(|m| m.id == id).cloned()
    }

    /// Append a new movie under a freshly generated id and return it.
    pub async fn create(store: &MovieStore, input: NewMovie) -> Movie {
        let movie = Movie::from_new(new_movie_id(), input);
        let mut movies = store.movies().write().await;
        movies.push(movie.clone());
        movie
    }

    /// Merge `patch` into the movie with the given id.
    ///
    /// Returns `None` if no movie has that id.
    pub async fn update(store: &MovieStore, id: &str, patch: MoviePatch) -> Option<Movie> {
        let mut movies = store.movies().write().await;
        let movie = movies.iter_mut().find(|m| m.id == id)?;
        movie.apply(patch);
        Some(movie.clone())
    }

    /// Remove the movie with the given id. Returns `true` if it existed.
    pub async fn delete(store: &MovieStore, id: &str) -> bool {
        let mut movies = store.movies().write().await;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of movies in the collection.
    pub async fn count(store: &MovieStore) -> usize {
        store.movies().read().await.len()
    }
}

//! Data access over the in-memory collection.

mod movie_repo;

pub use movie_repo::MovieRepo;

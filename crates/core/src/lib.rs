//! Domain layer for the Reel movie catalog.
//!
//! Pure logic only: the movie model, payload validation, and the
//! cross-origin allow-list check. Nothing in this crate performs I/O.

pub mod error;
pub mod movie;
pub mod origin;
pub mod types;
pub mod validation;

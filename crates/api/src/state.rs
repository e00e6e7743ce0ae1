use std::sync::Arc;

use reel_db::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is a shared handle and the config is
/// behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The movie collection.
    pub store: MovieStore,
    /// Server configuration (origin allow-list is read per request).
    pub config: Arc<ServerConfig>,
}

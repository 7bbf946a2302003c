use std::sync::Arc;

use cinedex_store::MovieRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the collection itself is owned once and shared by `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The movie collection.
    pub movies: Arc<MovieRepo>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(movies: MovieRepo, config: ServerConfig) -> Self {
        Self {
            movies: Arc::new(movies),
            config: Arc::new(config),
        }
    }
}

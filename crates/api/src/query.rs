//! Query parameter types for API handlers.

use serde::Deserialize;

/// `GET /movies?genre=` filter. An absent or empty value lists everything.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub genre: Option<String>,
}

impl MovieListParams {
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}

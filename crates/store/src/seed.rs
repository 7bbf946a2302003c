//! Loading the dataset the collection starts from.
//!
//! The dataset is a JSON array of complete movie records, ids included.
//! Records are trusted as-is apart from shape and id uniqueness.

use std::collections::HashSet;
use std::path::Path;

use cinedex_core::movie::Movie;

use crate::error::SeedError;

/// Dataset compiled into the binary, used when no path is configured.
const BUNDLED_DATASET: &str = include_str!("../../../data/movies.json");

/// Parse a dataset from JSON text.
pub fn parse(json: &str) -> Result<Vec<Movie>, SeedError> {
    let movies: Vec<Movie> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(movies.len());
    for movie in &movies {
        if !seen.insert(movie.id.as_str()) {
            return Err(SeedError::DuplicateId(movie.id.clone()));
        }
    }

    Ok(movies)
}

/// Read and parse a dataset file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Movie>, SeedError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let movies = parse(&json)?;
    tracing::debug!(path = %path.display(), count = movies.len(), "Seed dataset loaded");
    Ok(movies)
}

/// The dataset shipped with the service.
pub fn bundled() -> Result<Vec<Movie>, SeedError> {
    parse(BUNDLED_DATASET)
}

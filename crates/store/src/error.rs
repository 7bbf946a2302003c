use std::path::PathBuf;

use cinedex_core::types::MovieId;

/// Failures while loading the startup dataset.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed dataset contains duplicate id {0}")]
    DuplicateId(MovieId),
}

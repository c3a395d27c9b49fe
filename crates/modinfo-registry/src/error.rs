use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`ModRegistry`](crate::ModRegistry)
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse mod data JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Mod data must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Mod record {index} does not match the ModInfo shape: {message}")]
    SchemaViolation { index: usize, message: String },

    #[error("Failed to read mod data {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Mod data file {path:?} too large ({size} bytes, max {max})")]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}

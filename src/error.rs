//! Error types for the persistence and catalog layers.
//!
//! Neither error ever reaches the user: storage failures degrade favorites to
//! session-only, and catalog failures fall back to the built-in list.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the key/value store behind the favorites
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not determine a user data directory")]
    NoDataDir,
}

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate outfit id {0}")]
    DuplicateId(u32),
}

//! Error types for catalog loading and validation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate word id: {0}")]
    DuplicateWord(String),

    #[error("Duplicate grammar topic id: {0}")]
    DuplicateTopic(String),

    #[error("Word {0} has no display characters")]
    EmptyWord(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

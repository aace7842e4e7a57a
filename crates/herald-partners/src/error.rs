//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Catalog-related errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file not found
    #[error("Partner catalog not found: {0}")]
    NotFound(PathBuf),

    /// IO error reading the catalog
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

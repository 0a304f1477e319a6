//! Catalog loading error types
//!
//! The store itself never fails: unknown categories and out-of-range
//! positions degrade to empty results. Only reading a catalog file can go
//! wrong, and those failures are described here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid TOML or has the wrong shape
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog contains neither categories nor items
    #[error("Catalog is empty")]
    Empty,

    /// The catalog declares both categories and top-level items
    #[error("Catalog mixes categories with top-level items")]
    Mixed,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

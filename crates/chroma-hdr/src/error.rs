//! Error types for platform catalog loading.
//!
//! Detection, parsing and validation never fail; they report problems as
//! warnings on the metadata record. Only reading a catalog from disk or
//! YAML can error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type HdrResult<T> = Result<T, HdrError>;

/// Errors raised while loading a platform catalog.
#[derive(Debug, Error)]
pub enum HdrError {
    /// I/O error reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Catalog file not found.
    #[error("catalog file not found: {path}")]
    CatalogNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Two platforms share a name or alias.
    #[error("duplicate platform name: {name}")]
    DuplicatePlatform {
        /// The clashing name, lowercased.
        name: String,
    },

    /// A platform entry has an empty name.
    #[error("platform entry without a name")]
    UnnamedPlatform,
}

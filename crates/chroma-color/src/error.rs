//! Error types for strict conversion entry points.
//!
//! The regular conversion API never fails: it maps, clamps and reports.
//! [`ColorConverter::try_convert`](crate::ColorConverter::try_convert)
//! rejects input the lenient path would silently repair.

use thiserror::Error;

/// Color conversion error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// An input color has a NaN or infinite channel.
    #[error("non-finite color at index {index}")]
    NonFinite {
        /// Position in the input batch.
        index: usize,
    },

    /// Reference and processed batches differ in length.
    #[error("length mismatch: {expected} reference colors, {actual} processed")]
    LengthMismatch {
        /// Reference length.
        expected: usize,
        /// Processed length.
        actual: usize,
    },
}

/// Result type for strict color operations.
pub type ColorResult<T> = Result<T, ColorError>;

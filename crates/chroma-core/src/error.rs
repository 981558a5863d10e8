//! Error types for chroma-core.
//!
//! The color engine itself is total: conversions and validations return
//! values plus diagnostics rather than errors. The errors here cover the
//! one fallible edge in this crate, turning user-supplied strings into
//! identifiers.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string does not name a known color space.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// The string does not name a known white point.
    #[error("unknown white point: {0}")]
    UnknownWhitePoint(String),
}

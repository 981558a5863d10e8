//! # chroma-core
//!
//! Core types shared by every crate of the color engine.
//!
//! - [`RgbColor`], [`XyzColor`] - three-component color records
//! - [`ColorSpaceId`] - closed set of named RGB working spaces
//! - [`WhitePointId`] - reference white identifiers
//! - [`Error`] - parse errors for identifiers
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. Everything else builds on it:
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-math (matrices, chromatic adaptation)
//!    +-- chroma-transfer (transfer functions)
//!    +-- chroma-primaries (registry, conversion matrices)
//!    +-- chroma-color (gamut mapping, tone mapping, accuracy)
//!    +-- chroma-hdr (HDR detection, metadata, platform rules)
//! ```
//!
//! Colors carry no range invariant. Whether an RGB value lies in `[0, 1]`
//! is a question consumers ask through [`RgbColor::is_in_unit_range`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod colorspace;
pub mod error;

pub use color::*;
pub use colorspace::*;
pub use error::*;

/// Prelude module for convenient imports.
///
/// ```
/// use chroma_core::prelude::*;
///
/// let c = RgbColor::new(1.0, 0.0, 0.0);
/// assert!(c.is_in_unit_range());
/// assert_eq!(ColorSpaceId::Bt709.name(), "BT.709");
/// ```
pub mod prelude {
    pub use crate::color::{
        luminance_rec709, RgbColor, XyzColor, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G,
        REC709_LUMA_R,
    };
    pub use crate::colorspace::{ColorSpaceId, WhitePointId};
    pub use crate::error::{Error, Result};
}

//! # chroma-primaries
//!
//! Working-space descriptors and the matrices derived from them.
//!
//! - [`ColorSpaceRegistry`] - immutable catalog of color spaces and white
//!   points, built once and shared through `Arc`
//! - [`MatrixEngine`] - RGB→XYZ matrices and source→target conversion
//!   matrices
//! - [`ChromaticAdaptation`] - white point adaptation of XYZ values
//!
//! ```rust
//! use chroma_core::ColorSpaceId;
//! use chroma_primaries::{ColorSpaceRegistry, MatrixEngine};
//!
//! let engine = MatrixEngine::new(ColorSpaceRegistry::shared());
//! let m = engine.conversion_matrix(ColorSpaceId::Bt709, ColorSpaceId::Bt2020);
//!
//! // BT.709 red sits inside BT.2020, mostly on the red axis
//! let red = m.col(0);
//! assert!(red.x > 0.6 && red.y < 0.1 && red.z < 0.05);
//! ```
//!
//! # Failure model
//!
//! Nothing here returns an error. Unknown identifiers resolve to BT.709,
//! singular matrices invert to identity. Callers needing strict
//! behavior check [`ColorSpaceRegistry::contains`] first.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adaptation;
mod matrix;
mod registry;
mod white;

pub use adaptation::ChromaticAdaptation;
pub use matrix::{invert, primaries_to_xyz, MatrixEngine};
pub use registry::{Chromaticity, ColorSpaceDescriptor, ColorSpaceRegistry, RgbPrimaries};
pub use white::WhitePoint;

pub use chroma_math::AdaptationMethod;

//! # chroma-math
//!
//! Linear algebra for color conversion.
//!
//! - [`Mat3`] - 3x3 conversion matrices with a fail-safe inverse
//! - [`Vec3`] - RGB/XYZ triplets as vectors
//! - [`AdaptationMethod`] and [`adaptation_matrix`] - chromatic adaptation
//!   (Bradford, von Kries, CAT02)
//!
//! # Convention
//!
//! Matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! xyz = rgb_to_xyz * rgb
//! ```
//!
//! Composition reads right to left, so `b_from_xyz * xyz_from_a` maps
//! A to B.
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124, 0.3576, 0.1805],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.0193, 0.1192, 0.9505],
//! ]);
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 1.0, 1.0);
//! assert!((xyz.y - 1.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export of the glam types used for interop.
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Vec3 as GlamVec3};
}

//! # chroma-transfer
//!
//! Transfer functions between linear light and encoded signal values.
//!
//! | Module | Signal | Linear range |
//! |--------|--------|--------------|
//! | [`srgb`] | sRGB piecewise curve | [0, 1] |
//! | [`rec709`] | BT.709 / BT.2020 camera OETF | [0, 1] |
//! | [`gamma`] | pure power law | [0, 1] |
//! | [`pq`] | SMPTE ST 2084 | [0, 10000] cd/m² |
//! | [`hlg`] | ITU-R BT.2100 Hybrid Log-Gamma | [0, 1] scene light |
//!
//! [`TransferFunction`] dispatches over all of them so that color space
//! descriptors and HDR signaling can name a curve without naming a module.
//!
//! ```rust
//! use chroma_transfer::{pq, TransferFunction};
//!
//! let signal = pq::nits_to_signal(100.0);
//! assert!((signal - 0.508).abs() < 0.001);
//!
//! let srgb = TransferFunction::Srgb;
//! let mid = srgb.from_linear(srgb.to_linear(0.5));
//! assert!((mid - 0.5).abs() < 1e-5);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
pub mod gamma;
pub mod hlg;
pub mod pq;
pub mod rec709;
pub mod srgb;

pub use curve::TransferFunction;

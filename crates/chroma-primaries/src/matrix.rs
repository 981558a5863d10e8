//! RGB↔XYZ matrix derivation and conversion matrix composition.

use crate::registry::{ColorSpaceRegistry, RgbPrimaries};
use chroma_core::{ColorSpaceId, XyzColor};
use chroma_math::{adaptation_matrix, AdaptationMethod, Mat3, Vec3};
use std::sync::Arc;
use tracing::trace;

/// Inverts a matrix, returning identity when `|det| < 1e-10`.
#[inline]
pub fn invert(m: &Mat3) -> Mat3 {
    m.inverse_or_identity()
}

/// Derives the RGB→XYZ matrix of a set of primaries.
///
/// Each primary's chromaticity becomes an XYZ column with Y = 1. The
/// columns are then scaled by `S = P⁻¹ · W` so that RGB (1, 1, 1) lands
/// exactly on the white point.
///
/// ```rust
/// use chroma_core::XyzColor;
/// use chroma_math::Vec3;
/// use chroma_primaries::{primaries_to_xyz, RgbPrimaries};
///
/// let bt709 = RgbPrimaries::new((0.64, 0.33), (0.30, 0.60), (0.15, 0.06));
/// let d65 = XyzColor::from_xy(0.3127, 0.3290, 1.0);
/// let m = primaries_to_xyz(&bt709, d65);
///
/// // Middle row holds the luma coefficients
/// assert!((m.m[1][0] - 0.2126).abs() < 1e-3);
/// assert!((m.m[1][1] - 0.7152).abs() < 1e-3);
/// ```
pub fn primaries_to_xyz(primaries: &RgbPrimaries, white: XyzColor) -> Mat3 {
    let [r, g, b] = primaries.as_array().map(|c| Vec3::from(XyzColor::from_xy(c.x, c.y, 1.0)));
    let unscaled = Mat3::from_col_vecs(r, g, b);
    let s = invert(&unscaled) * Vec3::from(white);
    let m = Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z);
    if m.is_finite() { m } else { Mat3::IDENTITY }
}

/// Builds conversion matrices from the registry.
///
/// Matrices are recomputed per call. Callers with a hot (source, target)
/// pair keep the returned matrix themselves.
#[derive(Debug, Clone)]
pub struct MatrixEngine {
    registry: Arc<ColorSpaceRegistry>,
}

impl MatrixEngine {
    /// Creates an engine over a shared registry.
    pub fn new(registry: Arc<ColorSpaceRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this engine reads.
    pub fn registry(&self) -> &ColorSpaceRegistry {
        &self.registry
    }

    /// RGB→XYZ matrix of a color space, relative to its own white.
    pub fn primaries_matrix(&self, space: ColorSpaceId) -> Mat3 {
        let desc = self.registry.lookup(space);
        let white = self.registry.white_xyz(desc.white_point);
        primaries_to_xyz(&desc.primaries, white)
    }

    /// XYZ→RGB matrix of a color space.
    pub fn xyz_to_rgb_matrix(&self, space: ColorSpaceId) -> Mat3 {
        invert(&self.primaries_matrix(space))
    }

    /// Source RGB → target RGB without white point adaptation.
    ///
    /// Identity when `from == to`, otherwise
    /// `invert(primaries_matrix(to)) × primaries_matrix(from)`.
    pub fn conversion_matrix(&self, from: ColorSpaceId, to: ColorSpaceId) -> Mat3 {
        if from == to {
            return Mat3::IDENTITY;
        }
        trace!(%from, %to, "building conversion matrix");
        self.xyz_to_rgb_matrix(to) * self.primaries_matrix(from)
    }

    /// Source RGB → target RGB with an adaptation step between the two
    /// white points when they differ.
    pub fn adapted_conversion_matrix(
        &self,
        from: ColorSpaceId,
        to: ColorSpaceId,
        method: AdaptationMethod,
    ) -> Mat3 {
        let src_white = self.registry.lookup(from).white_point;
        let dst_white = self.registry.lookup(to).white_point;
        if from == to || src_white == dst_white {
            return self.conversion_matrix(from, to);
        }
        trace!(%from, %to, method = method.name(), "building adapted conversion matrix");
        let adapt = adaptation_matrix(
            method,
            self.registry.white_xyz(src_white).into(),
            self.registry.white_xyz(dst_white).into(),
        );
        self.xyz_to_rgb_matrix(to) * adapt * self.primaries_matrix(from)
    }
}

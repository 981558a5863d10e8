//! White point adaptation of XYZ values.

use crate::registry::ColorSpaceRegistry;
use chroma_core::{WhitePointId, XyzColor};
use chroma_math::{adaptation_matrix, AdaptationMethod, Mat3, Vec3};
use std::sync::Arc;

/// Adapts XYZ colors between registered white points.
///
/// ```rust
/// use chroma_core::{WhitePointId, XyzColor};
/// use chroma_primaries::{ChromaticAdaptation, ColorSpaceRegistry};
///
/// let cat = ChromaticAdaptation::new(ColorSpaceRegistry::shared());
/// let d65 = XyzColor::from_xy(0.3127, 0.3290, 1.0);
/// let out = cat.adapt(d65, WhitePointId::D65, WhitePointId::D50);
/// assert!((out.z - 0.8251).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct ChromaticAdaptation {
    registry: Arc<ColorSpaceRegistry>,
    method: AdaptationMethod,
}

impl ChromaticAdaptation {
    /// Bradford adaptation over a shared registry.
    pub fn new(registry: Arc<ColorSpaceRegistry>) -> Self {
        Self::with_method(registry, AdaptationMethod::Bradford)
    }

    /// Adaptation with an explicit method.
    pub fn with_method(registry: Arc<ColorSpaceRegistry>, method: AdaptationMethod) -> Self {
        Self { registry, method }
    }

    /// Configured method.
    pub fn method(&self) -> AdaptationMethod {
        self.method
    }

    /// Adaptation matrix with the configured method.
    pub fn adaptation_matrix(&self, from: WhitePointId, to: WhitePointId) -> Mat3 {
        self.adaptation_matrix_with(from, to, self.method)
    }

    /// Adaptation matrix with an explicit method. Identity when the white
    /// points resolve to the same XYZ.
    pub fn adaptation_matrix_with(
        &self,
        from: WhitePointId,
        to: WhitePointId,
        method: AdaptationMethod,
    ) -> Mat3 {
        let src = self.registry.white_xyz(from);
        let dst = self.registry.white_xyz(to);
        adaptation_matrix(method, Vec3::from(src), Vec3::from(dst))
    }

    /// Adapts one XYZ color.
    pub fn adapt(&self, xyz: XyzColor, from: WhitePointId, to: WhitePointId) -> XyzColor {
        (self.adaptation_matrix(from, to) * Vec3::from(xyz)).into()
    }
}

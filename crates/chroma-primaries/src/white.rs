//! Reference white points and their chromaticities.

use crate::registry::Chromaticity;
use chroma_core::{WhitePointId, XyzColor};

/// A resolved reference white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Identifier.
    pub id: WhitePointId,
    /// CIE xy chromaticity.
    pub xy: Chromaticity,
    /// Tristimulus value normalized to Y = 1.
    pub xyz: XyzColor,
}

impl WhitePoint {
    /// Resolves a white point from its chromaticity.
    pub fn new(id: WhitePointId, xy: Chromaticity) -> Self {
        Self {
            id,
            xy,
            xyz: XyzColor::from_xy(xy.x, xy.y, 1.0),
        }
    }
}

pub(crate) const D50_XY: Chromaticity = Chromaticity::new(0.3457, 0.3585);
pub(crate) const D55_XY: Chromaticity = Chromaticity::new(0.3324, 0.3474);
pub(crate) const D60_XY: Chromaticity = Chromaticity::new(0.32168, 0.33767);
pub(crate) const D65_XY: Chromaticity = Chromaticity::new(0.3127, 0.3290);
pub(crate) const DCI_XY: Chromaticity = Chromaticity::new(0.314, 0.351);
pub(crate) const E_XY: Chromaticity = Chromaticity::new(1.0 / 3.0, 1.0 / 3.0);

/// Chromaticity of a standard white, `None` for [`WhitePointId::Custom`].
pub(crate) fn standard_xy(id: WhitePointId) -> Option<Chromaticity> {
    match id {
        WhitePointId::D50 => Some(D50_XY),
        WhitePointId::D55 => Some(D55_XY),
        WhitePointId::D60 => Some(D60_XY),
        WhitePointId::D65 => Some(D65_XY),
        WhitePointId::Dci => Some(DCI_XY),
        WhitePointId::E => Some(E_XY),
        WhitePointId::Custom => None,
    }
}

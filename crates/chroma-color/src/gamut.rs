//! Gamut tests, gamut mapping and gamut geometry approximations.
//!
//! The gamut test is the RGB unit cube: a color is representable when
//! every channel lies in `[0, 1]`. This is a conservative stand-in for the
//! chromaticity triangle and is applied the same way to every space.
//!
//! Boundary and coverage figures are fixed approximations. Delta-E and
//! coverage thresholds elsewhere are calibrated against these values.

use chroma_core::{luminance_rec709, ColorSpaceId, RgbColor};
use std::fmt;

/// Default highlight compression for perceptual mapping.
pub const DEFAULT_COMPRESSION: f32 = 0.8;

/// Share of the distance to luma kept by saturation-preserving mapping.
const SATURATION_KEEP: f32 = 0.9;

/// Gamut mapping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamutMappingMethod {
    /// Hard clamp of each channel.
    Clip,
    /// Highlight compression toward the cube, then clamp.
    #[default]
    Perceptual,
    /// Pull channels toward BT.709 luma, then clamp.
    SaturationPreserving,
    /// In-gamut colors untouched, the rest clipped.
    RelativeColorimetric,
    /// Same as relative colorimetric; no white point scaling is applied.
    AbsoluteColorimetric,
}

impl GamutMappingMethod {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Perceptual => "perceptual",
            Self::SaturationPreserving => "saturation-preserving",
            Self::RelativeColorimetric => "relative colorimetric",
            Self::AbsoluteColorimetric => "absolute colorimetric",
        }
    }
}

impl fmt::Display for GamutMappingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sampled outline of a gamut.
#[derive(Debug, Clone, PartialEq)]
pub struct GamutBoundary {
    /// Space the boundary was computed for.
    pub space: ColorSpaceId,
    /// Boundary samples in RGB.
    pub points: Vec<RgbColor>,
    /// Area estimate.
    pub area: f32,
    /// Volume estimate.
    pub volume: f32,
    /// `[r_min, r_max, g_min, g_max, b_min, b_max]`.
    pub limits: [f32; 6],
}

/// True when every channel lies in `[0, 1]`.
///
/// The target space does not refine the test.
#[inline]
pub fn is_in_gamut(color: RgbColor, _space: ColorSpaceId) -> bool {
    color.is_in_unit_range()
}

/// Brings a color into the unit cube with the given method.
///
/// `compression` only affects [`GamutMappingMethod::Perceptual`] and is
/// clamped to `[0, 1]`: 0 hard-clips highlights, 1 scales the brightest
/// channel exactly onto 1.0.
///
/// ```rust
/// use chroma_color::{map_color, GamutMappingMethod};
/// use chroma_core::{ColorSpaceId, RgbColor};
///
/// let hot = RgbColor::new(2.0, 0.5, -0.1);
/// let mapped = map_color(hot, ColorSpaceId::Bt709, GamutMappingMethod::Perceptual, 1.0);
/// assert_eq!(mapped, RgbColor::new(1.0, 0.25, 0.0));
/// ```
pub fn map_color(
    color: RgbColor,
    target: ColorSpaceId,
    method: GamutMappingMethod,
    compression: f32,
) -> RgbColor {
    match method {
        GamutMappingMethod::Clip
        | GamutMappingMethod::RelativeColorimetric
        | GamutMappingMethod::AbsoluteColorimetric => color.clamp01(),
        GamutMappingMethod::Perceptual => perceptual(color, target, compression),
        GamutMappingMethod::SaturationPreserving => saturation_preserving(color, target),
    }
}

fn perceptual(color: RgbColor, target: ColorSpaceId, compression: f32) -> RgbColor {
    if is_in_gamut(color, target) {
        return color;
    }
    let factor = if compression.is_nan() {
        DEFAULT_COMPRESSION
    } else {
        compression.clamp(0.0, 1.0)
    };
    let lifted = color.map(|c| c.max(0.0));
    let peak = lifted.max_channel();
    let compressed = if peak > 1.0 {
        let scale = (1.0 - factor) + factor / peak;
        lifted.map(|c| c * scale)
    } else {
        lifted
    };
    compressed.clamp01()
}

fn saturation_preserving(color: RgbColor, target: ColorSpaceId) -> RgbColor {
    let lifted = color.map(|c| c.max(0.0));
    if is_in_gamut(lifted, target) {
        return lifted;
    }
    let luma = luminance_rec709(lifted);
    lifted
        .map(|c| luma + (c - luma) * SATURATION_KEEP)
        .clamp01()
}

/// Unit-cube boundary samples: the eight corners, then for `t` in 0.0,
/// 0.1, ..., 1.0 the points on the three axes and three face diagonals.
pub fn gamut_boundary(space: ColorSpaceId) -> GamutBoundary {
    let mut points = Vec::with_capacity(8 + 11 * 6);
    for corner in 0..8u8 {
        points.push(RgbColor::new(
            f32::from(corner & 1),
            f32::from((corner >> 1) & 1),
            f32::from((corner >> 2) & 1),
        ));
    }
    for step in 0..=10u8 {
        let t = f32::from(step) / 10.0;
        points.extend([
            RgbColor::new(t, 0.0, 0.0),
            RgbColor::new(0.0, t, 0.0),
            RgbColor::new(0.0, 0.0, t),
            RgbColor::new(t, t, 0.0),
            RgbColor::new(t, 0.0, t),
            RgbColor::new(0.0, t, t),
        ]);
    }
    GamutBoundary {
        space,
        points,
        area: 1.0,
        volume: 1.0,
        limits: [0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
    }
}

/// Fraction of `target` covered by `source`, from a reference table.
///
/// | source | target | coverage |
/// |--------|--------|----------|
/// | same | same | 1.00 |
/// | BT.709 | BT.2020 | 0.76 |
/// | BT.2020 | BT.709 | 1.00 |
/// | DCI-P3 | BT.709 | 0.89 |
/// | anything else | | 0.85 |
pub fn gamut_coverage(source: ColorSpaceId, target: ColorSpaceId) -> f32 {
    use ColorSpaceId::*;
    match (source, target) {
        _ if source == target => 1.0,
        (Bt709, Bt2020) => 0.76,
        (Bt2020, Bt709) => 1.0,
        (DciP3, Bt709) => 0.89,
        _ => 0.85,
    }
}

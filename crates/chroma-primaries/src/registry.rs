//! Immutable catalog of working spaces and white points.
//!
//! The registry is built once and handed to every component as
//! `Arc<ColorSpaceRegistry>`. [`ColorSpaceRegistry::shared`] hands out the
//! process-wide standard instance; there is no interior mutability.

use crate::white::{self, WhitePoint};
use chroma_core::{ColorSpaceId, WhitePointId, XyzColor};
use chroma_transfer::TransferFunction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// CIE 1931 xy chromaticity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Chromaticity {
    /// x coordinate.
    pub x: f32,
    /// y coordinate.
    pub y: f32,
}

impl Chromaticity {
    /// Creates a chromaticity.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates lie in `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// CIE D65 white.
    pub const D65: Self = crate::white::D65_XY;
    /// DCI theatrical white.
    pub const DCI: Self = crate::white::DCI_XY;
}

/// Red, green and blue primary chromaticities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RgbPrimaries {
    /// Red primary.
    pub red: Chromaticity,
    /// Green primary.
    pub green: Chromaticity,
    /// Blue primary.
    pub blue: Chromaticity,
}

impl RgbPrimaries {
    /// Creates primaries from `(x, y)` pairs in R, G, B order.
    pub const fn new(r: (f32, f32), g: (f32, f32), b: (f32, f32)) -> Self {
        Self {
            red: Chromaticity::new(r.0, r.1),
            green: Chromaticity::new(g.0, g.1),
            blue: Chromaticity::new(b.0, b.1),
        }
    }

    /// The three primaries in R, G, B order.
    pub fn as_array(&self) -> [Chromaticity; 3] {
        [self.red, self.green, self.blue]
    }

    /// True when every primary is normalized.
    pub fn is_normalized(&self) -> bool {
        self.as_array().iter().all(Chromaticity::is_normalized)
    }

    /// ITU-R BT.709 primaries.
    pub const BT709: Self = BT709_PRIMARIES;
    /// ITU-R BT.2020 primaries.
    pub const BT2020: Self = BT2020_PRIMARIES;
    /// DCI-P3 and Display P3 primaries.
    pub const P3: Self = P3_PRIMARIES;
}

pub(crate) const BT709_PRIMARIES: RgbPrimaries =
    RgbPrimaries::new((0.64, 0.33), (0.30, 0.60), (0.15, 0.06));
const BT2020_PRIMARIES: RgbPrimaries =
    RgbPrimaries::new((0.708, 0.292), (0.170, 0.797), (0.131, 0.046));
const P3_PRIMARIES: RgbPrimaries =
    RgbPrimaries::new((0.680, 0.320), (0.265, 0.690), (0.150, 0.060));
const ADOBE_PRIMARIES: RgbPrimaries =
    RgbPrimaries::new((0.64, 0.33), (0.21, 0.71), (0.15, 0.06));
const PROPHOTO_PRIMARIES: RgbPrimaries =
    RgbPrimaries::new((0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001));
const SMPTE_C_PRIMARIES: RgbPrimaries =
    RgbPrimaries::new((0.630, 0.340), (0.310, 0.595), (0.155, 0.070));
const BT601_625_PRIMARIES: RgbPrimaries =
    RgbPrimaries::new((0.640, 0.330), (0.290, 0.600), (0.150, 0.060));
const AP1_PRIMARIES: RgbPrimaries =
    RgbPrimaries::new((0.713, 0.293), (0.165, 0.830), (0.128, 0.044));

/// Description of one RGB working space.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpaceDescriptor {
    /// Identifier.
    pub id: ColorSpaceId,
    /// Reference white.
    pub white_point: WhitePointId,
    /// RGB primary chromaticities.
    pub primaries: RgbPrimaries,
    /// Display gamma exponent (1.0 for linear spaces).
    pub gamma: f32,
    /// Linear-light encoding.
    pub linear: bool,
    /// Gamut noticeably larger than BT.709.
    pub wide_gamut: bool,
    /// Short name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

impl ColorSpaceDescriptor {
    /// Transfer function used to decode this space's signal values.
    pub fn transfer(&self) -> TransferFunction {
        match self.id {
            _ if self.linear => TransferFunction::Linear,
            ColorSpaceId::Srgb => TransferFunction::Srgb,
            _ => TransferFunction::Gamma(self.gamma),
        }
    }
}

/// Builds one descriptor. A gamma of exactly 1.0 marks the space linear.
fn space(
    id: ColorSpaceId,
    name: &'static str,
    white_point: WhitePointId,
    primaries: RgbPrimaries,
    gamma: f32,
    wide_gamut: bool,
    description: &'static str,
) -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        id,
        white_point,
        primaries,
        gamma,
        linear: gamma == 1.0,
        wide_gamut,
        name,
        description,
    }
}

/// BT.709, also the descriptor unknown ids resolve to.
fn bt709_space() -> ColorSpaceDescriptor {
    space(
        ColorSpaceId::Bt709,
        "BT.709",
        WhitePointId::D65,
        BT709_PRIMARIES,
        2.4,
        false,
        "ITU-R BT.709 HD television standard",
    )
}

fn standard_spaces() -> Vec<ColorSpaceDescriptor> {
    use ColorSpaceId as Id;
    use WhitePointId as Wp;
    vec![
        space(
            Id::Bt601_525,
            "BT.601-525",
            Wp::D65,
            SMPTE_C_PRIMARIES,
            2.2,
            false,
            "ITU-R BT.601 525-line standard definition television",
        ),
        space(
            Id::Bt601_625,
            "BT.601-625",
            Wp::D65,
            BT601_625_PRIMARIES,
            2.2,
            false,
            "ITU-R BT.601 625-line standard definition television",
        ),
        bt709_space(),
        space(
            Id::Srgb,
            "sRGB",
            Wp::D65,
            BT709_PRIMARIES,
            2.2,
            false,
            "Standard RGB color space for computer displays",
        ),
        space(
            Id::Bt2020,
            "BT.2020",
            Wp::D65,
            BT2020_PRIMARIES,
            2.4,
            true,
            "ITU-R BT.2020 UHD television standard",
        ),
        space(
            Id::Bt2020Ncl,
            "BT.2020 NCL",
            Wp::D65,
            BT2020_PRIMARIES,
            2.4,
            true,
            "ITU-R BT.2020 non-constant luminance",
        ),
        space(
            Id::Bt2020Cl,
            "BT.2020 CL",
            Wp::D65,
            BT2020_PRIMARIES,
            2.4,
            true,
            "ITU-R BT.2020 constant luminance",
        ),
        space(
            Id::DciP3,
            "DCI-P3",
            Wp::Dci,
            P3_PRIMARIES,
            2.6,
            true,
            "Digital Cinema Initiative P3 color space",
        ),
        space(
            Id::DisplayP3,
            "Display P3",
            Wp::D65,
            P3_PRIMARIES,
            2.2,
            true,
            "P3 primaries with D65 white for consumer displays",
        ),
        space(
            Id::AdobeRgb,
            "Adobe RGB",
            Wp::D65,
            ADOBE_PRIMARIES,
            2.2,
            true,
            "Adobe RGB (1998) wide gamut color space",
        ),
        space(
            Id::ProPhotoRgb,
            "ProPhoto RGB",
            Wp::D50,
            PROPHOTO_PRIMARIES,
            1.8,
            true,
            "ROMM RGB photographic working space",
        ),
        space(
            Id::SmpteC,
            "SMPTE-C",
            Wp::D65,
            SMPTE_C_PRIMARIES,
            2.2,
            false,
            "SMPTE 170M studio monitor primaries",
        ),
        space(
            Id::LinearBt709,
            "Linear BT.709",
            Wp::D65,
            BT709_PRIMARIES,
            1.0,
            false,
            "Linear-light BT.709 primaries",
        ),
        space(
            Id::LinearBt2020,
            "Linear BT.2020",
            Wp::D65,
            BT2020_PRIMARIES,
            1.0,
            true,
            "Linear-light BT.2020 primaries",
        ),
        space(
            Id::AcesCg,
            "ACEScg",
            Wp::D60,
            AP1_PRIMARIES,
            1.0,
            true,
            "ACES AP1 linear working space",
        ),
    ]
}

/// Catalog of color spaces and white points.
///
/// # Example
///
/// ```rust
/// use chroma_core::ColorSpaceId;
/// use chroma_primaries::ColorSpaceRegistry;
///
/// let registry = ColorSpaceRegistry::new();
/// assert!(registry.lookup(ColorSpaceId::DciP3).wide_gamut);
///
/// // Unknown ids fail closed to BT.709
/// assert_eq!(registry.lookup(ColorSpaceId::Unknown).id, ColorSpaceId::Bt709);
/// ```
#[derive(Debug, Clone)]
pub struct ColorSpaceRegistry {
    spaces: HashMap<ColorSpaceId, ColorSpaceDescriptor>,
    whites: HashMap<WhitePointId, WhitePoint>,
    fallback: ColorSpaceDescriptor,
}

impl ColorSpaceRegistry {
    /// Builds the standard registry. The custom white point is D65.
    pub fn new() -> Self {
        Self::with_custom_white(white::D65_XY)
    }

    /// Builds the standard registry with the given custom white point.
    pub fn with_custom_white(custom: Chromaticity) -> Self {
        let spaces: HashMap<_, _> = standard_spaces()
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        let whites = WhitePointId::ALL
            .iter()
            .map(|&id| {
                let xy = white::standard_xy(id).unwrap_or(custom);
                (id, WhitePoint::new(id, xy))
            })
            .collect();

        tracing::debug!(spaces = spaces.len(), "color space registry built");
        Self {
            spaces,
            whites,
            fallback: bt709_space(),
        }
    }

    /// Process-wide standard registry, built on first use.
    ///
    /// Every call returns a handle to the same instance.
    pub fn shared() -> Arc<Self> {
        static INSTANCE: OnceLock<Arc<ColorSpaceRegistry>> = OnceLock::new();
        Arc::clone(INSTANCE.get_or_init(|| Arc::new(Self::new())))
    }

    /// Descriptor for `id`, or the BT.709 descriptor when `id` is not
    /// registered.
    pub fn lookup(&self, id: ColorSpaceId) -> &ColorSpaceDescriptor {
        self.spaces.get(&id).unwrap_or(&self.fallback)
    }

    /// True when `id` has its own descriptor.
    pub fn contains(&self, id: ColorSpaceId) -> bool {
        self.spaces.contains_key(&id)
    }

    /// Every registered identifier, sorted.
    pub fn supported_spaces(&self) -> Vec<ColorSpaceId> {
        let mut ids: Vec<_> = self.spaces.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Iterates over all descriptors in no particular order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ColorSpaceDescriptor> {
        self.spaces.values()
    }

    /// Resolved white point. Every [`WhitePointId`] is registered.
    pub fn white_point(&self, id: WhitePointId) -> WhitePoint {
        self.whites
            .get(&id)
            .copied()
            .unwrap_or_else(|| WhitePoint::new(WhitePointId::D65, white::D65_XY))
    }

    /// XYZ of a white point with Y = 1.
    pub fn white_xyz(&self, id: WhitePointId) -> XyzColor {
        self.white_point(id).xyz
    }

    /// White point of a color space.
    pub fn white_of(&self, id: ColorSpaceId) -> WhitePoint {
        self.white_point(self.lookup(id).white_point)
    }
}

impl Default for ColorSpaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn shared_is_built_once() {
        let a = ColorSpaceRegistry::shared();
        let b = ColorSpaceRegistry::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn fallback_matches_bt709_entry() {
        let r = ColorSpaceRegistry::new();
        let bt709 = r.lookup(ColorSpaceId::Bt709);
        let unknown = r.lookup(ColorSpaceId::Unknown);
        assert_eq!(unknown, bt709);
        assert_eq!(*unknown, bt709_space());
    }

    #[test]
    fn supported_excludes_unknown() {
        let r = ColorSpaceRegistry::new();
        let ids = r.supported_spaces();
        assert_eq!(ids.len(), ColorSpaceId::ALL.len() - 1);
        assert!(!ids.contains(&ColorSpaceId::Unknown));
        assert!(!r.contains(ColorSpaceId::Unknown));
    }

    #[test]
    fn descriptor_flags() {
        let r = ColorSpaceRegistry::new();
        let p3 = r.lookup(ColorSpaceId::DciP3);
        assert_eq!(p3.white_point, WhitePointId::Dci);
        assert_eq!(p3.gamma, 2.6);
        assert!(p3.wide_gamut && !p3.linear);

        let aces = r.lookup(ColorSpaceId::AcesCg);
        assert!(aces.linear);
        assert_eq!(aces.transfer(), TransferFunction::Linear);
        assert_eq!(r.lookup(ColorSpaceId::Srgb).transfer(), TransferFunction::Srgb);
        assert_eq!(
            r.lookup(ColorSpaceId::Bt709).transfer(),
            TransferFunction::Gamma(2.4)
        );
    }

    #[test]
    fn every_primary_is_normalized() {
        let r = ColorSpaceRegistry::new();
        for d in r.descriptors() {
            for p in d.primaries.as_array() {
                assert!(p.is_normalized(), "{}", d.name);
            }
            assert_eq!(d.name, d.id.name());
        }
    }

    #[test]
    fn white_point_xyz_values() {
        let r = ColorSpaceRegistry::new();
        let d65 = r.white_xyz(WhitePointId::D65);
        assert_abs_diff_eq!(d65.x, 0.9505, epsilon = 1e-3);
        assert_abs_diff_eq!(d65.z, 1.0891, epsilon = 1e-3);
        let d50 = r.white_xyz(WhitePointId::D50);
        assert_abs_diff_eq!(d50.x, 0.9642, epsilon = 1e-3);
        assert_abs_diff_eq!(d50.z, 0.8251, epsilon = 1e-3);
        let e = r.white_xyz(WhitePointId::E);
        assert_abs_diff_eq!(e.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn custom_white_is_configurable() {
        let r = ColorSpaceRegistry::with_custom_white(Chromaticity::new(0.3457, 0.3585));
        let custom = r.white_xyz(WhitePointId::Custom);
        let d50 = r.white_xyz(WhitePointId::D50);
        assert_eq!(custom, d50);
        assert_eq!(
            ColorSpaceRegistry::new().white_xyz(WhitePointId::Custom),
            ColorSpaceRegistry::new().white_xyz(WhitePointId::D65)
        );
    }
}

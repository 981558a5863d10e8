//! Display description and the color management facade.

use crate::convert::{ColorConversionConfig, ColorConverter, ConversionResult};
use crate::gamut::GamutMappingMethod;
use crate::tonemap::tone_map_to_sdr;
use chroma_core::{ColorSpaceId, RgbColor, WhitePointId};
use chroma_primaries::ColorSpaceRegistry;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const SRGB_PROFILE: &str = "sRGB_IEC61966-2-1.icc";

/// What the output display can show.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Native RGB space of the panel.
    pub native_space: ColorSpaceId,
    /// Panel white.
    pub white_point: WhitePointId,
    /// Peak luminance in nits.
    pub max_luminance: f32,
    /// Black level in nits.
    pub min_luminance: f32,
    /// Panel accepts HDR signals.
    pub hdr_capable: bool,
    /// Panel covers more than BT.709.
    pub wide_gamut: bool,
    /// Optional ICC profile of the panel.
    pub profile_path: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            native_space: ColorSpaceId::Bt709,
            white_point: WhitePointId::D65,
            max_luminance: 100.0,
            min_luminance: 0.1,
            hdr_capable: false,
            wide_gamut: false,
            profile_path: None,
        }
    }
}

/// Color management for one output display.
///
/// Owns its [`DisplayConfig`]. Threads targeting different displays hold
/// separate instances; the registry underneath is shared.
///
/// ```rust
/// use chroma_color::{ColorManagement, DisplayConfig};
/// use chroma_core::{ColorSpaceId, RgbColor};
///
/// let mut cm = ColorManagement::default();
/// cm.set_display_config(DisplayConfig {
///     native_space: ColorSpaceId::DisplayP3,
///     ..DisplayConfig::default()
/// });
/// let out = cm.adapt_for_display(RgbColor::gray(0.5), ColorSpaceId::Bt709);
/// assert!(out.is_in_unit_range());
/// ```
#[derive(Debug, Clone)]
pub struct ColorManagement {
    converter: ColorConverter,
    display: DisplayConfig,
}

impl ColorManagement {
    /// Creates a manager over a shared registry with a default display.
    pub fn new(registry: Arc<ColorSpaceRegistry>) -> Self {
        Self {
            converter: ColorConverter::new(registry),
            display: DisplayConfig::default(),
        }
    }

    /// The converter used for all conversions.
    pub fn converter(&self) -> &ColorConverter {
        &self.converter
    }

    /// Replaces the display description.
    pub fn set_display_config(&mut self, config: DisplayConfig) {
        debug!(
            space = %config.native_space,
            max_nits = config.max_luminance,
            hdr = config.hdr_capable,
            "display config set"
        );
        self.display = config;
    }

    /// Current display description.
    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    /// Batch conversion with an explicit configuration.
    pub fn convert(&self, colors: &[RgbColor], config: &ColorConversionConfig) -> ConversionResult {
        self.converter.convert(colors, config)
    }

    /// Single-color conversion.
    pub fn convert_single(
        &self,
        color: RgbColor,
        from: ColorSpaceId,
        to: ColorSpaceId,
        method: GamutMappingMethod,
    ) -> RgbColor {
        self.converter.convert_single(color, from, to, method)
    }

    /// Converts into the display's native space.
    ///
    /// BT.2020 content on a display without HDR support is additionally
    /// tone mapped with [`tone_map_to_sdr`] at the display's peak.
    pub fn adapt_for_display(&self, color: RgbColor, source: ColorSpaceId) -> RgbColor {
        let adapted = self.convert_single(
            color,
            source,
            self.display.native_space,
            GamutMappingMethod::Perceptual,
        );
        if !self.display.hdr_capable && source == ColorSpaceId::Bt2020 {
            tone_map_to_sdr(adapted, self.display.max_luminance)
        } else {
            adapted
        }
    }

    /// [`adapt_for_display`](Self::adapt_for_display) over a batch.
    pub fn adapt_all_for_display(
        &self,
        colors: &[RgbColor],
        source: ColorSpaceId,
    ) -> Vec<RgbColor> {
        colors
            .iter()
            .map(|&c| self.adapt_for_display(c, source))
            .collect()
    }

    /// Records an ICC profile path for the display.
    ///
    /// The profile is not parsed. Always returns true.
    pub fn load_icc_profile(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "icc profile recorded");
        self.display.profile_path = Some(path);
        true
    }

    /// Conventional ICC profile file name for a space.
    pub fn recommended_profile(space: ColorSpaceId) -> &'static str {
        match space {
            ColorSpaceId::Srgb => SRGB_PROFILE,
            ColorSpaceId::AdobeRgb => "AdobeRGB1998.icc",
            ColorSpaceId::DciP3 => "DCI-P3.icc",
            ColorSpaceId::Bt2020 => "Rec2020.icc",
            _ => SRGB_PROFILE,
        }
    }

    /// True when the registered space is wider than BT.709.
    pub fn is_wide_gamut(&self, space: ColorSpaceId) -> bool {
        self.converter.engine().registry().lookup(space).wide_gamut
    }

    /// True for the BT.2020 family.
    pub fn is_hdr_capable(space: ColorSpaceId) -> bool {
        space.is_bt2020_family()
    }
}

impl Default for ColorManagement {
    fn default() -> Self {
        Self::new(ColorSpaceRegistry::shared())
    }
}

fn shortcut(color: RgbColor, from: ColorSpaceId, to: ColorSpaceId) -> RgbColor {
    ColorConverter::default().convert_single(color, from, to, GamutMappingMethod::Perceptual)
}

/// BT.709 to BT.2020, perceptual mapping.
pub fn bt709_to_bt2020(color: RgbColor) -> RgbColor {
    shortcut(color, ColorSpaceId::Bt709, ColorSpaceId::Bt2020)
}

/// BT.2020 to BT.709, perceptual mapping.
pub fn bt2020_to_bt709(color: RgbColor) -> RgbColor {
    shortcut(color, ColorSpaceId::Bt2020, ColorSpaceId::Bt709)
}

/// DCI-P3 to Display P3, perceptual mapping.
pub fn dci_p3_to_display_p3(color: RgbColor) -> RgbColor {
    shortcut(color, ColorSpaceId::DciP3, ColorSpaceId::DisplayP3)
}

/// sRGB to BT.709, perceptual mapping.
pub fn srgb_to_bt709(color: RgbColor) -> RgbColor {
    shortcut(color, ColorSpaceId::Srgb, ColorSpaceId::Bt709)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_display() {
        let d = DisplayConfig::default();
        assert_eq!(d.native_space, ColorSpaceId::Bt709);
        assert_eq!(d.max_luminance, 100.0);
        assert!(!d.hdr_capable && !d.wide_gamut);
        assert!(d.profile_path.is_none());
    }

    #[test]
    fn bt2020_on_sdr_display_is_tone_mapped() {
        let cm = ColorManagement::default();
        let plain = cm.convert_single(
            RgbColor::gray(0.5),
            ColorSpaceId::Bt2020,
            ColorSpaceId::Bt709,
            GamutMappingMethod::Perceptual,
        );
        let shown = cm.adapt_for_display(RgbColor::gray(0.5), ColorSpaceId::Bt2020);
        let expected = tone_map_to_sdr(plain, 100.0);
        assert_abs_diff_eq!(shown.g, expected.g, epsilon = 1e-6);
        assert!(shown.is_in_unit_range());
    }

    #[test]
    fn hdr_display_skips_tone_mapping() {
        let mut cm = ColorManagement::default();
        cm.set_display_config(DisplayConfig {
            native_space: ColorSpaceId::Bt2020,
            hdr_capable: true,
            max_luminance: 1000.0,
            ..DisplayConfig::default()
        });
        let c = RgbColor::new(0.2, 0.3, 0.4);
        assert_eq!(cm.adapt_for_display(c, ColorSpaceId::Bt2020), c);
        assert_eq!(cm.display_config().max_luminance, 1000.0);
    }

    #[test]
    fn icc_path_is_recorded() {
        let mut cm = ColorManagement::default();
        assert!(cm.load_icc_profile("/profiles/panel.icc"));
        assert_eq!(
            cm.display_config().profile_path.as_deref(),
            Some(Path::new("/profiles/panel.icc"))
        );
    }

    #[test]
    fn profiles_and_capabilities() {
        assert_eq!(ColorManagement::recommended_profile(ColorSpaceId::Bt2020), "Rec2020.icc");
        assert_eq!(ColorManagement::recommended_profile(ColorSpaceId::ProPhotoRgb), SRGB_PROFILE);
        let cm = ColorManagement::default();
        assert!(cm.is_wide_gamut(ColorSpaceId::DciP3));
        assert!(!cm.is_wide_gamut(ColorSpaceId::Bt709));
        assert!(ColorManagement::is_hdr_capable(ColorSpaceId::Bt2020Ncl));
        assert!(!ColorManagement::is_hdr_capable(ColorSpaceId::DisplayP3));
    }

    #[test]
    fn shortcuts_keep_neutrals() {
        let gray = RgbColor::gray(0.4);
        for out in [bt709_to_bt2020(gray), bt2020_to_bt709(gray), srgb_to_bt709(gray)] {
            assert_abs_diff_eq!(out.r, 0.4, epsilon = 1e-4);
            assert_abs_diff_eq!(out.b, 0.4, epsilon = 1e-4);
        }
        let red = bt709_to_bt2020(RgbColor::new(1.0, 0.0, 0.0));
        assert!(red.r > red.g && red.is_in_unit_range());
        assert!(dci_p3_to_display_p3(gray).is_in_unit_range());
    }
}

//! HDR processing configuration, delivery presets and metadata conversion.
//!
//! [`create_processing_config`] picks an output format for a display;
//! the `*_config` presets describe common delivery targets. The metadata
//! helpers at the bottom build or rewrite [`HdrMetadata`] records.

use crate::metadata::{HdrMetadata, MasteringDisplay};
use crate::signal::{ColorPrimaries, HdrStandard, TransferCharacteristic};
use chroma_color::ToneMapOperator;
use chroma_core::RgbColor;
use chroma_math::{Mat3, Vec3};
use chroma_primaries::{Chromaticity, ColorSpaceRegistry, MatrixEngine};
use chroma_transfer::hlg;
use tracing::debug;

/// Peak luminance of an SDR target, in nits.
pub const SDR_PEAK_NITS: f32 = 100.0;

/// DCI projection peak, in nits.
pub const CINEMA_PEAK_NITS: f32 = 48.0;

/// Default 3D LUT edge length.
pub const DEFAULT_LUT_SIZE: u32 = 33;

/// What a display can show.
#[derive(Debug, Clone, PartialEq)]
pub struct HdrCapabilities {
    /// HDR10 input.
    pub supports_hdr10: bool,
    /// HDR10+ input.
    pub supports_hdr10_plus: bool,
    /// Dolby Vision input.
    pub supports_dolby_vision: bool,
    /// HLG input.
    pub supports_hlg: bool,
    /// Peak luminance, nits.
    pub max_luminance: f32,
    /// Black level, nits.
    pub min_luminance: f32,
    /// Full-frame average luminance, nits.
    pub max_average_luminance: f32,
    /// Native gamut.
    pub native_primaries: ColorPrimaries,
}

impl Default for HdrCapabilities {
    fn default() -> Self {
        Self {
            supports_hdr10: false,
            supports_hdr10_plus: false,
            supports_dolby_vision: false,
            supports_hlg: false,
            max_luminance: 100.0,
            min_luminance: 0.1,
            max_average_luminance: 80.0,
            native_primaries: ColorPrimaries::Bt709,
        }
    }
}

impl HdrCapabilities {
    /// Typical consumer HDR panel: HDR10, HDR10+ and HLG at the given peak.
    pub fn hdr_display(max_luminance: f32) -> Self {
        Self {
            supports_hdr10: true,
            supports_hdr10_plus: true,
            supports_hlg: true,
            max_luminance,
            min_luminance: 0.005,
            max_average_luminance: max_luminance * 0.8,
            ..Self::default()
        }
    }

    /// True when the display accepts `standard`. SDR is always accepted.
    pub fn supports(&self, standard: HdrStandard) -> bool {
        match standard {
            HdrStandard::None => true,
            HdrStandard::Hdr10 => self.supports_hdr10,
            HdrStandard::Hdr10Plus => self.supports_hdr10_plus,
            HdrStandard::DolbyVision => self.supports_dolby_vision,
            HdrStandard::Hlg => self.supports_hlg,
            _ => false,
        }
    }

    /// True when the display consumes per-scene metadata.
    pub fn supports_dynamic_metadata(&self) -> bool {
        self.supports_hdr10_plus || self.supports_dolby_vision
    }
}

/// Tone mapping stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMappingParams {
    /// Display peak, nits.
    pub target_peak_nits: f32,
    /// Content peak, nits.
    pub source_peak_nits: f32,
    /// Linear gain applied before the curve.
    pub exposure: f32,
    /// Viewer adaptation factor.
    pub adaptation_level: f32,
    /// Curve.
    pub operator: ToneMapOperator,
}

impl Default for ToneMappingParams {
    fn default() -> Self {
        Self {
            target_peak_nits: SDR_PEAK_NITS,
            source_peak_nits: 1000.0,
            exposure: 1.0,
            adaptation_level: 0.4,
            operator: ToneMapOperator::Aces,
        }
    }
}

impl ToneMappingParams {
    /// Output scale for the peak ratio. Never brightens.
    pub fn peak_scale(&self) -> f32 {
        if self.source_peak_nits > 0.0 {
            (self.target_peak_nits / self.source_peak_nits).min(1.0)
        } else {
            1.0
        }
    }
}

/// Gamut conversion stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutConversionParams {
    /// Apply `matrix`.
    pub enabled: bool,
    /// Source RGB to target RGB.
    pub matrix: Mat3,
    /// Adapt between the two whites.
    pub chromatic_adaptation: bool,
    /// Source white.
    pub source_white: Chromaticity,
    /// Target white.
    pub target_white: Chromaticity,
}

impl Default for GamutConversionParams {
    fn default() -> Self {
        Self {
            enabled: false,
            matrix: Mat3::IDENTITY,
            chromatic_adaptation: true,
            source_white: Chromaticity::D65,
            target_white: Chromaticity::D65,
        }
    }
}

/// Full processing description from an input format to an output format.
#[derive(Debug, Clone, PartialEq)]
pub struct HdrProcessingConfig {
    /// Input standard.
    pub input_standard: HdrStandard,
    /// Input transfer.
    pub input_transfer: TransferCharacteristic,
    /// Input primaries.
    pub input_primaries: ColorPrimaries,
    /// Output standard.
    pub output_standard: HdrStandard,
    /// Output transfer.
    pub output_transfer: TransferCharacteristic,
    /// Output primaries.
    pub output_primaries: ColorPrimaries,
    /// Run the tone mapping stage.
    pub enable_tone_mapping: bool,
    /// Clamp results into the unit cube.
    pub enable_gamut_mapping: bool,
    /// Carry dynamic payloads to the output.
    pub preserve_dynamic_metadata: bool,
    /// Tone mapping parameters.
    pub tone_mapping: ToneMappingParams,
    /// Gamut conversion parameters.
    pub color_conversion: GamutConversionParams,
    /// Bake the pipeline into a 3D LUT where supported.
    pub lut_optimization: bool,
    /// LUT edge length.
    pub lut_size: u32,
}

impl Default for HdrProcessingConfig {
    fn default() -> Self {
        Self {
            input_standard: HdrStandard::None,
            input_transfer: TransferCharacteristic::Unknown,
            input_primaries: ColorPrimaries::Unknown,
            output_standard: HdrStandard::None,
            output_transfer: TransferCharacteristic::Unknown,
            output_primaries: ColorPrimaries::Unknown,
            enable_tone_mapping: true,
            enable_gamut_mapping: true,
            preserve_dynamic_metadata: true,
            tone_mapping: ToneMappingParams::default(),
            color_conversion: GamutConversionParams::default(),
            lut_optimization: true,
            lut_size: DEFAULT_LUT_SIZE,
        }
    }
}

impl HdrProcessingConfig {
    fn output(
        standard: HdrStandard,
        transfer: TransferCharacteristic,
        primaries: ColorPrimaries,
    ) -> Self {
        Self {
            output_standard: standard,
            output_transfer: transfer,
            output_primaries: primaries,
            ..Self::default()
        }
    }

    /// True when the output is SDR.
    pub fn is_sdr_output(&self) -> bool {
        !self.output_standard.is_hdr()
    }

    /// Runs the configured stages over linear colors.
    ///
    /// Order: gamut matrix, exposure, tone curve scaled by the peak ratio,
    /// unit-cube clamp. Disabled stages pass colors through.
    pub fn process(&self, colors: &[RgbColor]) -> Vec<RgbColor> {
        let scale = self.tone_mapping.peak_scale();
        let out: Vec<RgbColor> = colors
            .iter()
            .map(|&c| {
                let mut c = c;
                if self.color_conversion.enabled {
                    c = (self.color_conversion.matrix * Vec3::from(c)).into();
                }
                if self.enable_tone_mapping {
                    let exposed = c.map(|v| v * self.tone_mapping.exposure);
                    c = self.tone_mapping.operator.map(exposed).map(|v| v * scale);
                }
                if self.enable_gamut_mapping {
                    c = c.clamp01();
                }
                c
            })
            .collect();
        debug!(
            count = out.len(),
            from = %self.input_standard,
            to = %self.output_standard,
            "hdr processing"
        );
        out
    }
}

/// RGB matrix between two primaries sets, via the shared registry.
///
/// Identity when either side has no registered working space or both are
/// the same.
pub fn primaries_conversion_matrix(source: ColorPrimaries, target: ColorPrimaries) -> Mat3 {
    match (source.color_space(), target.color_space()) {
        (Some(from), Some(to)) if source != target => {
            MatrixEngine::new(ColorSpaceRegistry::shared()).conversion_matrix(from, to)
        }
        _ => Mat3::IDENTITY,
    }
}

/// Converts one color between primaries, clamped to `[0, 1]`.
pub fn convert_pixel(rgb: RgbColor, source: ColorPrimaries, target: ColorPrimaries) -> RgbColor {
    let m = primaries_conversion_matrix(source, target);
    RgbColor::from(m * Vec3::from(rgb)).clamp01()
}

/// Picks an output format for `display` and fills in the stages.
///
/// HDR input on an HDR10 display goes out as HDR10 (PQ, BT.2020);
/// everything else is reduced to SDR BT.709.
pub fn create_processing_config(
    input: &HdrMetadata,
    display: &HdrCapabilities,
) -> HdrProcessingConfig {
    let mut config = if display.supports_hdr10 && input.is_hdr() {
        HdrProcessingConfig::output(
            HdrStandard::Hdr10,
            TransferCharacteristic::Pq,
            ColorPrimaries::Bt2020,
        )
    } else {
        HdrProcessingConfig::output(
            HdrStandard::None,
            TransferCharacteristic::Bt709,
            ColorPrimaries::Bt709,
        )
    };
    config.input_standard = input.standard;
    config.input_transfer = input.transfer;
    config.input_primaries = input.primaries;

    config.tone_mapping.target_peak_nits = if config.is_sdr_output() {
        display.max_luminance.min(SDR_PEAK_NITS)
    } else {
        display.max_luminance
    };
    config.tone_mapping.source_peak_nits = input.mastering.max_luminance;
    config.preserve_dynamic_metadata = display.supports_dynamic_metadata();

    if config.input_primaries != config.output_primaries {
        config.color_conversion.enabled = true;
        config.color_conversion.matrix =
            primaries_conversion_matrix(config.input_primaries, config.output_primaries);
        config.color_conversion.source_white = input.mastering.white_point;
    }

    debug!(
        input = %config.input_standard,
        output = %config.output_standard,
        target_nits = config.tone_mapping.target_peak_nits,
        "processing config"
    );
    config
}

/// YouTube: HDR10 at 1000 nits, no dynamic metadata.
pub fn youtube_config() -> HdrProcessingConfig {
    let mut config = HdrProcessingConfig::output(
        HdrStandard::Hdr10,
        TransferCharacteristic::Pq,
        ColorPrimaries::Bt2020,
    );
    config.tone_mapping.target_peak_nits = 1000.0;
    config.preserve_dynamic_metadata = false;
    config
}

/// Netflix: Dolby Vision at 4000 nits.
pub fn netflix_config() -> HdrProcessingConfig {
    let mut config = HdrProcessingConfig::output(
        HdrStandard::DolbyVision,
        TransferCharacteristic::Pq,
        ColorPrimaries::Bt2020,
    );
    config.tone_mapping.target_peak_nits = 4000.0;
    config.preserve_dynamic_metadata = true;
    config
}

/// Broadcast HLG at 1000 nits.
pub fn broadcast_hlg_config() -> HdrProcessingConfig {
    let mut config = HdrProcessingConfig::output(
        HdrStandard::Hlg,
        TransferCharacteristic::Hlg,
        ColorPrimaries::Bt2020,
    );
    config.tone_mapping.target_peak_nits = hlg::REFERENCE_PEAK_NITS;
    config.tone_mapping.operator = ToneMapOperator::Simple;
    config.preserve_dynamic_metadata = false;
    config
}

/// Cinema: DCI-P3 at 48 nits.
pub fn cinema_dci_p3_config() -> HdrProcessingConfig {
    let mut config = HdrProcessingConfig::output(
        HdrStandard::None,
        TransferCharacteristic::DciP3,
        ColorPrimaries::DciP3,
    );
    config.tone_mapping.target_peak_nits = CINEMA_PEAK_NITS;
    config.color_conversion.target_white = Chromaticity::DCI;
    config
}

/// Apple: Dolby Vision on Display P3 at 1000 nits.
pub fn apple_dolby_vision_config() -> HdrProcessingConfig {
    let mut config = HdrProcessingConfig::output(
        HdrStandard::DolbyVision,
        TransferCharacteristic::Pq,
        ColorPrimaries::DisplayP3,
    );
    config.tone_mapping.target_peak_nits = 1000.0;
    config.preserve_dynamic_metadata = true;
    config
}

/// HDR10 record with BT.2020 mastering primaries and D65 white.
pub fn create_hdr10_metadata(
    max_luminance: f32,
    min_luminance: f32,
    max_cll: u16,
    max_fall: u16,
) -> HdrMetadata {
    let mut md = HdrMetadata {
        standard: HdrStandard::Hdr10,
        transfer: TransferCharacteristic::Pq,
        primaries: ColorPrimaries::Bt2020,
        mastering: MasteringDisplay {
            max_luminance,
            min_luminance,
            ..MasteringDisplay::bt2020()
        },
        ..HdrMetadata::default()
    };
    md.content_light.max_cll = max_cll;
    md.content_light.max_fall = max_fall;
    md.is_valid = true;
    md
}

/// Relabels a record for an HDR target.
///
/// HDR10 gets PQ, BT.2020, a 1000/0.01 nit mastering range and
/// MaxCLL/MaxFALL 1000/400. HLG gets HLG, BT.2020 and the reference
/// system gamma. Other targets return the record unchanged.
pub fn convert_sdr_to_hdr(metadata: &HdrMetadata, target: HdrStandard) -> HdrMetadata {
    let mut md = metadata.clone();
    match target {
        HdrStandard::Hdr10 => {
            md.standard = HdrStandard::Hdr10;
            md.transfer = TransferCharacteristic::Pq;
            md.primaries = ColorPrimaries::Bt2020;
            md.mastering.max_luminance = 1000.0;
            md.mastering.min_luminance = 0.01;
            md.content_light.max_cll = 1000;
            md.content_light.max_fall = 400;
        }
        HdrStandard::Hlg => {
            md.standard = HdrStandard::Hlg;
            md.transfer = TransferCharacteristic::Hlg;
            md.primaries = ColorPrimaries::Bt2020;
            md.hlg.ootf_gamma = hlg::REFERENCE_SYSTEM_GAMMA;
        }
        _ => {}
    }
    md
}

/// What converting between two records involves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompatibilityInfo {
    /// Same standard.
    pub fully_compatible: bool,
    /// Some conversion is needed.
    pub requires_conversion: bool,
    /// The conversion loses information.
    pub quality_loss_expected: bool,
    /// Human-readable findings.
    pub notes: Vec<String>,
}

/// Compares the signaling of two records.
pub fn check_compatibility(source: &HdrMetadata, target: &HdrMetadata) -> CompatibilityInfo {
    let mut info = CompatibilityInfo::default();
    let mut note = |s: &str| info.notes.push(s.to_string());

    let mut loss = false;
    let mut convert = false;
    if source.standard == target.standard {
        note("HDR standards match perfectly");
    } else {
        convert = true;
        note("HDR standard conversion required");
        if source.standard == HdrStandard::DolbyVision && target.standard == HdrStandard::Hdr10 {
            loss = true;
            note("Dolby Vision to HDR10: some enhancement data will be lost");
        }
        if source.standard.is_hdr() && !target.standard.is_hdr() {
            loss = true;
            note("HDR to SDR conversion: dynamic range will be reduced");
        }
    }

    if source.transfer != target.transfer {
        convert = true;
        note("Transfer function conversion required");
    }

    if source.primaries != target.primaries {
        convert = true;
        note("Color gamut conversion required");
        if source.primaries == ColorPrimaries::Bt2020 && target.primaries == ColorPrimaries::Bt709 {
            loss = true;
            note("BT.2020 to BT.709: some colors will be clipped");
        }
    }

    info.fully_compatible = source.standard == target.standard;
    info.requires_conversion = convert;
    info.quality_loss_expected = loss;
    info
}

/// Light level scale when moving content into a smaller gamut.
fn light_level_factor(from: ColorPrimaries, to: ColorPrimaries) -> f32 {
    match (from, to) {
        (ColorPrimaries::Bt2020, ColorPrimaries::Bt709) => 0.85,
        (ColorPrimaries::DciP3, ColorPrimaries::Bt709) => 0.92,
        _ => 1.0,
    }
}

/// Relabels a record for new primaries and transfer, adjusting luminance.
///
/// PQ keeps the mastering range, HLG caps the peak at 1000 nits, BT.709
/// and BT.2020 set 100/0.1 nits. Changing primaries scales MaxCLL and
/// MaxFALL, truncating.
pub fn convert_color_space(
    metadata: &HdrMetadata,
    target_primaries: ColorPrimaries,
    target_transfer: TransferCharacteristic,
) -> HdrMetadata {
    let mut md = metadata.clone();
    md.primaries = target_primaries;
    md.transfer = target_transfer;

    match target_transfer {
        TransferCharacteristic::Hlg => {
            md.mastering.max_luminance = md.mastering.max_luminance.min(hlg::REFERENCE_PEAK_NITS);
        }
        TransferCharacteristic::Bt709 | TransferCharacteristic::Bt2020 => {
            md.mastering.max_luminance = SDR_PEAK_NITS;
            md.mastering.min_luminance = 0.1;
        }
        _ => {}
    }

    if target_primaries != metadata.primaries {
        let k = light_level_factor(metadata.primaries, target_primaries);
        md.content_light.max_cll = (f32::from(md.content_light.max_cll) * k) as u16;
        md.content_light.max_fall = (f32::from(md.content_light.max_fall) * k) as u16;
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hdr_input_on_hdr_display() {
        let md = create_hdr10_metadata(4000.0, 0.005, 3000, 500);
        let config = create_processing_config(&md, &HdrCapabilities::hdr_display(600.0));
        assert_eq!(config.output_standard, HdrStandard::Hdr10);
        assert_eq!(config.output_transfer, TransferCharacteristic::Pq);
        assert_eq!(config.tone_mapping.target_peak_nits, 600.0);
        assert_eq!(config.tone_mapping.source_peak_nits, 4000.0);
        assert!(!config.color_conversion.enabled);
        assert!(config.preserve_dynamic_metadata);
    }

    #[test]
    fn sdr_fallback() {
        let md = create_hdr10_metadata(1000.0, 0.01, 1000, 400);
        let display = HdrCapabilities {
            max_luminance: 350.0,
            ..HdrCapabilities::default()
        };
        let config = create_processing_config(&md, &display);
        assert!(config.is_sdr_output());
        assert_eq!(config.output_primaries, ColorPrimaries::Bt709);
        assert_eq!(config.tone_mapping.target_peak_nits, 100.0);
        assert!(config.color_conversion.enabled);
        assert!(!config.color_conversion.matrix.is_identity(1e-3));
    }

    #[test]
    fn sdr_input_stays_sdr() {
        let display = HdrCapabilities::hdr_display(1000.0);
        let config = create_processing_config(&HdrMetadata::sdr(), &display);
        assert_eq!(config.output_standard, HdrStandard::None);
        assert!(!config.color_conversion.enabled);
    }

    #[test]
    fn presets() {
        let yt = youtube_config();
        assert_eq!(yt.output_standard, HdrStandard::Hdr10);
        assert_eq!(yt.tone_mapping.operator, ToneMapOperator::Aces);
        assert!(!yt.preserve_dynamic_metadata);

        let nf = netflix_config();
        assert_eq!(nf.output_standard, HdrStandard::DolbyVision);
        assert_eq!(nf.tone_mapping.target_peak_nits, 4000.0);
        assert!(nf.preserve_dynamic_metadata);

        let bc = broadcast_hlg_config();
        assert_eq!(bc.output_transfer, TransferCharacteristic::Hlg);
        assert_ne!(bc.tone_mapping.operator, ToneMapOperator::Aces);

        let cinema = cinema_dci_p3_config();
        assert_eq!(cinema.output_standard, HdrStandard::None);
        assert_eq!(cinema.output_primaries, ColorPrimaries::DciP3);
        assert_eq!(cinema.tone_mapping.target_peak_nits, 48.0);

        let apple = apple_dolby_vision_config();
        assert_eq!(apple.output_primaries, ColorPrimaries::DisplayP3);
        assert!(apple.preserve_dynamic_metadata);
        assert_eq!(apple.lut_size, 33);
    }

    #[test]
    fn capabilities() {
        let sdr = HdrCapabilities::default();
        assert!(sdr.supports(HdrStandard::None));
        assert!(!sdr.supports(HdrStandard::Hdr10));
        let hdr = HdrCapabilities::hdr_display(1000.0);
        assert!(hdr.supports(HdrStandard::Hlg));
        assert!(!hdr.supports(HdrStandard::DolbyVision));
        assert!(hdr.supports_dynamic_metadata());
    }

    #[test]
    fn process_never_brightens() {
        let config = HdrProcessingConfig {
            enable_tone_mapping: true,
            tone_mapping: ToneMappingParams {
                target_peak_nits: 2000.0,
                source_peak_nits: 1000.0,
                operator: ToneMapOperator::Simple,
                ..ToneMappingParams::default()
            },
            ..HdrProcessingConfig::default()
        };
        let out = config.process(&[RgbColor::gray(1.0)]);
        assert_abs_diff_eq!(out[0].r, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn exposure_before_curve() {
        let config = HdrProcessingConfig {
            tone_mapping: ToneMappingParams {
                target_peak_nits: 1000.0,
                exposure: 3.0,
                operator: ToneMapOperator::Simple,
                ..ToneMappingParams::default()
            },
            ..HdrProcessingConfig::default()
        };
        // 3 / (1 + 3)
        let out = config.process(&[RgbColor::gray(1.0)]);
        assert_abs_diff_eq!(out[0].g, 0.75, epsilon = 1e-6);
    }

    #[test]
    fn process_pass_through() {
        let config = HdrProcessingConfig {
            enable_tone_mapping: false,
            enable_gamut_mapping: false,
            ..HdrProcessingConfig::default()
        };
        let c = RgbColor::new(2.0, -0.5, 0.25);
        assert_eq!(config.process(&[c]), vec![c]);
    }

    #[test]
    fn pixel_conversion_is_clamped() {
        let red = RgbColor::new(1.0, 0.0, 0.0);
        let red = convert_pixel(red, ColorPrimaries::Bt2020, ColorPrimaries::Bt709);
        assert!(red.is_in_unit_range());
        assert_eq!(red.r, 1.0);
        let gray = RgbColor::gray(0.3);
        let same = convert_pixel(gray, ColorPrimaries::Bt470M, ColorPrimaries::Bt709);
        assert_eq!(same, RgbColor::gray(0.3));
    }

    #[test]
    fn hdr10_metadata_builder() {
        let md = create_hdr10_metadata(1000.0, 0.01, 1000, 400);
        assert!(md.is_valid);
        assert_eq!(md.mastering.white_point, Chromaticity::D65);
        assert_eq!(md.content_light.max_fall, 400);
        assert!(crate::validate::validate(&md).valid);
    }

    #[test]
    fn sdr_to_hdr() {
        let hdr10 = convert_sdr_to_hdr(&HdrMetadata::sdr(), HdrStandard::Hdr10);
        assert_eq!(hdr10.transfer, TransferCharacteristic::Pq);
        assert_eq!(hdr10.content_light.max_cll, 1000);
        assert_eq!(hdr10.content_light.max_fall, 400);

        let hlg = convert_sdr_to_hdr(&HdrMetadata::sdr(), HdrStandard::Hlg);
        assert_eq!(hlg.transfer, TransferCharacteristic::Hlg);
        assert_eq!(hlg.hlg.ootf_gamma, 1.2);

        let same = convert_sdr_to_hdr(&HdrMetadata::sdr(), HdrStandard::SlHdr2);
        assert_eq!(same, HdrMetadata::sdr());
    }

    #[test]
    fn compatibility_notes() {
        let hdr10 = create_hdr10_metadata(1000.0, 0.01, 1000, 400);
        let same = check_compatibility(&hdr10, &hdr10);
        assert!(same.fully_compatible);
        assert!(!same.requires_conversion);
        assert_eq!(same.notes, ["HDR standards match perfectly"]);

        let info = check_compatibility(&hdr10, &HdrMetadata::sdr());
        assert!(!info.fully_compatible);
        assert!(info.requires_conversion);
        assert!(info.quality_loss_expected);
        assert_eq!(
            info.notes,
            [
                "HDR standard conversion required",
                "HDR to SDR conversion: dynamic range will be reduced",
                "Transfer function conversion required",
                "Color gamut conversion required",
                "BT.2020 to BT.709: some colors will be clipped",
            ]
        );

        let dv = HdrMetadata {
            standard: HdrStandard::DolbyVision,
            ..hdr10.clone()
        };
        let info = check_compatibility(&dv, &hdr10);
        assert!(info.notes.iter().any(|n| n.contains("enhancement data")));
    }

    #[test]
    fn color_space_conversion() {
        let md = create_hdr10_metadata(4000.0, 0.005, 1000, 400);

        let pq = convert_color_space(&md, ColorPrimaries::Bt2020, TransferCharacteristic::Pq);
        assert_eq!(pq.mastering.max_luminance, 4000.0);
        assert_eq!(pq.content_light.max_cll, 1000);

        let hlg = convert_color_space(&md, ColorPrimaries::Bt2020, TransferCharacteristic::Hlg);
        assert_eq!(hlg.mastering.max_luminance, 1000.0);

        let sdr = convert_color_space(&md, ColorPrimaries::Bt709, TransferCharacteristic::Bt709);
        assert_eq!(sdr.mastering.max_luminance, 100.0);
        assert_eq!(sdr.mastering.min_luminance, 0.1);
        assert_eq!(sdr.content_light.max_cll, 850);
        assert_eq!(sdr.content_light.max_fall, 340);

        let p3 = HdrMetadata {
            primaries: ColorPrimaries::DciP3,
            ..md.clone()
        };
        let out = convert_color_space(&p3, ColorPrimaries::Bt709, TransferCharacteristic::Pq);
        assert_eq!(out.content_light.max_cll, 920);
        assert_eq!(out.content_light.max_fall, 368);
    }
}

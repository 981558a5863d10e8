//! Batch color space conversion.
//!
//! [`ColorConverter::convert`] is the primary entry point: matrix, gamut
//! test, gamut mapping, clamp, then statistics over the whole batch.
//!
//! # Pipeline per color
//!
//! ```text
//! source RGB -> [decode transfer] -> conversion matrix -> gamut test
//!            -> map if out of gamut -> clamp [0, 1] -> [encode transfer]
//! ```
//!
//! The transfer steps only run when [`ColorConversionConfig::linearize`]
//! is set. By default the matrix is applied to the values as given.

use crate::accuracy::delta_e;
use crate::error::{ColorError, ColorResult};
use crate::gamut::{is_in_gamut, map_color, GamutMappingMethod, DEFAULT_COMPRESSION};
use chroma_core::{ColorSpaceId, RgbColor};
use chroma_math::{AdaptationMethod, Mat3, Vec3};
use chroma_primaries::{ColorSpaceRegistry, MatrixEngine};
use std::sync::Arc;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batches at least this long are converted on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Out-of-gamut share above which a conversion carries a warning.
pub const OUT_OF_GAMUT_WARNING_RATIO: f32 = 0.1;

/// Warning text for batches with many out-of-gamut colors.
pub const HIGH_OUT_OF_GAMUT_WARNING: &str = "High percentage of out-of-gamut pixels detected";

/// Settings for one conversion job.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorConversionConfig {
    /// Source space.
    pub source: ColorSpaceId,
    /// Target space.
    pub target: ColorSpaceId,
    /// How out-of-gamut colors are brought back.
    pub gamut_method: GamutMappingMethod,
    /// Perceptual highlight compression, `[0, 1]`.
    pub compression_factor: f32,
    /// Adapt between the white points of source and target when they differ.
    pub chromatic_adaptation: bool,
    /// Method used when adapting.
    pub adaptation_method: AdaptationMethod,
    /// Map exact black and exact white to exact black and white.
    pub preserve_blacks: bool,
    /// Decode the source transfer before the matrix and encode the target
    /// transfer after it.
    pub linearize: bool,
}

impl ColorConversionConfig {
    /// Configuration with defaults for a source/target pair.
    pub fn new(source: ColorSpaceId, target: ColorSpaceId) -> Self {
        Self {
            source,
            target,
            ..Self::default()
        }
    }

    /// Sets the gamut mapping method.
    pub fn with_method(mut self, method: GamutMappingMethod) -> Self {
        self.gamut_method = method;
        self
    }

    /// Sets the perceptual compression factor.
    pub fn with_compression(mut self, factor: f32) -> Self {
        self.compression_factor = factor;
        self
    }

    /// Enables or disables white point adaptation.
    pub fn with_adaptation(mut self, enabled: bool) -> Self {
        self.chromatic_adaptation = enabled;
        self
    }

    /// Enables or disables transfer decoding around the matrix.
    pub fn with_linearize(mut self, enabled: bool) -> Self {
        self.linearize = enabled;
        self
    }
}

impl Default for ColorConversionConfig {
    fn default() -> Self {
        Self {
            source: ColorSpaceId::Bt709,
            target: ColorSpaceId::Bt709,
            gamut_method: GamutMappingMethod::Perceptual,
            compression_factor: DEFAULT_COMPRESSION,
            chromatic_adaptation: false,
            adaptation_method: AdaptationMethod::Bradford,
            preserve_blacks: false,
            linearize: false,
        }
    }
}

/// Converted colors plus diagnostics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionResult {
    /// Converted colors, same order as the input, all in `[0, 1]`.
    pub colors: Vec<RgbColor>,
    /// Colors that needed gamut mapping.
    pub out_of_gamut_count: usize,
    /// `1 - out_of_gamut_count / total`, 1.0 for an empty batch.
    pub gamut_coverage: f32,
    /// Mean Delta-E between each source color and its result.
    pub average_delta_e: f32,
    /// Always true for the lenient path; kept for callers that log it.
    pub success: bool,
    /// Human-readable warnings.
    pub warnings: Vec<String>,
}

impl ConversionResult {
    /// Share of colors that needed mapping.
    pub fn out_of_gamut_ratio(&self) -> f32 {
        if self.colors.is_empty() {
            0.0
        } else {
            self.out_of_gamut_count as f32 / self.colors.len() as f32
        }
    }
}

/// Per-color outcome before aggregation.
#[derive(Clone, Copy)]
struct Converted {
    color: RgbColor,
    out_of_gamut: bool,
    delta_e: f32,
}

/// Everything a single color needs, resolved once per batch.
struct Plan {
    matrix: Mat3,
    config: ColorConversionConfig,
    decode: chroma_transfer::TransferFunction,
    encode: chroma_transfer::TransferFunction,
}

impl Plan {
    fn apply(&self, source: RgbColor) -> Converted {
        let cfg = &self.config;
        if cfg.preserve_blacks && (source == RgbColor::BLACK || source == RgbColor::WHITE) {
            return Converted {
                color: source,
                out_of_gamut: false,
                delta_e: 0.0,
            };
        }

        let input = if cfg.linearize {
            self.decode.to_linear_rgb(source)
        } else {
            source
        };
        let mut out: RgbColor = (self.matrix * Vec3::from(input)).into();

        let out_of_gamut = !is_in_gamut(out, cfg.target);
        if out_of_gamut {
            out = map_color(out, cfg.target, cfg.gamut_method, cfg.compression_factor);
        }
        out = out.clamp01();
        if cfg.linearize {
            out = self.encode.from_linear_rgb(out).clamp01();
        }

        Converted {
            color: out,
            out_of_gamut,
            delta_e: delta_e(source, out),
        }
    }
}

/// Converts batches of colors between registered spaces.
///
/// Cheap to clone; the registry is shared.
///
/// ```rust
/// use chroma_color::{ColorConverter, ColorConversionConfig};
/// use chroma_core::{ColorSpaceId, RgbColor};
///
/// let converter = ColorConverter::default();
/// let config = ColorConversionConfig::new(ColorSpaceId::Bt709, ColorSpaceId::Bt2020);
/// let result = converter.convert(&[RgbColor::new(1.0, 0.0, 0.0)], &config);
///
/// let red = result.colors[0];
/// assert!(red.r > red.g && red.r > red.b);
/// assert_eq!(result.out_of_gamut_count, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ColorConverter {
    engine: MatrixEngine,
}

impl ColorConverter {
    /// Creates a converter over a shared registry.
    pub fn new(registry: Arc<ColorSpaceRegistry>) -> Self {
        Self {
            engine: MatrixEngine::new(registry),
        }
    }

    /// Matrix engine used by this converter.
    pub fn engine(&self) -> &MatrixEngine {
        &self.engine
    }

    /// Matrix applied for a configuration.
    pub fn matrix_for(&self, config: &ColorConversionConfig) -> Mat3 {
        if config.chromatic_adaptation {
            self.engine
                .adapted_conversion_matrix(config.source, config.target, config.adaptation_method)
        } else {
            self.engine.conversion_matrix(config.source, config.target)
        }
    }

    fn plan(&self, config: &ColorConversionConfig) -> Plan {
        let registry = self.engine.registry();
        Plan {
            matrix: self.matrix_for(config),
            config: config.clone(),
            decode: registry.lookup(config.source).transfer(),
            encode: registry.lookup(config.target).transfer(),
        }
    }

    /// Converts a batch. Never fails.
    pub fn convert(&self, colors: &[RgbColor], config: &ColorConversionConfig) -> ConversionResult {
        if colors.is_empty() {
            trace!("empty batch");
            return ConversionResult {
                gamut_coverage: 1.0,
                success: true,
                ..ConversionResult::default()
            };
        }

        let plan = self.plan(config);
        let converted = run(&plan, colors);

        let total = converted.len();
        let out_of_gamut_count = converted.iter().filter(|c| c.out_of_gamut).count();
        let delta_sum: f64 = converted.iter().map(|c| f64::from(c.delta_e)).sum();
        let ratio = out_of_gamut_count as f32 / total as f32;

        let mut warnings = Vec::new();
        if ratio > OUT_OF_GAMUT_WARNING_RATIO {
            warnings.push(HIGH_OUT_OF_GAMUT_WARNING.to_string());
        }

        debug!(
            source = %config.source,
            target = %config.target,
            method = %config.gamut_method,
            total,
            out_of_gamut = out_of_gamut_count,
            "converted batch"
        );

        ConversionResult {
            colors: converted.into_iter().map(|c| c.color).collect(),
            out_of_gamut_count,
            gamut_coverage: 1.0 - ratio,
            average_delta_e: (delta_sum / total as f64) as f32,
            success: true,
            warnings,
        }
    }

    /// Like [`convert`](Self::convert) but rejects non-finite input.
    pub fn try_convert(
        &self,
        colors: &[RgbColor],
        config: &ColorConversionConfig,
    ) -> ColorResult<ConversionResult> {
        if let Some(index) = colors.iter().position(|c| !c.is_finite()) {
            return Err(ColorError::NonFinite { index });
        }
        Ok(self.convert(colors, config))
    }

    /// Converts one color as a one-element batch with default compression.
    pub fn convert_single(
        &self,
        color: RgbColor,
        from: ColorSpaceId,
        to: ColorSpaceId,
        method: GamutMappingMethod,
    ) -> RgbColor {
        let config = ColorConversionConfig::new(from, to).with_method(method);
        self.convert(&[color], &config)
            .colors
            .first()
            .copied()
            .unwrap_or(color)
    }
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new(ColorSpaceRegistry::shared())
    }
}

#[cfg(feature = "parallel")]
fn run(plan: &Plan, colors: &[RgbColor]) -> Vec<Converted> {
    if colors.len() >= PARALLEL_THRESHOLD {
        colors.par_iter().map(|&c| plan.apply(c)).collect()
    } else {
        colors.iter().map(|&c| plan.apply(c)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run(plan: &Plan, colors: &[RgbColor]) -> Vec<Converted> {
    colors.iter().map(|&c| plan.apply(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn converter() -> ColorConverter {
        ColorConverter::default()
    }

    #[test]
    fn identity_conversion_keeps_colors() {
        let colors = [RgbColor::new(0.1, 0.5, 0.9), RgbColor::gray(0.5)];
        let config = ColorConversionConfig::new(ColorSpaceId::Bt709, ColorSpaceId::Bt709);
        let r = converter().convert(&colors, &config);
        assert_eq!(r.colors, colors);
        assert_eq!(r.average_delta_e, 0.0);
        assert_eq!(r.gamut_coverage, 1.0);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn empty_batch_is_successful() {
        let r = converter().convert(&[], &ColorConversionConfig::default());
        assert!(r.success);
        assert!(r.colors.is_empty());
        assert_eq!(r.gamut_coverage, 1.0);
        assert_eq!(r.out_of_gamut_ratio(), 0.0);
    }

    #[test]
    fn saturated_bt2020_is_out_of_bt709() {
        let colors = [
            RgbColor::new(0.0, 1.0, 0.0),
            RgbColor::new(0.5, 0.5, 0.5),
            RgbColor::new(0.4, 0.4, 0.4),
        ];
        let config = ColorConversionConfig::new(ColorSpaceId::Bt2020, ColorSpaceId::Bt709);
        let r = converter().convert(&colors, &config);
        assert_eq!(r.out_of_gamut_count, 1);
        assert_abs_diff_eq!(r.gamut_coverage, 2.0 / 3.0, epsilon = 1e-6);
        assert_eq!(r.warnings, vec![HIGH_OUT_OF_GAMUT_WARNING.to_string()]);
        assert!(r.colors.iter().all(|c| c.is_in_unit_range()));
    }

    #[test]
    fn warning_threshold_is_strictly_above_ten_percent() {
        // 1 of 10 out of gamut: exactly 10%, no warning
        let mut colors = vec![RgbColor::gray(0.5); 9];
        colors.push(RgbColor::new(0.0, 1.0, 0.0));
        let config = ColorConversionConfig::new(ColorSpaceId::Bt2020, ColorSpaceId::Bt709);
        let r = converter().convert(&colors, &config);
        assert_eq!(r.out_of_gamut_count, 1);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn preserve_blacks_keeps_extremes_exact() {
        let colors = [RgbColor::BLACK, RgbColor::WHITE];
        let config = ColorConversionConfig {
            preserve_blacks: true,
            ..ColorConversionConfig::new(ColorSpaceId::Bt709, ColorSpaceId::DciP3)
        };
        let r = converter().convert(&colors, &config);
        assert_eq!(r.colors, colors);
    }

    #[test]
    fn linearize_round_trips_neutral() {
        let config = ColorConversionConfig::new(ColorSpaceId::Srgb, ColorSpaceId::Bt709)
            .with_linearize(true);
        let r = converter().convert(&[RgbColor::gray(0.5)], &config);
        // sRGB 0.5 -> linear 0.214 -> gamma 2.4 encode
        let expected = 0.21404_f32.powf(1.0 / 2.4);
        assert_abs_diff_eq!(r.colors[0].g, expected, epsilon = 1e-3);
    }

    #[test]
    fn adaptation_keeps_white_neutral() {
        let config = ColorConversionConfig::new(ColorSpaceId::Bt709, ColorSpaceId::DciP3)
            .with_adaptation(true);
        let r = converter().convert(&[RgbColor::gray(0.5)], &config);
        let c = r.colors[0];
        assert_abs_diff_eq!(c.r, c.b, epsilon = 1e-3);
    }

    #[test]
    fn try_convert_rejects_nan() {
        let colors = [RgbColor::gray(0.1), RgbColor::new(f32::NAN, 0.0, 0.0)];
        let err = converter()
            .try_convert(&colors, &ColorConversionConfig::default())
            .unwrap_err();
        assert_eq!(err, ColorError::NonFinite { index: 1 });
    }

    #[test]
    fn large_batches_match_small_ones() {
        let colors: Vec<_> = (0..PARALLEL_THRESHOLD + 10)
            .map(|i| {
                let t = (i % 97) as f32 / 96.0;
                RgbColor::new(t, 1.0 - t, (t * 3.0).fract())
            })
            .collect();
        let config = ColorConversionConfig::new(ColorSpaceId::Bt2020, ColorSpaceId::Srgb);
        let c = converter();
        let batch = c.convert(&colors, &config);
        for (i, color) in colors.iter().enumerate().step_by(101) {
            let single = c.convert(&[*color], &config).colors[0];
            assert_eq!(batch.colors[i], single);
        }
    }

    #[test]
    fn convert_single_defaults_to_batch() {
        let c = converter();
        let out = c.convert_single(
            RgbColor::new(1.0, 0.0, 0.0),
            ColorSpaceId::Bt709,
            ColorSpaceId::Bt2020,
            GamutMappingMethod::Perceptual,
        );
        assert!(out.r > out.g && out.r > out.b);
    }
}

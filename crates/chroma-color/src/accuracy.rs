//! Color difference metrics and workflow accuracy reports.
//!
//! Delta-E here is a weighted RGB distance scaled by 100, not a CIELAB
//! metric. Thresholds used by [`validate_workflow`] are tuned to it.

use crate::convert::{ColorConversionConfig, ColorConverter};
use crate::error::{ColorError, ColorResult};
use chroma_core::{ColorSpaceId, RgbColor};
use tracing::debug;

// Channel weights of the RGB distance
const WEIGHT_R: f32 = 0.3;
const WEIGHT_G: f32 = 0.59;
const WEIGHT_B: f32 = 0.11;

/// Average Delta-E above which perceptual mapping is suggested.
pub const HIGH_DELTA_E: f32 = 3.0;
/// Failing share above which a wider working space is suggested.
pub const HIGH_FAILING_RATIO: f32 = 0.05;
/// Fidelity below which the workflow is flagged.
pub const MIN_FIDELITY: f32 = 0.8;

/// Weighted RGB distance: `100 * sqrt(0.3 dr^2 + 0.59 dg^2 + 0.11 db^2)`.
///
/// ```rust
/// use chroma_color::delta_e;
/// use chroma_core::RgbColor;
///
/// let c = RgbColor::new(0.2, 0.4, 0.6);
/// assert_eq!(delta_e(c, c), 0.0);
/// assert!((delta_e(RgbColor::BLACK, RgbColor::WHITE) - 100.0).abs() < 1e-3);
/// ```
pub fn delta_e(a: RgbColor, b: RgbColor) -> f32 {
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;
    (WEIGHT_R * dr * dr + WEIGHT_G * dg * dg + WEIGHT_B * db * db).sqrt() * 100.0
}

/// Product of per-channel value spans, clamped to `[0, 1]`.
///
/// Spans start from an empty `[1, 0]` range, so a batch of identical colors
/// uses nothing. Empty input returns 0.
pub fn gamut_utilization(colors: &[RgbColor], _space: ColorSpaceId) -> f32 {
    if colors.is_empty() {
        return 0.0;
    }
    let mut lo = RgbColor::WHITE;
    let mut hi = RgbColor::BLACK;
    for c in colors {
        lo = RgbColor::new(lo.r.min(c.r), lo.g.min(c.g), lo.b.min(c.b));
        hi = RgbColor::new(hi.r.max(c.r), hi.g.max(c.g), hi.b.max(c.b));
    }
    let volume = (hi.r - lo.r) * (hi.g - lo.g) * (hi.b - lo.b);
    volume.clamp(0.0, 1.0)
}

/// Pairwise Delta-E between two batches of equal length.
pub fn compare(reference: &[RgbColor], processed: &[RgbColor]) -> ColorResult<Vec<f32>> {
    if reference.len() != processed.len() {
        return Err(ColorError::LengthMismatch {
            expected: reference.len(),
            actual: processed.len(),
        });
    }
    Ok(reference
        .iter()
        .zip(processed)
        .map(|(&a, &b)| delta_e(a, b))
        .collect())
}

/// True when every pair is within `threshold` and so is the mean.
///
/// Batches of different length fail. Empty batches have no mean and fail
/// too.
pub fn validate_accuracy(reference: &[RgbColor], processed: &[RgbColor], threshold: f32) -> bool {
    let Ok(deltas) = compare(reference, processed) else {
        return false;
    };
    if deltas.is_empty() {
        return false;
    }
    if deltas.iter().any(|&d| d > threshold) {
        return false;
    }
    let mean = deltas.iter().sum::<f32>() / deltas.len() as f32;
    mean <= threshold
}

/// Outcome of [`validate_workflow`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccuracyReport {
    /// Mean Delta-E of the conversion.
    pub average_delta_e: f32,
    /// Largest single Delta-E.
    pub max_delta_e: f32,
    /// Colors that needed gamut mapping.
    pub failing_pixels: usize,
    /// `max(0, 1 - average / 10)`.
    pub fidelity: f32,
    /// Suggested changes, empty when the workflow looks fine.
    pub recommendations: Vec<String>,
}

/// Converts `colors` with `config` and grades the result.
pub fn validate_workflow(
    converter: &ColorConverter,
    colors: &[RgbColor],
    config: &ColorConversionConfig,
) -> AccuracyReport {
    let result = converter.convert(colors, config);

    let max_delta_e = colors
        .iter()
        .zip(&result.colors)
        .map(|(&a, &b)| delta_e(a, b))
        .fold(0.0_f32, f32::max);
    let fidelity = (1.0 - result.average_delta_e / 10.0).max(0.0);

    let mut recommendations = Vec::new();
    if result.average_delta_e > HIGH_DELTA_E {
        recommendations
            .push("Consider using perceptual gamut mapping for better color preservation".into());
    }
    if result.out_of_gamut_count as f32 > colors.len() as f32 * HIGH_FAILING_RATIO {
        recommendations.push(
            "High number of out-of-gamut pixels - consider wider working color space".into(),
        );
    }
    if fidelity < MIN_FIDELITY {
        recommendations
            .push("Color accuracy below professional standards - review workflow".into());
    }

    debug!(
        average = result.average_delta_e,
        max = max_delta_e,
        fidelity,
        "workflow validated"
    );

    AccuracyReport {
        average_delta_e: result.average_delta_e,
        max_delta_e,
        failing_pixels: result.out_of_gamut_count,
        fidelity,
        recommendations,
    }
}

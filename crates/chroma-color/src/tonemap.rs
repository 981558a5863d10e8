//! HDR to SDR tone mapping and SDR to HDR expansion.
//!
//! [`tone_map_to_sdr`] and [`expand_to_hdr`] are the fixed curves used by
//! display adaptation. [`ToneMapOperator`] offers the classic per-channel
//! operators on linear values; all of them return values in `[0, 1]` and
//! treat negative input as zero.

use chroma_core::RgbColor;
use std::fmt;

/// Display gamma used by the fixed SDR/HDR curves.
const DISPLAY_GAMMA: f32 = 2.4;

/// Compresses HDR values into SDR display range.
///
/// Each channel is scaled by `max_nits / 1000`, negatives are dropped,
/// and the result is gamma-encoded with 1/2.4 and clamped to `[0, 1]`.
///
/// ```rust
/// use chroma_color::tone_map_to_sdr;
/// use chroma_core::RgbColor;
///
/// let sdr = tone_map_to_sdr(RgbColor::gray(1.0), 1000.0);
/// assert_eq!(sdr, RgbColor::WHITE);
/// ```
pub fn tone_map_to_sdr(hdr: RgbColor, max_nits: f32) -> RgbColor {
    let scale = max_nits / 1000.0;
    hdr.map(|c| (c * scale).max(0.0).powf(1.0 / DISPLAY_GAMMA)).clamp01()
}

/// Expands SDR values to HDR range: `c^2.4 * target_nits / 100`.
///
/// The result is not clamped.
pub fn expand_to_hdr(sdr: RgbColor, target_nits: f32) -> RgbColor {
    let scale = target_nits / 100.0;
    sdr.map(|c| c.max(0.0).powf(DISPLAY_GAMMA) * scale)
}

/// Tone mapping operator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToneMapOperator {
    /// `x / (1 + x)`.
    #[default]
    Simple,
    /// Extended Reinhard with a white point.
    Reinhard {
        /// Input value that maps to 1.0.
        white: f32,
    },
    /// Narkowicz fit of the ACES reference rendering.
    Aces,
    /// Hable's filmic curve (Uncharted 2).
    Hable {
        /// Exposure multiplier applied before the curve.
        exposure_bias: f32,
    },
}

// Hable constants
const HABLE_A: f32 = 0.15;
const HABLE_B: f32 = 0.50;
const HABLE_C: f32 = 0.10;
const HABLE_D: f32 = 0.20;
const HABLE_E: f32 = 0.02;
const HABLE_F: f32 = 0.30;
const HABLE_WHITE: f32 = 11.2;

fn hable_partial(x: f32) -> f32 {
    ((x * (HABLE_A * x + HABLE_C * HABLE_B) + HABLE_D * HABLE_E)
        / (x * (HABLE_A * x + HABLE_B) + HABLE_D * HABLE_F))
        - HABLE_E / HABLE_F
}

impl ToneMapOperator {
    /// Reinhard with white at 4.0.
    pub const REINHARD: Self = Self::Reinhard { white: 4.0 };
    /// Hable with the usual exposure bias of 2.0.
    pub const HABLE: Self = Self::Hable { exposure_bias: 2.0 };

    /// Maps one linear value.
    pub fn map_value(self, x: f32) -> f32 {
        let x = if x.is_nan() { 0.0 } else { x.max(0.0) };
        let y = match self {
            Self::Simple => x / (1.0 + x),
            Self::Reinhard { white } => {
                if white > 0.0 {
                    x * (1.0 + x / (white * white)) / (1.0 + x)
                } else {
                    x / (1.0 + x)
                }
            }
            Self::Aces => {
                let (a, b, c, d, e) = (2.51, 0.03, 2.43, 0.59, 0.14);
                (x * (a * x + b)) / (x * (c * x + d) + e)
            }
            Self::Hable { exposure_bias } => {
                hable_partial(x * exposure_bias) / hable_partial(HABLE_WHITE)
            }
        };
        if y.is_nan() { 1.0 } else { y.clamp(0.0, 1.0) }
    }

    /// Maps each channel of a color.
    pub fn map(self, color: RgbColor) -> RgbColor {
        color.map(|c| self.map_value(c))
    }

    /// Maps a slice of colors in place.
    pub fn apply(self, colors: &mut [RgbColor]) {
        for c in colors {
            *c = self.map(*c);
        }
    }

    /// Operator name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Reinhard { .. } => "reinhard",
            Self::Aces => "aces",
            Self::Hable { .. } => "hable",
        }
    }
}

impl fmt::Display for ToneMapOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [ToneMapOperator; 4] = [
        ToneMapOperator::Simple,
        ToneMapOperator::REINHARD,
        ToneMapOperator::Aces,
        ToneMapOperator::HABLE,
    ];

    #[test]
    fn sdr_curve_stays_in_range() {
        for i in 0..50 {
            let c = RgbColor::new(i as f32 * 0.5, i as f32 * 0.01, 0.0);
            for nits in [100.0, 1000.0, 4000.0] {
                assert!(tone_map_to_sdr(c, nits).is_in_unit_range());
            }
        }
        let mid = tone_map_to_sdr(RgbColor::gray(0.5), 100.0);
        assert_abs_diff_eq!(mid.g, 0.05_f32.powf(1.0 / 2.4), epsilon = 1e-6);
    }

    #[test]
    fn expand_is_unclamped() {
        let hdr = expand_to_hdr(RgbColor::WHITE, 1000.0);
        assert_abs_diff_eq!(hdr.r, 10.0, epsilon = 1e-5);
        let back = tone_map_to_sdr(expand_to_hdr(RgbColor::gray(0.5), 100.0), 1000.0);
        assert_abs_diff_eq!(back.b, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn zero_stays_black() {
        for op in ALL {
            assert_abs_diff_eq!(op.map_value(0.0), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn monotonic_and_bounded() {
        for op in ALL {
            let mut prev = -1.0;
            for i in 0..200 {
                let y = op.map_value(i as f32 * 0.1);
                assert!((0.0..=1.0).contains(&y), "{op}: {y}");
                assert!(y >= prev, "{op} not monotonic at {i}");
                prev = y;
            }
        }
    }

    #[test]
    fn reinhard_white_maps_to_one() {
        let op = ToneMapOperator::Reinhard { white: 4.0 };
        assert_abs_diff_eq!(op.map_value(4.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ToneMapOperator::Simple.map_value(1.0), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn hable_white_point() {
        let op = ToneMapOperator::Hable { exposure_bias: 1.0 };
        assert_abs_diff_eq!(op.map_value(HABLE_WHITE), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn bad_input_is_safe() {
        for op in ALL {
            assert_eq!(op.map_value(f32::NAN), 0.0);
            assert_eq!(op.map_value(-3.0), 0.0);
            assert!(op.map_value(f32::INFINITY) <= 1.0);
        }
    }

    #[test]
    fn apply_in_place() {
        let mut colors = [RgbColor::gray(1.0), RgbColor::gray(3.0)];
        ToneMapOperator::Simple.apply(&mut colors);
        assert_abs_diff_eq!(colors[0].r, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(colors[1].b, 0.75, epsilon = 1e-6);
    }
}

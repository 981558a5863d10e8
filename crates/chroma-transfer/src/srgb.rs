//! IEC 61966-2-1 sRGB curve.
//!
//! A linear toe below 0.0031308 (0.04045 encoded) joined to a 2.4 power
//! segment with a 0.055 offset.

const LINEAR_KNEE: f32 = 0.0031308;
const SIGNAL_KNEE: f32 = 0.04045;
const SLOPE: f32 = 12.92;
const OFFSET: f32 = 0.055;
const EXPONENT: f32 = 2.4;

/// Decodes an sRGB value to linear light.
///
/// ```rust
/// let linear = chroma_transfer::srgb::to_linear(0.5);
/// assert!((linear - 0.2140).abs() < 1e-3);
/// ```
#[inline]
pub fn to_linear(v: f32) -> f32 {
    if v <= SIGNAL_KNEE {
        v / SLOPE
    } else {
        ((v + OFFSET) / (1.0 + OFFSET)).powf(EXPONENT)
    }
}

/// Encodes linear light as sRGB.
#[inline]
pub fn from_linear(l: f32) -> f32 {
    if l <= LINEAR_KNEE {
        l * SLOPE
    } else {
        (1.0 + OFFSET) * l.powf(1.0 / EXPONENT) - OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints() {
        assert_eq!(to_linear(0.0), 0.0);
        assert_abs_diff_eq!(to_linear(1.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(from_linear(1.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn knee_is_continuous() {
        let below = to_linear(SIGNAL_KNEE);
        let above = to_linear(SIGNAL_KNEE + 1e-6);
        assert_abs_diff_eq!(below, above, epsilon = 1e-5);
    }
}

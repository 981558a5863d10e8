//! Pure power-law curves.
//!
//! Negative inputs pass through the curve mirrored around zero so that
//! out-of-range values survive a decode/encode pair.

/// Decodes with `signal^gamma`.
#[inline]
pub fn to_linear(v: f32, gamma: f32) -> f32 {
    v.signum() * v.abs().powf(gamma)
}

/// Encodes with `linear^(1/gamma)`. A non-positive gamma passes the value
/// through unchanged.
#[inline]
pub fn from_linear(l: f32, gamma: f32) -> f32 {
    if gamma <= 0.0 {
        return l;
    }
    l.signum() * l.abs().powf(1.0 / gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn gamma_24() {
        assert_abs_diff_eq!(to_linear(0.5, 2.4), 0.18946, epsilon = 1e-4);
        assert_abs_diff_eq!(from_linear(0.18946, 2.4), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn negative_values_are_mirrored() {
        assert_abs_diff_eq!(to_linear(-0.5, 2.2), -to_linear(0.5, 2.2), epsilon = 1e-7);
    }

    #[test]
    fn zero_gamma_is_passthrough() {
        assert_eq!(from_linear(0.3, 0.0), 0.3);
    }
}

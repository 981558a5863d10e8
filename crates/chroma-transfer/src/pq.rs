//! SMPTE ST 2084 Perceptual Quantizer.
//!
//! PQ is display-referred and absolute: a signal value names a luminance
//! in cd/m² up to [`PEAK_NITS`]. HDR10, HDR10+ and Dolby Vision all carry
//! PQ-encoded video.

/// Luminance of a full-scale PQ signal, in cd/m².
pub const PEAK_NITS: f32 = 10000.0;

/// Luminance treated as 1.0 by the normalized helpers (SDR reference white).
pub const REFERENCE_NITS: f32 = 100.0;

const M1: f32 = 2610.0 / 16384.0;
const M2: f32 = 2523.0 / 4096.0 * 128.0;
const C1: f32 = 3424.0 / 4096.0;
const C2: f32 = 2413.0 / 4096.0 * 32.0;
const C3: f32 = 2392.0 / 4096.0 * 32.0;

/// Decodes a PQ signal to absolute luminance in cd/m².
///
/// ```rust
/// use chroma_transfer::pq;
///
/// assert!((pq::signal_to_nits(1.0) - 10000.0).abs() < 1.0);
/// ```
#[inline]
pub fn signal_to_nits(signal: f32) -> f32 {
    if signal <= 0.0 {
        return 0.0;
    }
    let p = signal.min(1.0).powf(1.0 / M2);
    let ratio = (p - C1).max(0.0) / (C2 - C3 * p);
    PEAK_NITS * ratio.powf(1.0 / M1)
}

/// Encodes absolute luminance (cd/m²) as a PQ signal in [0, 1].
#[inline]
pub fn nits_to_signal(nits: f32) -> f32 {
    if nits <= 0.0 {
        return 0.0;
    }
    let y = (nits / PEAK_NITS).min(1.0).powf(M1);
    ((C1 + C2 * y) / (1.0 + C3 * y)).powf(M2)
}

/// Decodes to linear light where 1.0 is [`REFERENCE_NITS`].
#[inline]
pub fn to_linear(signal: f32) -> f32 {
    signal_to_nits(signal) / REFERENCE_NITS
}

/// Encodes linear light where 1.0 is [`REFERENCE_NITS`].
#[inline]
pub fn from_linear(l: f32) -> f32 {
    nits_to_signal(l * REFERENCE_NITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reference_levels() {
        // BT.2100 table: 100 nits ~ 0.508, 1000 nits ~ 0.752
        assert_abs_diff_eq!(nits_to_signal(100.0), 0.5081, epsilon = 1e-3);
        assert_abs_diff_eq!(nits_to_signal(1000.0), 0.7518, epsilon = 1e-3);
        assert_abs_diff_eq!(nits_to_signal(PEAK_NITS), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn clamps_outside_range() {
        assert_eq!(nits_to_signal(-5.0), 0.0);
        assert_eq!(signal_to_nits(-0.1), 0.0);
        assert_abs_diff_eq!(nits_to_signal(20000.0), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn normalized_white() {
        assert_abs_diff_eq!(to_linear(from_linear(1.0)), 1.0, epsilon = 1e-3);
    }
}

use crate::{gamma, hlg, pq, rec709, srgb};
use chroma_core::RgbColor;
use std::fmt;

/// A transfer function, selectable at runtime.
///
/// `to_linear` decodes a signal, `from_linear` encodes one. Linear output
/// of [`TransferFunction::Pq`] is relative to 100 cd/m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferFunction {
    /// Identity.
    Linear,
    /// sRGB piecewise curve.
    Srgb,
    /// BT.709 camera curve (also used for BT.2020 and BT.601).
    Rec709,
    /// Pure power law with the given display gamma.
    Gamma(f32),
    /// SMPTE ST 2084.
    Pq,
    /// BT.2100 Hybrid Log-Gamma.
    Hlg,
}

impl TransferFunction {
    /// Decodes one channel.
    #[inline]
    pub fn to_linear(self, v: f32) -> f32 {
        match self {
            Self::Linear => v,
            Self::Srgb => srgb::to_linear(v),
            Self::Rec709 => rec709::to_linear(v),
            Self::Gamma(g) => gamma::to_linear(v, g),
            Self::Pq => pq::to_linear(v),
            Self::Hlg => hlg::to_linear(v),
        }
    }

    /// Encodes one channel.
    #[inline]
    pub fn from_linear(self, l: f32) -> f32 {
        match self {
            Self::Linear => l,
            Self::Srgb => srgb::from_linear(l),
            Self::Rec709 => rec709::from_linear(l),
            Self::Gamma(g) => gamma::from_linear(l, g),
            Self::Pq => pq::from_linear(l),
            Self::Hlg => hlg::from_linear(l),
        }
    }

    /// Decodes every channel of a color.
    #[inline]
    pub fn to_linear_rgb(self, c: RgbColor) -> RgbColor {
        c.map(|v| self.to_linear(v))
    }

    /// Encodes every channel of a color.
    #[inline]
    pub fn from_linear_rgb(self, c: RgbColor) -> RgbColor {
        c.map(|v| self.from_linear(v))
    }

    /// True for the HDR curves (PQ, HLG).
    pub fn is_hdr(self) -> bool {
        matches!(self, Self::Pq | Self::Hlg)
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::Srgb => f.write_str("sRGB"),
            Self::Rec709 => f.write_str("BT.709"),
            Self::Gamma(g) => write!(f, "Gamma {g}"),
            Self::Pq => f.write_str("PQ (ST 2084)"),
            Self::Hlg => f.write_str("HLG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn every_curve_inverts() {
        let curves = [
            TransferFunction::Linear,
            TransferFunction::Srgb,
            TransferFunction::Rec709,
            TransferFunction::Gamma(2.6),
            TransferFunction::Pq,
            TransferFunction::Hlg,
        ];
        for tf in curves {
            for v in [0.05_f32, 0.25, 0.5, 0.75, 1.0] {
                let back = tf.from_linear(tf.to_linear(v));
                assert_abs_diff_eq!(back, v, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn rgb_helpers_apply_per_channel() {
        let c = TransferFunction::Gamma(2.0).to_linear_rgb(RgbColor::new(0.5, 1.0, 0.0));
        assert_eq!(c, RgbColor::new(0.25, 1.0, 0.0));
    }

    #[test]
    fn hdr_flag() {
        assert!(TransferFunction::Pq.is_hdr());
        assert!(!TransferFunction::Gamma(2.4).is_hdr());
    }
}

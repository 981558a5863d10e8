//! ITU-R BT.2100 Hybrid Log-Gamma.
//!
//! HLG is scene-referred and relative: a square-root segment for the lower
//! twelfth of scene light and a log segment above it. The display applies
//! an OOTF whose system gamma depends on the display peak.

const A: f32 = 0.17883277;
const B: f32 = 0.28466892;
const C: f32 = 0.55991073;

/// System gamma of the reference 1000 cd/m² HLG display.
pub const REFERENCE_SYSTEM_GAMMA: f32 = 1.2;

/// Nominal peak luminance of the HLG reference display.
pub const REFERENCE_PEAK_NITS: f32 = 1000.0;

/// Encodes normalized scene light [0, 1] as an HLG signal.
#[inline]
pub fn from_linear(e: f32) -> f32 {
    if e <= 0.0 {
        0.0
    } else if e <= 1.0 / 12.0 {
        (3.0 * e).sqrt()
    } else {
        A * (12.0 * e - B).ln() + C
    }
}

/// Decodes an HLG signal to normalized scene light.
#[inline]
pub fn to_linear(signal: f32) -> f32 {
    if signal <= 0.0 {
        0.0
    } else if signal <= 0.5 {
        signal * signal / 3.0
    } else {
        (((signal - C) / A).exp() + B) / 12.0
    }
}

/// System gamma for a display of the given peak, per BT.2100 note 5f:
/// `1.2 + 0.42 * log10(peak / 1000)`.
#[inline]
pub fn system_gamma(peak_nits: f32) -> f32 {
    if peak_nits <= 0.0 {
        return REFERENCE_SYSTEM_GAMMA;
    }
    REFERENCE_SYSTEM_GAMMA + 0.42 * (peak_nits / REFERENCE_PEAK_NITS).log10()
}

/// Applies the HLG OOTF to scene luminance, producing display luminance
/// relative to the display peak.
#[inline]
pub fn ootf(scene: f32, gamma: f32) -> f32 {
    if scene <= 0.0 {
        return 0.0;
    }
    scene.powf(gamma)
}

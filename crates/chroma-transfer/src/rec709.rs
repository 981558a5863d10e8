//! ITU-R BT.709 camera curve, shared by BT.2020 at 10 bits.
//!
//! Note that displays decode BT.709 with BT.1886 (a pure 2.4 gamma), not
//! with the exact inverse implemented here.

const LINEAR_KNEE: f32 = 0.018;
const SIGNAL_KNEE: f32 = 0.081;
const ALPHA: f32 = 1.099;
const BETA: f32 = 0.099;

/// Encodes scene linear light as a BT.709 signal.
#[inline]
pub fn from_linear(l: f32) -> f32 {
    if l < LINEAR_KNEE {
        4.5 * l
    } else {
        ALPHA * l.powf(0.45) - BETA
    }
}

/// Inverts the BT.709 camera curve.
#[inline]
pub fn to_linear(v: f32) -> f32 {
    if v < SIGNAL_KNEE {
        v / 4.5
    } else {
        ((v + BETA) / ALPHA).powf(1.0 / 0.45)
    }
}

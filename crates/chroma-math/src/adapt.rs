//! Chromatic adaptation transforms.
//!
//! A von Kries style adaptation maps XYZ into a cone-like response space,
//! scales each response by the ratio of destination to source white, and
//! maps back:
//!
//! ```text
//! A = M⁻¹ · diag(M·W_dst / M·W_src) · M
//! ```
//!
//! The methods differ only in the choice of `M`. Bradford is the default
//! used throughout the engine.
//!
//! ```rust
//! use chroma_math::{adaptation_matrix, AdaptationMethod, Vec3};
//!
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let d50 = Vec3::new(0.96422, 1.0, 0.82521);
//! let m = adaptation_matrix(AdaptationMethod::Bradford, d65, d50);
//! let white = m * d65;
//! assert!((white.z - d50.z).abs() < 1e-3);
//! ```

use crate::{Mat3, Vec3};

/// Bradford cone response matrix (Lam, 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries (Hunt-Pointer-Estevez) cone response matrix.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.0, 0.0, 0.91822],
]);

/// CIECAM02 CAT02 matrix.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Chromatic adaptation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdaptationMethod {
    /// Bradford transform.
    #[default]
    Bradford,
    /// Classic von Kries transform.
    VonKries,
    /// CAT02 from CIECAM02.
    Cat02,
}

impl AdaptationMethod {
    /// Cone response matrix of this method.
    pub fn cone_matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::VonKries => VON_KRIES,
            Self::Cat02 => CAT02,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bradford => "Bradford",
            Self::VonKries => "von Kries",
            Self::Cat02 => "CAT02",
        }
    }
}

/// Matrix adapting XYZ values from `src_white` to `dst_white`.
///
/// Identity when the whites are equal. A source white with a zero cone
/// response cannot be adapted from and also yields identity.
pub fn adaptation_matrix(method: AdaptationMethod, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    if src_white == dst_white {
        return Mat3::IDENTITY;
    }

    let cone = method.cone_matrix();
    let src = cone * src_white;
    let dst = cone * dst_white;

    if [src.x, src.y, src.z].iter().any(|v| v.abs() < f32::EPSILON) {
        tracing::debug!(method = method.name(), "degenerate source white, skipping adaptation");
        return Mat3::IDENTITY;
    }

    let gain = Mat3::diagonal(dst.x / src.x, dst.y / src.y, dst.z / src.z);
    let adapted = cone.inverse_or_identity() * gain * cone;
    if adapted.is_finite() {
        adapted
    } else {
        Mat3::IDENTITY
    }
}

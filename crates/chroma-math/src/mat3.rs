//! 3x3 conversion matrix.
//!
//! [`Mat3`] carries RGB→XYZ matrices, their inverses, chromatic adaptation
//! matrices and the composed source→target conversion matrices.
//!
//! ```text
//! | m00 m01 m02 |   | r |   | m00*r + m01*g + m02*b |
//! | m10 m11 m12 | * | g | = | m10*r + m11*g + m12*b |
//! | m20 m21 m22 |   | b |   | m20*r + m21*g + m22*b |
//! ```
//!
//! Conversion code sits in per-pixel paths, so the matrix API never fails:
//! [`Mat3::inverse_or_identity`] is the fail-safe inverse used by the
//! engine, [`Mat3::inverse`] is available when a caller wants to know.

use crate::Vec3;
use std::ops::Mul;

/// Determinant magnitude below which a matrix is treated as singular.
pub const SINGULAR_EPSILON: f32 = 1e-10;

/// A row-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows of the matrix.
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// All-zero matrix.
    pub const ZERO: Self = Self::diagonal(0.0, 0.0, 0.0);

    /// Builds a matrix from rows.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Builds a matrix whose columns are the given vectors.
    ///
    /// This is the natural layout for primaries matrices, where each
    /// column is the XYZ of one primary.
    #[inline]
    pub const fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_rows([
            [c0.x, c1.x, c2.x],
            [c0.y, c1.y, c2.y],
            [c0.z, c1.z, c2.z],
        ])
    }

    /// Diagonal matrix, used for per-channel scaling.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Row `i` as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Column `i` as a vector.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_col_vecs(self.row(0), self.row(1), self.row(2))
    }

    /// Determinant as the scalar triple product of the rows.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.row(0).dot(self.row(1).cross(self.row(2)))
    }

    /// Inverse, or `None` when `|det| < 1e-10`.
    ///
    /// Each column of the inverse is the cross product of the two other
    /// rows divided by the determinant.
    ///
    /// ```rust
    /// use chroma_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// assert_eq!(m.inverse(), Some(Mat3::diagonal(0.5, 0.25, 0.125)));
    /// assert_eq!(Mat3::ZERO.inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }
        let (r0, r1, r2) = (self.row(0), self.row(1), self.row(2));
        let inv_det = 1.0 / det;
        Some(Self::from_col_vecs(
            r1.cross(r2) * inv_det,
            r2.cross(r0) * inv_det,
            r0.cross(r1) * inv_det,
        ))
    }

    /// Inverse that degrades to identity for singular input.
    ///
    /// A singular primaries matrix means the chromaticities were degenerate
    /// (collinear primaries, zero `y`). Passing colors through unchanged is
    /// the documented fallback.
    #[inline]
    pub fn inverse_or_identity(&self) -> Self {
        match self.inverse() {
            Some(inv) => inv,
            None => {
                tracing::trace!(det = self.determinant(), "singular matrix, using identity");
                Self::IDENTITY
            }
        }
    }

    /// Applies the matrix to a column vector.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Matrix product `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_glam(self.to_glam() * other.to_glam())
    }

    /// True if no element is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// True when within `tolerance` of the identity.
    #[inline]
    pub fn is_identity(&self, tolerance: f32) -> bool {
        self.approx_eq(&Self::IDENTITY, tolerance)
    }

    /// Converts to a column-major glam matrix.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols(
            self.col(0).to_glam(),
            self.col(1).to_glam(),
            self.col(2).to_glam(),
        )
    }

    /// Converts from a column-major glam matrix.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_col_vecs(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

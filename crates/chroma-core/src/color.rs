//! RGB and XYZ color records.
//!
//! Both types are plain `f32` triplets. Construction never validates:
//! HDR pipelines routinely carry values above 1.0 or below 0.0 between
//! stages, and only the consumer knows which range applies.

use std::fmt;

/// Rec.709 luminance coefficient for red channel.
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.709 luminance coefficients as `[R, G, B]`.
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Rec.709 relative luminance of an RGB triplet.
///
/// # Example
///
/// ```
/// use chroma_core::{luminance_rec709, RgbColor};
///
/// let white = RgbColor::new(1.0, 1.0, 1.0);
/// assert!((luminance_rec709(white) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn luminance_rec709(c: RgbColor) -> f32 {
    c.r * REC709_LUMA_R + c.g * REC709_LUMA_G + c.b * REC709_LUMA_B
}

/// An RGB triplet in some working space.
///
/// The space is not tracked by the type; conversion functions take the
/// source and target identifiers explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbColor {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl RgbColor {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Reference white (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a neutral gray with all channels equal.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// True when every channel lies in `[0, 1]`.
    #[inline]
    pub fn is_in_unit_range(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// True when no channel is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Clamps every channel to `[0, 1]`.
    ///
    /// NaN channels become 0.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) })
    }

    /// Applies `f` to each channel.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_channel(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }
}

impl From<[f32; 3]> for RgbColor {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<RgbColor> for [f32; 3] {
    #[inline]
    fn from(c: RgbColor) -> [f32; 3] {
        c.to_array()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
    }
}

/// A CIE 1931 XYZ tristimulus value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyzColor {
    /// X tristimulus.
    pub x: f32,
    /// Y tristimulus (relative luminance).
    pub y: f32,
    /// Z tristimulus.
    pub z: f32,
}

impl XyzColor {
    /// Creates a new XYZ value.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Builds the XYZ value of a chromaticity at the given luminance.
    ///
    /// A `y` of zero (the degenerate chromaticity) yields black.
    ///
    /// ```
    /// use chroma_core::XyzColor;
    ///
    /// let d65 = XyzColor::from_xy(0.3127, 0.3290, 1.0);
    /// assert!((d65.x - 0.9505).abs() < 1e-3);
    /// assert_eq!(d65.y, 1.0);
    /// ```
    #[inline]
    pub fn from_xy(x: f32, y: f32, luminance: f32) -> Self {
        if y.abs() < f32::EPSILON {
            return Self::default();
        }
        Self::new(
            x * luminance / y,
            luminance,
            (1.0 - x - y) * luminance / y,
        )
    }

    /// Returns the xy chromaticity, or `None` for black.
    #[inline]
    pub fn chromaticity(self) -> Option<(f32, f32)> {
        let sum = self.x + self.y + self.z;
        if sum.abs() < f32::EPSILON {
            return None;
        }
        Some((self.x / sum, self.y / sum))
    }

    /// Returns `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for XyzColor {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl fmt::Display for XyzColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XYZ({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

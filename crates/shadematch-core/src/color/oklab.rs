//! OKLab perceptual color space
//!
//! Matching thresholds downstream (undertone cutoffs, the perimeter
//! lightness window) are tuned to this exact space, so the matrices below
//! are the published OKLab coefficients and must not be rounded.
//!
//! - L: Lightness (0 = black, 1 = white); skin tones sit roughly in [0.3, 0.9]
//! - a: Green-red axis (negative = green, positive = red)
//! - b: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! Reference: Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::color::{Rgb, Rgb8};
use crate::math::{Matrix3x3, signed_cbrt, srgb_gamma_decode, srgb_gamma_encode};

/// Linear sRGB → LMS cone response
const LINEAR_RGB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-rooted LMS → Lab
const LMS_TO_LAB: Matrix3x3 = Matrix3x3::new([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Lab → cube-rooted LMS (inverse of [`LMS_TO_LAB`])
const LAB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS → linear sRGB (inverse of [`LINEAR_RGB_TO_LMS`])
const LMS_TO_LINEAR_RGB: Matrix3x3 = Matrix3x3::new([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);

/// A color in OKLab coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerceptualColor {
    /// Lightness
    #[serde(rename = "L")]
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl PerceptualColor {
    /// Create a new perceptual color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert an 8-bit sRGB color
    pub fn from_rgb8(color: Rgb8) -> Self {
        let rgb = Rgb::from(color);
        let linear = [
            srgb_gamma_decode(rgb.r),
            srgb_gamma_decode(rgb.g),
            srgb_gamma_decode(rgb.b),
        ];

        let lms = LINEAR_RGB_TO_LMS.multiply_vec(linear);
        let lms_ = [signed_cbrt(lms[0]), signed_cbrt(lms[1]), signed_cbrt(lms[2])];
        let [l, a, b] = LMS_TO_LAB.multiply_vec(lms_);

        Self { l, a, b }
    }

    /// Parse a hex string and convert it
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb8(Rgb8::parse(hex)?))
    }

    /// Convert back to sRGB-encoded floating point, clamped to gamut
    pub fn to_rgb(&self) -> Rgb {
        let lms_ = LAB_TO_LMS.multiply_vec(self.to_array());
        let lms = [lms_[0].powi(3), lms_[1].powi(3), lms_[2].powi(3)];
        let [r, g, b] = LMS_TO_LINEAR_RGB.multiply_vec(lms);

        Rgb::new(
            srgb_gamma_encode(r.clamp(0.0, 1.0)),
            srgb_gamma_encode(g.clamp(0.0, 1.0)),
            srgb_gamma_encode(b.clamp(0.0, 1.0)),
        )
    }

    /// Convert back to an 8-bit sRGB color
    pub fn to_rgb8(&self) -> Rgb8 {
        self.to_rgb().to_rgb8()
    }

    /// Euclidean distance to another color
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Check if approximately equal to another color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<Rgb8> for PerceptualColor {
    fn from(color: Rgb8) -> Self {
        Self::from_rgb8(color)
    }
}

/// Convert a hex color string to OKLab
///
/// Fails with [`crate::Error::InvalidHex`] on malformed input.
pub fn hex_to_perceptual(hex: &str) -> Result<PerceptualColor> {
    PerceptualColor::from_hex(hex)
}

/// Convert OKLab back to the nearest 8-bit sRGB color
pub fn perceptual_to_rgb(color: &PerceptualColor) -> Rgb8 {
    color.to_rgb8()
}

/// Euclidean distance over (L, a, b); symmetric and unbounded
pub fn perceptual_distance(x: &PerceptualColor, y: &PerceptualColor) -> f64 {
    x.distance(y)
}

//! RGB Color Primitives
//!
//! Floating-point sRGB-encoded colors used by the pigment model and by the
//! inverse perceptual conversion.

use std::ops::{Add, Mul};

use crate::color::Rgb8;

/// RGB color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to an 8-bit color, rounding and clamping each channel
    #[inline]
    pub fn to_rgb8(&self) -> Rgb8 {
        Rgb8::new(
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }

    /// Luma with Rec. 601 weights (0.299, 0.587, 0.114)
    ///
    /// Summed in per-mille so white lands on exactly 1.0.
    #[inline]
    pub fn luma(&self) -> f64 {
        (299.0 * self.r + 587.0 * self.g + 114.0 * self.b) / 1000.0
    }

    /// Largest channel value
    #[inline]
    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value
    #[inline]
    pub fn min_channel(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// HSV-style saturation: (max - min) / max, zero for black
    #[inline]
    pub fn saturation(&self) -> f64 {
        let max = self.max_channel();
        if max <= 0.0 {
            0.0
        } else {
            (max - self.min_channel()) / max
        }
    }

    /// Linear blend toward `other`; `t = 0` keeps `self`, `t = 1` yields `other`
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        *self * (1.0 - t) + *other * t
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl From<Rgb8> for Rgb {
    fn from(color: Rgb8) -> Self {
        Self::from_u8(color.r, color.g, color.b)
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_u8_conversion() {
        let rgb = Rgb::from_u8(255, 128, 0);
        assert!((rgb.r - 1.0).abs() < EPSILON);
        assert!((rgb.g - 128.0 / 255.0).abs() < EPSILON);
        assert!((rgb.b - 0.0).abs() < EPSILON);

        assert_eq!(rgb.to_rgb8(), Rgb8::new(255, 128, 0));
    }

    #[test]
    fn test_to_rgb8_clamps() {
        assert_eq!(Rgb::new(1.5, -0.5, 0.5).to_rgb8(), Rgb8::new(255, 0, 128));
    }

    #[test]
    fn test_luma() {
        assert!(Rgb::BLACK.luma().abs() < EPSILON);
        assert_eq!(Rgb::WHITE.luma(), 1.0);
        assert!((Rgb::new(1.0, 0.0, 0.0).luma() - 0.299).abs() < EPSILON);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(Rgb::BLACK.saturation(), 0.0);
        assert_eq!(Rgb::WHITE.saturation(), 0.0);
        assert!((Rgb::new(1.0, 0.5, 0.0).saturation() - 1.0).abs() < EPSILON);
        assert!((Rgb::new(0.8, 0.4, 0.4).saturation() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_lerp() {
        let mid = Rgb::BLACK.lerp(&Rgb::WHITE, 0.25);
        assert!(mid.approx_eq(&Rgb::new(0.25, 0.25, 0.25), EPSILON));
    }

    #[test]
    fn test_arithmetic() {
        let a = Rgb::new(0.5, 0.5, 0.5);
        let b = Rgb::new(0.1, 0.2, 0.3);

        let sum = a + b;
        assert!(sum.approx_eq(&Rgb::new(0.6, 0.7, 0.8), EPSILON));

        let scaled = a * 2.0;
        assert!(scaled.approx_eq(&Rgb::WHITE, EPSILON));
    }
}

//! sRGB transfer function
//!
//! IEC 61966-2-1 encode/decode plus the sign-preserving cube root the
//! OKLab transform applies to cone responses.

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value in [0,1] to linear light.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Cube root that keeps the sign of negative inputs
#[inline]
pub fn signed_cbrt(x: f64) -> f64 {
    if x >= 0.0 { x.cbrt() } else { -(-x).cbrt() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_srgb_endpoints() {
        assert!(srgb_gamma_decode(0.0).abs() < EPSILON);
        assert!((srgb_gamma_decode(1.0) - 1.0).abs() < EPSILON);
        assert!((srgb_gamma_encode(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_linear_segment() {
        // Below the knee the curve is a straight line
        assert!((srgb_gamma_decode(0.04) - 0.04 / 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_roundtrip() {
        for i in 0..=255 {
            let v = i as f64 / 255.0;
            let back = srgb_gamma_encode(srgb_gamma_decode(v));
            assert!((v - back).abs() < 1e-9, "roundtrip failed at {}", i);
        }
    }

    #[test]
    fn test_signed_cbrt() {
        assert!((signed_cbrt(27.0) - 3.0).abs() < EPSILON);
        assert!((signed_cbrt(-8.0) + 2.0).abs() < EPSILON);
    }
}

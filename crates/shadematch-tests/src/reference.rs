//! Reference implementation wrappers
//!
//! Conversions computed by the `palette` crate, used as the independent
//! implementation our converter is checked against.

use palette::{FromColor, Oklab, Srgb};
use shadematch_core::{PerceptualColor, Rgb8};

/// OKLab of an 8-bit sRGB color according to `palette`
pub fn palette_oklab(color: Rgb8) -> PerceptualColor {
    let srgb: Srgb<f64> = Srgb::new(color.r, color.g, color.b).into_format();
    let lab: Oklab<f64> = Oklab::from_color(srgb);
    PerceptualColor::new(lab.l, lab.a, lab.b)
}

/// 8-bit sRGB of an OKLab color according to `palette`
pub fn palette_srgb(color: &PerceptualColor) -> Rgb8 {
    let srgb = Srgb::<f64>::from_color(Oklab::new(color.l, color.a, color.b));
    let encoded: Srgb<u8> = srgb.into_format();
    Rgb8::new(encoded.red, encoded.green, encoded.blue)
}

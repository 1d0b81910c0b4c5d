//! Test color generation
//!
//! Deterministic color sets for parity and property tests.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use shadematch_core::Rgb8;

/// Color set types
#[derive(Debug, Clone, Copy)]
pub enum ColorPattern {
    /// Fitzpatrick-style skin tone references, repeated
    SkinTones,
    /// Grayscale ramp 0-255
    Grayscale,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Warm ramp from porcelain to deep espresso
    FoundationRamp,
    /// Random colors with seed
    Random(u64),
}

const SKIN_TONES: [[u8; 3]; 6] = [
    [255, 224, 189],
    [241, 194, 125],
    [224, 172, 105],
    [198, 134, 66],
    [141, 85, 36],
    [89, 47, 42],
];

const CUBE_CORNERS: [[u8; 3]; 8] = [
    [0, 0, 0],
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

/// Generate `count` colors following a pattern
pub fn generate_colors(pattern: ColorPattern, count: usize) -> Vec<Rgb8> {
    match pattern {
        ColorPattern::SkinTones => (0..count).map(|i| Rgb8::from(SKIN_TONES[i % 6])).collect(),
        ColorPattern::ColorCube => (0..count).map(|i| Rgb8::from(CUBE_CORNERS[i % 8])).collect(),
        ColorPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i as f64 / count.max(2).saturating_sub(1) as f64) * 255.0).round() as u8;
                Rgb8::new(v, v, v)
            })
            .collect(),
        ColorPattern::FoundationRamp => (0..count)
            .map(|i| {
                let t = i as f64 / count.max(2).saturating_sub(1) as f64;
                Rgb8::new(
                    lerp_u8(255, 74, t),
                    lerp_u8(228, 42, t),
                    lerp_u8(206, 24, t),
                )
            })
            .collect(),
        ColorPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut data = vec![0u8; count * 3];
            rng.fill_bytes(&mut data);
            data.chunks_exact(3)
                .map(|c| Rgb8::new(c[0], c[1], c[2]))
                .collect()
        }
    }
}

fn lerp_u8(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u8
}

//! Color types and conversions
//!
//! This module provides:
//! - 24-bit sRGB colors parsed from hex strings
//! - Floating-point RGB primitives
//! - The OKLab-style perceptual space used for matching

pub mod hex;
pub mod oklab;
pub mod rgb;

pub use hex::Rgb8;
pub use oklab::{PerceptualColor, hex_to_perceptual, perceptual_distance, perceptual_to_rgb};
pub use rgb::Rgb;

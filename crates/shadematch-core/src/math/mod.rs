//! Numeric building blocks for the color pipeline
//!
//! - 3x3 matrix operations for the OKLab cone-response transforms
//! - sRGB transfer function encode/decode

pub mod gamma;
pub mod matrix;

pub use gamma::{signed_cbrt, srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::Matrix3x3;

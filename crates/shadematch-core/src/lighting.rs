//! Ambient lighting correction
//!
//! A photographed skin sample carries the cast of the light it was taken
//! under. Catalog shades are assumed to be shot under neutral daylight
//! (6500 K), so the user's color is shifted on the chroma axes in the
//! direction opposite the ambient cast before comparison. Lightness is
//! never touched.
//!
//! The correction grows as color rendering gets worse:
//!
//! ```text
//! delta_k = (cct - 6500) / 6500
//! scale   = 0.5 * (100 - clamp(cri, 0, 100)) / 100 + 0.2
//! a      += -0.02 * delta_k * scale
//! b      += -0.03 * delta_k * scale
//! ```

use serde::{Deserialize, Serialize};

use crate::color::PerceptualColor;
use crate::{Error, Result};

/// Reference color temperature of neutral daylight (Kelvin)
pub const NEUTRAL_CCT_K: f64 = 6500.0;

/// Lowest color temperature accepted from callers (candle flame is ~1850 K)
pub const MIN_CCT_K: f64 = 1000.0;

/// Highest color temperature accepted from callers (clear blue sky)
pub const MAX_CCT_K: f64 = 25000.0;

/// Shift scale applied even under perfect color rendering
const BASELINE_SCALE: f64 = 0.2;
/// Additional shift scale at CRI 0
const CRI_SCALE: f64 = 0.5;
const A_GAIN: f64 = 0.02;
const B_GAIN: f64 = 0.03;

/// Viewing conditions a color sample was captured under
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingContext {
    /// Correlated color temperature in Kelvin
    pub cct_k: f64,
    /// Color rendering index, 0 to 100
    pub cri: f64,
}

impl LightingContext {
    /// Neutral daylight with perfect rendering; applies no correction
    pub const NEUTRAL: Self = Self {
        cct_k: NEUTRAL_CCT_K,
        cri: 100.0,
    };

    /// Create a validated lighting context
    ///
    /// CCT must be within [`MIN_CCT_K`]..=[`MAX_CCT_K`] and CRI within 0..=100.
    pub fn new(cct_k: f64, cri: f64) -> Result<Self> {
        if !cct_k.is_finite() || !(MIN_CCT_K..=MAX_CCT_K).contains(&cct_k) {
            return Err(Error::InvalidLighting(format!(
                "color temperature {cct_k} K outside {MIN_CCT_K}..={MAX_CCT_K} K"
            )));
        }
        if !cri.is_finite() || !(0.0..=100.0).contains(&cri) {
            return Err(Error::InvalidLighting(format!(
                "color rendering index {cri} outside 0..=100"
            )));
        }
        Ok(Self { cct_k, cri })
    }

    /// The (a, b) offset this lighting adds to a sample
    pub fn chroma_shift(&self) -> (f64, f64) {
        let delta_k = (self.cct_k - NEUTRAL_CCT_K) / NEUTRAL_CCT_K;
        let cri_penalty = (100.0 - self.cri.clamp(0.0, 100.0)) / 100.0;
        let scale = CRI_SCALE * cri_penalty + BASELINE_SCALE;

        (-A_GAIN * delta_k * scale, -B_GAIN * delta_k * scale)
    }

    /// Apply the correction to a color
    pub fn apply(&self, color: &PerceptualColor) -> PerceptualColor {
        let (a_shift, b_shift) = self.chroma_shift();
        PerceptualColor::new(color.l, color.a + a_shift, color.b + b_shift)
    }
}

impl Default for LightingContext {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Correct a sample for the light it was captured under
///
/// Total over all inputs: CRI is clamped, CCT is taken as given. Use
/// [`LightingContext::new`] to validate caller-supplied values first.
pub fn adjust_for_lighting(color: &PerceptualColor, cct_k: f64, cri: f64) -> PerceptualColor {
    LightingContext { cct_k, cri }.apply(color)
}

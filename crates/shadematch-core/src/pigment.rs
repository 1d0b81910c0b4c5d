//! Pigment mixing model
//!
//! Describes a color as a paint recipe over five base pigments plus
//! titanium white, and renders a recipe back to a swatch. Used to display a
//! "recreated" shade next to a saved match.
//!
//! The model is two-stage, like mixing real paint:
//!
//! 1. A [`BaseMix`] of the five pigments, normalized to sum to 1.0.
//! 2. A separate white fraction in `[0, 0.4]`, blended onto the mixed base
//!    last. White never takes part in the base normalization.
//!
//! Raw weights (before normalization), from Rec. 601 luma `Y`, HSV
//! saturation `S`, per-channel spread over the darkest channel
//! (`sr = R - min`, ...), and the blue share `B / (R + G + B)`:
//!
//! | pigment | weight |
//! |---|---|
//! | burnt umber | `0.6 (1 - Y)` |
//! | ultramarine blue | `0.8 · blue share · (1 - Y)`, plus `0.5 sb` when blue dominates |
//! | cadmium red | red dominant: `sr - 0.5 sg`; blue dominant: `0.6 sr` |
//! | cadmium yellow | red dominant: `0.9 sg`; green dominant: `0.9 sr` |
//! | aquamarine | green dominant: `sg - 0.5 sr + 0.5 sb`; blue dominant: `0.6 sg` |
//! | white | `min(0.4, Y (1 - 0.6 S))` |

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::color::{Rgb, Rgb8};

/// Upper bound on the white fraction; more than this washes the swatch out
pub const MAX_WHITE: f64 = 0.4;

/// Largest possible RGB distance, sqrt(3 · 255²), rounded as stored in saved matches
pub const MAX_RGB_DISTANCE: f64 = 441.67;

/// Titanium white
pub const WHITE_PIGMENT: Rgb8 = Rgb8::new(255, 255, 255);

/// The five base pigments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pigment {
    Aquamarine,
    BurntUmber,
    CadmiumRed,
    CadmiumYellow,
    UltramarineBlue,
}

impl Pigment {
    pub const ALL: [Pigment; 5] = [
        Pigment::Aquamarine,
        Pigment::BurntUmber,
        Pigment::CadmiumRed,
        Pigment::CadmiumYellow,
        Pigment::UltramarineBlue,
    ];

    /// Swatch color of the pure pigment
    pub const fn rgb8(self) -> Rgb8 {
        match self {
            Pigment::Aquamarine => Rgb8::new(127, 255, 212),
            Pigment::BurntUmber => Rgb8::new(138, 51, 36),
            Pigment::CadmiumRed => Rgb8::new(227, 0, 34),
            Pigment::CadmiumYellow => Rgb8::new(255, 246, 0),
            Pigment::UltramarineBlue => Rgb8::new(18, 10, 143),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Pigment::Aquamarine => "aquamarine",
            Pigment::BurntUmber => "burnt umber",
            Pigment::CadmiumRed => "cadmium red",
            Pigment::CadmiumYellow => "cadmium yellow",
            Pigment::UltramarineBlue => "ultramarine blue",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Proportions of the five base pigments
///
/// Always either normalized to sum to 1.0 or entirely zero (nothing to mix).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BaseMix {
    weights: [f64; 5],
}

impl BaseMix {
    /// Normalize raw weights, indexed in [`Pigment::ALL`] order
    ///
    /// Negative and non-finite weights count as zero.
    pub fn normalize(raw: [f64; 5]) -> Self {
        let weights = raw.map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Self::default();
        }
        Self {
            weights: weights.map(|w| w / total),
        }
    }

    /// Proportion of one pigment
    #[inline]
    pub fn get(&self, pigment: Pigment) -> f64 {
        self.weights[pigment.index()]
    }

    /// All proportions in [`Pigment::ALL`] order
    #[inline]
    pub fn proportions(&self) -> [f64; 5] {
        self.weights
    }

    /// True when no pigment is present
    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    /// Color of the mixed base before any white is added
    ///
    /// An empty base is unpainted canvas and renders white.
    pub fn color(&self) -> Rgb {
        if self.is_empty() {
            return Rgb::from(WHITE_PIGMENT);
        }
        Pigment::ALL
            .iter()
            .fold(Rgb::BLACK, |acc, &p| acc + Rgb::from(p.rgb8()) * self.get(p))
    }
}

/// A full paint recipe: normalized base plus a capped white fraction
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "MixRecord", into = "MixRecord")]
pub struct PigmentMix {
    base: BaseMix,
    white: f64,
}

impl PigmentMix {
    /// Combine a base with a white fraction, clamped to `[0, MAX_WHITE]`
    pub fn new(base: BaseMix, white: f64) -> Self {
        let white = if white.is_finite() {
            white.clamp(0.0, MAX_WHITE)
        } else {
            0.0
        };
        Self { base, white }
    }

    pub fn base(&self) -> &BaseMix {
        &self.base
    }

    pub fn white(&self) -> f64 {
        self.white
    }

    pub fn aquamarine(&self) -> f64 {
        self.base.get(Pigment::Aquamarine)
    }

    pub fn burnt_umber(&self) -> f64 {
        self.base.get(Pigment::BurntUmber)
    }

    pub fn cadmium_red(&self) -> f64 {
        self.base.get(Pigment::CadmiumRed)
    }

    pub fn cadmium_yellow(&self) -> f64 {
        self.base.get(Pigment::CadmiumYellow)
    }

    pub fn ultramarine_blue(&self) -> f64 {
        self.base.get(Pigment::UltramarineBlue)
    }

    /// Render the recipe: mix the base, then blend white on top
    pub fn reconstruct(&self) -> Rgb8 {
        let base = self.base.color();
        base.lerp(&Rgb::from(WHITE_PIGMENT), self.white).to_rgb8()
    }

    /// Hex of the recreated swatch
    pub fn recreated_hex(&self) -> String {
        self.reconstruct().to_hex()
    }

    /// How closely this recipe's swatch matches a target color
    pub fn match_percent_to(&self, target: Rgb8) -> f64 {
        match_percent(target, self.reconstruct())
    }
}

/// Wire shape of a recipe, as stored with saved matches
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MixRecord {
    #[serde(default)]
    aquamarine: f64,
    #[serde(default)]
    burnt_umber: f64,
    #[serde(default)]
    cadmium_red: f64,
    #[serde(default)]
    cadmium_yellow: f64,
    #[serde(default)]
    ultramarine_blue: f64,
    #[serde(default)]
    white: f64,
}

impl From<MixRecord> for PigmentMix {
    fn from(r: MixRecord) -> Self {
        let base = BaseMix::normalize([
            r.aquamarine,
            r.burnt_umber,
            r.cadmium_red,
            r.cadmium_yellow,
            r.ultramarine_blue,
        ]);
        PigmentMix::new(base, r.white)
    }
}

impl From<PigmentMix> for MixRecord {
    fn from(mix: PigmentMix) -> Self {
        Self {
            aquamarine: mix.aquamarine(),
            burnt_umber: mix.burnt_umber(),
            cadmium_red: mix.cadmium_red(),
            cadmium_yellow: mix.cadmium_yellow(),
            ultramarine_blue: mix.ultramarine_blue(),
            white: mix.white,
        }
    }
}

/// Decompose a color into a pigment recipe
pub fn analyze_color(color: Rgb8) -> PigmentMix {
    let rgb = Rgb::from(color);
    let luma = rgb.luma();
    let depth = 1.0 - luma;

    let min = rgb.min_channel();
    let (sr, sg, sb) = (rgb.r - min, rgb.g - min, rgb.b - min);
    let total = rgb.r + rgb.g + rgb.b;
    let blue_share = if total > 0.0 { rgb.b / total } else { 0.0 };

    let mut raw = [0.0; 5];
    raw[Pigment::BurntUmber.index()] = 0.6 * depth;
    raw[Pigment::UltramarineBlue.index()] = 0.8 * blue_share * depth;

    if rgb.r >= rgb.g && rgb.r >= rgb.b {
        raw[Pigment::CadmiumRed.index()] = sr - 0.5 * sg;
        raw[Pigment::CadmiumYellow.index()] = 0.9 * sg;
    } else if rgb.g >= rgb.b {
        raw[Pigment::Aquamarine.index()] = sg - 0.5 * sr + 0.5 * sb;
        raw[Pigment::CadmiumYellow.index()] = 0.9 * sr;
    } else {
        raw[Pigment::UltramarineBlue.index()] += 0.5 * sb;
        raw[Pigment::Aquamarine.index()] = 0.6 * sg;
        raw[Pigment::CadmiumRed.index()] = 0.6 * sr;
    }

    let white = (luma * (1.0 - rgb.saturation() * 0.6)).min(MAX_WHITE);
    PigmentMix::new(BaseMix::normalize(raw), white)
}

/// Decompose a hex color into a pigment recipe
pub fn analyze_mix(hex: &str) -> Result<PigmentMix> {
    Ok(analyze_color(Rgb8::parse(hex)?))
}

/// Render a recipe back to a color
pub fn reconstruct_color(mix: &PigmentMix) -> Rgb8 {
    mix.reconstruct()
}

/// RGB distance scaled to 0 (identical) through 100 (black vs white)
pub fn mix_distance(a: Rgb8, b: Rgb8) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    let distance = (dr * dr + dg * dg + db * db).sqrt();
    (distance / MAX_RGB_DISTANCE * 100.0).min(100.0)
}

/// Similarity percentage, `100 - mix_distance`, never below zero
pub fn match_percent(user: Rgb8, product: Rgb8) -> f64 {
    (100.0 - mix_distance(user, product)).max(0.0)
}

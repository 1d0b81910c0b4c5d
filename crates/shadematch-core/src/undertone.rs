//! Undertone classification
//!
//! Two taxonomies, kept apart:
//!
//! - [`ToneClass`] (cool / neutral / warm) is read off OKLab chroma and
//!   describes the user's sample.
//! - [`ShadeUndertone`] (warm / cool / neutral / olive) is read off a
//!   product's shade name, where brands encode undertone in their naming
//!   (MAC's `NC`/`NW` series, "Golden Beige", "Rose Ivory").
//!
//! They meet only in [`ShadeUndertone::agrees_with`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::color::PerceptualColor;

/// Chroma magnitude both axes must exceed to leave the neutral band
pub const TONE_THRESHOLD: f64 = 0.005;

/// Undertone of a color sample, from OKLab coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneClass {
    Cool,
    Neutral,
    Warm,
}

impl ToneClass {
    /// Classify from the chroma axes; lightness is ignored
    pub fn from_chroma(a: f64, b: f64) -> Self {
        if a > TONE_THRESHOLD && b > TONE_THRESHOLD {
            Self::Warm
        } else if a < -TONE_THRESHOLD && b < -TONE_THRESHOLD {
            Self::Cool
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Neutral => "neutral",
            Self::Warm => "warm",
        }
    }
}

impl fmt::Display for ToneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToneClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cool" => Ok(Self::Cool),
            "neutral" => Ok(Self::Neutral),
            "warm" => Ok(Self::Warm),
            other => Err(Error::InvalidRequest(format!("unknown tone class {other:?}"))),
        }
    }
}

/// Undertone of a catalog shade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeUndertone {
    Warm,
    Cool,
    Neutral,
    Olive,
}

impl ShadeUndertone {
    /// Whether this shade's undertone is the same category as a sample's
    ///
    /// Olive has no counterpart among sample tone classes and never agrees.
    pub fn agrees_with(&self, tone: ToneClass) -> bool {
        matches!(
            (self, tone),
            (Self::Warm, ToneClass::Warm)
                | (Self::Cool, ToneClass::Cool)
                | (Self::Neutral, ToneClass::Neutral)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
            Self::Olive => "olive",
        }
    }
}

impl fmt::Display for ShadeUndertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShadeUndertone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warm" => Ok(Self::Warm),
            "cool" => Ok(Self::Cool),
            "neutral" => Ok(Self::Neutral),
            "olive" => Ok(Self::Olive),
            other => Err(Error::InvalidRequest(format!("unknown undertone {other:?}"))),
        }
    }
}

// MAC-style codes: NC reads warm, NW reads cool
static NC_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)NC\d+").unwrap());
static NW_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)NW\d+").unwrap());

const COOL_WORDS: [&str; 3] = ["cool", "pink", "rose"];
const WARM_WORDS: [&str; 3] = ["warm", "yellow", "golden"];

/// Classify a sample color by its chroma
pub fn classify_color(color: &PerceptualColor) -> ToneClass {
    ToneClass::from_chroma(color.a, color.b)
}

/// Classify a shade from its name
///
/// Rules apply in order: `NC<digits>`, `NW<digits>`, cool keywords, warm
/// keywords, otherwise neutral.
pub fn classify_shade_name(name: &str) -> ShadeUndertone {
    if NC_CODE.is_match(name) {
        return ShadeUndertone::Warm;
    }
    if NW_CODE.is_match(name) {
        return ShadeUndertone::Cool;
    }

    let lower = name.to_lowercase();
    if COOL_WORDS.iter().any(|w| lower.contains(w)) {
        ShadeUndertone::Cool
    } else if WARM_WORDS.iter().any(|w| lower.contains(w)) {
        ShadeUndertone::Warm
    } else {
        ShadeUndertone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chroma_thresholds() {
        assert_eq!(ToneClass::from_chroma(0.02, 0.04), ToneClass::Warm);
        assert_eq!(ToneClass::from_chroma(-0.02, -0.04), ToneClass::Cool);
        // Mixed signs or inside the band stay neutral
        assert_eq!(ToneClass::from_chroma(0.02, -0.04), ToneClass::Neutral);
        assert_eq!(ToneClass::from_chroma(0.004, 0.04), ToneClass::Neutral);
        assert_eq!(ToneClass::from_chroma(0.005, 0.005), ToneClass::Neutral);
        assert_eq!(ToneClass::from_chroma(-0.005, -0.02), ToneClass::Neutral);
    }

    #[test]
    fn test_classify_color_ignores_lightness() {
        let dark = PerceptualColor::new(0.2, 0.03, 0.05);
        let light = PerceptualColor::new(0.9, 0.03, 0.05);
        assert_eq!(classify_color(&dark), classify_color(&light));
        assert_eq!(classify_color(&PerceptualColor::new(0.5, 0.0, 0.0)), ToneClass::Neutral);
    }

    #[test]
    fn test_mac_codes() {
        assert_eq!(classify_shade_name("NC42"), ShadeUndertone::Warm);
        assert_eq!(classify_shade_name("Studio Fix nc15"), ShadeUndertone::Warm);
        assert_eq!(classify_shade_name("NW20"), ShadeUndertone::Cool);
        assert_eq!(classify_shade_name("nw 20"), ShadeUndertone::Neutral);
    }

    #[test]
    fn test_code_takes_precedence_over_keywords() {
        assert_eq!(classify_shade_name("NC30 Rose"), ShadeUndertone::Warm);
        assert_eq!(classify_shade_name("NW30 Golden"), ShadeUndertone::Cool);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(classify_shade_name("Cool Ivory"), ShadeUndertone::Cool);
        assert_eq!(classify_shade_name("Pink Porcelain"), ShadeUndertone::Cool);
        assert_eq!(classify_shade_name("Rose Beige"), ShadeUndertone::Cool);
        assert_eq!(classify_shade_name("Warm Honey"), ShadeUndertone::Warm);
        assert_eq!(classify_shade_name("Yellow Sand"), ShadeUndertone::Warm);
        assert_eq!(classify_shade_name("GOLDEN TAN"), ShadeUndertone::Warm);
        // Cool keywords are checked first
        assert_eq!(classify_shade_name("Warm Rose"), ShadeUndertone::Cool);
    }

    #[test]
    fn test_unmarked_names_are_neutral() {
        assert_eq!(classify_shade_name("Sand"), ShadeUndertone::Neutral);
        assert_eq!(classify_shade_name(""), ShadeUndertone::Neutral);
    }

    #[test]
    fn test_agreement() {
        assert!(ShadeUndertone::Warm.agrees_with(ToneClass::Warm));
        assert!(ShadeUndertone::Neutral.agrees_with(ToneClass::Neutral));
        assert!(!ShadeUndertone::Cool.agrees_with(ToneClass::Warm));
        for tone in [ToneClass::Cool, ToneClass::Neutral, ToneClass::Warm] {
            assert!(!ShadeUndertone::Olive.agrees_with(tone));
        }
    }

    #[test]
    fn test_labels_roundtrip() {
        assert_eq!("Olive".parse::<ShadeUndertone>().unwrap(), ShadeUndertone::Olive);
        assert_eq!(ShadeUndertone::Olive.to_string(), "olive");
        assert_eq!(" WARM ".parse::<ToneClass>().unwrap(), ToneClass::Warm);
        assert!("olive".parse::<ToneClass>().is_err());
    }
}

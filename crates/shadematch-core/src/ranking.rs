//! Distance and ranking engine
//!
//! Scores every catalog shade against a user's sample and picks two lists:
//!
//! 1. **Top matches**: the `n` lowest scores, where
//!    `score = perceptual_distance(adjusted sample, shade) * penalty`.
//! 2. **Perimeter options**: up to three shades moderately darker than the
//!    best match (for contour and bronzer), preferring shades whose undertone
//!    agrees with the sample.
//!
//! The sample is corrected for ambient lighting before distances are taken,
//! but its tone class is read from the *uncorrected* color: undertone is a
//! property of the skin, not of the room.
//!
//! # Undertone penalty
//!
//! In [`PenaltyMode::Literal`] an agreeing undertone multiplies the distance
//! by 1.0 and a disagreeing one by 0.9. Because lower scores rank higher,
//! this *favors* mismatches. The behavior is kept as the default for
//! compatibility with existing saved rankings; [`PenaltyMode::Corrected`]
//! multiplies mismatches by 1.1 instead.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::catalog::CatalogEntry;
use crate::color::PerceptualColor;
use crate::lighting::LightingContext;
use crate::undertone::{ShadeUndertone, ToneClass, classify_color, classify_shade_name};

/// How an undertone (dis)agreement scales a shade's distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltyMode {
    /// Agreement ×1.0, mismatch ×0.9 (mismatches rank closer)
    #[default]
    Literal,
    /// Agreement ×1.0, mismatch ×1.1
    Corrected,
}

impl PenaltyMode {
    /// Multiplier applied to the perceptual distance
    #[inline]
    pub fn factor(self, undertone_agrees: bool) -> f64 {
        match (self, undertone_agrees) {
            (_, true) => 1.0,
            (Self::Literal, false) => 0.9,
            (Self::Corrected, false) => 1.1,
        }
    }
}

/// Lightness window that qualifies a shade as a perimeter option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerimeterWindow {
    /// Smallest accepted `base.L - candidate.L`
    pub min_delta_l: f64,
    /// Largest accepted `base.L - candidate.L`
    pub max_delta_l: f64,
    /// Maximum number of perimeter options returned
    pub max_options: usize,
}

impl Default for PerimeterWindow {
    fn default() -> Self {
        Self {
            min_delta_l: 0.03,
            max_delta_l: 0.12,
            max_options: 3,
        }
    }
}

impl PerimeterWindow {
    /// Whether a candidate is darker than the base by an amount in the window
    #[inline]
    pub fn contains(&self, base_l: f64, candidate_l: f64) -> bool {
        let delta_l = base_l - candidate_l;
        delta_l >= self.min_delta_l && delta_l <= self.max_delta_l
    }
}

/// Tunables for a ranking pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    pub penalty: PenaltyMode,
    pub perimeter: PerimeterWindow,
    /// Catalog size at which scoring runs on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            penalty: PenaltyMode::Literal,
            perimeter: PerimeterWindow::default(),
            parallel_threshold: 4096,
        }
    }
}

/// A scored catalog shade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub entry: CatalogEntry,
    /// Shade color in OKLab (no lighting correction)
    pub perceptual: PerceptualColor,
    /// Distance from the lighting-corrected sample
    pub distance: f64,
    /// Undertone read from the shade name
    pub undertone: ShadeUndertone,
    /// Whether `undertone` agrees with the sample's tone class
    pub undertone_match: bool,
    /// `distance` times the undertone penalty; lower ranks higher
    pub score: f64,
}

/// Output of a ranking pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    /// The sample as converted, before lighting correction
    pub sample: PerceptualColor,
    /// The sample after lighting correction
    pub adjusted: PerceptualColor,
    /// Tone class of the uncorrected sample
    pub sample_tone: ToneClass,
    pub top_matches: Vec<MatchResult>,
    pub perimeter_options: Vec<MatchResult>,
}

impl Ranking {
    /// Best match, if the catalog had any usable shade
    pub fn best(&self) -> Option<&MatchResult> {
        self.top_matches.first()
    }
}

/// Rank a catalog against a hex sample with default options
///
/// Fails only when `user_hex` is malformed. An empty catalog, or one where
/// no row has a usable hex, yields empty lists.
pub fn rank_matches(
    user_hex: &str,
    catalog: &[CatalogEntry],
    lighting: &LightingContext,
    n: usize,
) -> Result<Ranking> {
    rank_matches_with(user_hex, catalog, lighting, n, &RankOptions::default())
}

/// Rank a catalog against a hex sample
pub fn rank_matches_with(
    user_hex: &str,
    catalog: &[CatalogEntry],
    lighting: &LightingContext,
    n: usize,
    options: &RankOptions,
) -> Result<Ranking> {
    let sample = PerceptualColor::from_hex(user_hex)?;
    Ok(rank_color(&sample, catalog, lighting, n, options))
}

/// Rank a catalog against an already converted sample
pub fn rank_color(
    sample: &PerceptualColor,
    catalog: &[CatalogEntry],
    lighting: &LightingContext,
    n: usize,
    options: &RankOptions,
) -> Ranking {
    let adjusted = lighting.apply(sample);
    let sample_tone = classify_color(sample);

    let parallel = catalog.len() >= options.parallel_threshold;
    let score = |entry: &CatalogEntry| score_entry(entry, &adjusted, sample_tone, options.penalty);
    let mut scored: Vec<MatchResult> = if parallel {
        catalog.par_iter().filter_map(score).collect()
    } else {
        catalog.iter().filter_map(score).collect()
    };

    // Stable: equal scores keep catalog order
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));

    tracing::debug!(
        catalog = catalog.len(),
        scored = scored.len(),
        parallel,
        tone = %sample_tone,
        "ranked catalog"
    );

    // The perimeter is anchored on the best returned match, so none without one
    let perimeter_options = match scored.first() {
        Some(base) if n > 0 => select_perimeter(&scored, base.perceptual.l, &options.perimeter),
        _ => Vec::new(),
    };
    scored.truncate(n);

    Ranking {
        sample: *sample,
        adjusted,
        sample_tone,
        top_matches: scored,
        perimeter_options,
    }
}

/// Score one catalog row; `None` when it has no usable hex
pub fn score_entry(
    entry: &CatalogEntry,
    adjusted_sample: &PerceptualColor,
    sample_tone: ToneClass,
    penalty: PenaltyMode,
) -> Option<MatchResult> {
    let Some(hex) = entry.hex.as_deref() else {
        tracing::debug!(
            brand = %entry.brand,
            shade = %entry.shade_name,
            "skipping shade without hex"
        );
        return None;
    };
    let perceptual = match PerceptualColor::from_hex(hex) {
        Ok(color) => color,
        Err(err) => {
            tracing::warn!(brand = %entry.brand, shade = %entry.shade_name, %err, "skipping shade");
            return None;
        }
    };

    let distance = adjusted_sample.distance(&perceptual);
    let undertone = classify_shade_name(entry.shade_label());
    let undertone_match = undertone.agrees_with(sample_tone);

    Some(MatchResult {
        entry: entry.clone(),
        perceptual,
        distance,
        undertone,
        undertone_match,
        score: distance * penalty.factor(undertone_match),
    })
}

/// Pick perimeter options from a scored set
///
/// Keeps candidates darker than `base_l` by an amount inside `window`,
/// orders agreeing undertones first and then by score, and returns at most
/// `window.max_options` of them.
pub fn select_perimeter(
    scored: &[MatchResult],
    base_l: f64,
    window: &PerimeterWindow,
) -> Vec<MatchResult> {
    let mut candidates: Vec<&MatchResult> = scored
        .iter()
        .filter(|m| window.contains(base_l, m.perceptual.l))
        .collect();

    candidates.sort_by(|a, b| {
        b.undertone_match
            .cmp(&a.undertone_match)
            .then_with(|| a.score.total_cmp(&b.score))
    });

    candidates
        .into_iter()
        .take(window.max_options)
        .cloned()
        .collect()
}

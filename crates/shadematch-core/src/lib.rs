//! # shadematch - perceptual foundation shade matching
//!
//! Matches a skin-tone sample against a catalog of foundation shades.
//!
//! ## Pipeline
//!
//! 1. **Convert**: sRGB hex → OKLab ([`color`])
//! 2. **Correct**: shift the sample's chroma for ambient light ([`lighting`])
//! 3. **Classify**: undertone of the sample and of each shade ([`undertone`])
//! 4. **Rank**: distance × undertone penalty, plus darker perimeter options
//!    for contouring ([`ranking`])
//!
//! Separately, [`pigment`] turns a color into a five-pigment-plus-white paint
//! recipe and renders recipes back into swatches.
//!
//! ## Quick Start
//!
//! ```
//! use shadematch_core::{CatalogEntry, LightingContext, rank_matches};
//!
//! let catalog = vec![
//!     CatalogEntry::new("Brand", "Serum Foundation", "Golden 3", "#F1C27D"),
//!     CatalogEntry::new("Brand", "Serum Foundation", "Deep 7", "#8D5524"),
//! ];
//!
//! let lighting = LightingContext::new(4000.0, 80.0).unwrap();
//! let ranking = rank_matches("#EDBE80", &catalog, &lighting, 1).unwrap();
//! assert_eq!(ranking.top_matches[0].entry.shade_name, "Golden 3");
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod lighting;
pub mod math;
pub mod pigment;
pub mod ranking;
pub mod service;
pub mod undertone;

pub use catalog::{CatalogEntry, CatalogSource, JsonFileCatalog};
pub use color::{
    PerceptualColor, Rgb, Rgb8, hex_to_perceptual, perceptual_distance, perceptual_to_rgb,
};
pub use config::MatcherConfig;
pub use error::{Error, Result};
pub use lighting::{LightingContext, adjust_for_lighting};
pub use pigment::{
    BaseMix, Pigment, PigmentMix, analyze_color, analyze_mix, match_percent, mix_distance,
    reconstruct_color,
};
pub use ranking::{
    MatchResult, PenaltyMode, PerimeterWindow, RankOptions, Ranking, rank_color, rank_matches,
    rank_matches_with,
};
pub use service::{MatchRequest, MatchResponse, MatchService};
pub use undertone::{ShadeUndertone, ToneClass, classify_color, classify_shade_name};

/// Version of shadematch
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

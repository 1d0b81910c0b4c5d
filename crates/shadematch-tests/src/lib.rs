//! # shadematch-tests
//!
//! Parity and scenario testing for shadematch.
//!
//! This crate provides:
//! - Parity checks of the OKLab converter against the `palette` crate
//! - Round-trip accuracy statistics
//! - Deterministic color patterns (skin-tone ramps, seeded random colors)
//! - A fixture catalog of foundation shades
//!
//! ## Test Categories
//!
//! 1. **Conversion**: OKLab parity and inverse round-trips
//! 2. **Lighting**: correction properties across CCT/CRI
//! 3. **Ranking**: top matches, perimeter selection, penalty modes
//! 4. **Pigments**: recipe invariants and reconstruction quality
//! 5. **Service**: JSON request/response contract

pub mod accuracy;
pub mod corpus;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaStats, compare_conversions, roundtrip_stats};
pub use corpus::fixture_catalog;
pub use patterns::{ColorPattern, generate_colors};

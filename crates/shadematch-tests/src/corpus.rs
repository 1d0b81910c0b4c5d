//! Fixture catalog
//!
//! A small foundation catalog in the affiliate-feed shape, including the
//! awkward rows real imports produce: a blank shade name with a `specific`
//! fallback, a null hex, and a truncated hex.

use shadematch_core::CatalogEntry;
use shadematch_core::catalog::parse_catalog_json;

/// Raw fixture JSON
pub const FOUNDATIONS_JSON: &str = include_str!("../data/foundations.json");

/// Rows in the fixture with a usable hex
pub const USABLE_ROWS: usize = 15;

/// Parse the fixture catalog
pub fn fixture_catalog() -> Vec<CatalogEntry> {
    parse_catalog_json(FOUNDATIONS_JSON).expect("fixture catalog is valid JSON")
}

/// Look up a fixture row by shade label
pub fn find<'a>(catalog: &'a [CatalogEntry], label: &str) -> Option<&'a CatalogEntry> {
    catalog.iter().find(|e| e.shade_label() == label)
}

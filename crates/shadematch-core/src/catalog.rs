//! Foundation shade catalog
//!
//! Catalog rows come from import jobs and affiliate feeds, so the model is
//! lenient: every field is optional on the wire, field names from the feeds
//! (`name`, `imgSrc`) are accepted as aliases, and the hex is kept as raw
//! text. Rows without a usable hex are skipped at ranking time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Rgb8;
use crate::{Error, Result};

/// A candidate foundation shade
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub product: String,
    #[serde(default, alias = "name")]
    pub shade_name: String,
    #[serde(default)]
    pub hex: Option<String>,
    /// Secondary shade descriptor, used when the shade name is blank
    #[serde(default)]
    pub specific: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "imgSrc", alias = "img")]
    pub image: Option<String>,
}

impl CatalogEntry {
    pub fn new(brand: &str, product: &str, shade_name: &str, hex: &str) -> Self {
        Self {
            brand: brand.to_owned(),
            product: product.to_owned(),
            shade_name: shade_name.to_owned(),
            hex: Some(hex.to_owned()),
            ..Default::default()
        }
    }

    /// Parsed swatch color, `None` when the hex is missing or malformed
    pub fn color(&self) -> Option<Rgb8> {
        self.hex.as_deref().and_then(|hex| Rgb8::parse(hex).ok())
    }

    /// Text used for undertone heuristics: the shade name, or `specific`
    /// when the name is blank
    pub fn shade_label(&self) -> &str {
        if !self.shade_name.trim().is_empty() {
            return &self.shade_name;
        }
        self.specific.as_deref().unwrap_or("")
    }
}

/// A read-only supplier of catalog rows
pub trait CatalogSource: Send + Sync {
    /// Fetch the current catalog
    ///
    /// Failures are reported as [`Error::CatalogUnavailable`].
    fn load(&self) -> Result<Vec<CatalogEntry>>;
}

impl CatalogSource for Vec<CatalogEntry> {
    fn load(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.clone())
    }
}

/// Catalog stored as a JSON array of rows on disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Vec<CatalogEntry>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::CatalogUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        let entries = parse_catalog_json(&text)
            .map_err(|e| Error::CatalogUnavailable(format!("{}: {}", self.path.display(), e)))?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "loaded catalog");
        Ok(entries)
    }
}

/// Parse a JSON array of catalog rows
pub fn parse_catalog_json(text: &str) -> Result<Vec<CatalogEntry>> {
    Ok(serde_json::from_str(text)?)
}

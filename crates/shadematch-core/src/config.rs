//! Matcher configuration
//!
//! Every tunable has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! default_cct_k = 4000.0
//! default_cri = 80.0
//! default_results = 5
//! max_results = 50
//! undertone_penalty = "literal"
//! parallel_threshold = 4096
//!
//! [perimeter]
//! min_delta_l = 0.03
//! max_delta_l = 0.12
//! max_options = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::lighting::LightingContext;
use crate::ranking::{PenaltyMode, PerimeterWindow, RankOptions};
use crate::{Error, Result};

/// Service-level configuration for the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Color temperature assumed when a request omits it
    pub default_cct_k: f64,
    /// Color rendering index assumed when a request omits it
    pub default_cri: f64,
    /// Number of top matches returned when a request omits it
    pub default_results: usize,
    /// Largest `n_results` a request may ask for
    pub max_results: usize,
    pub undertone_penalty: PenaltyMode,
    pub perimeter: PerimeterWindow,
    /// Catalog size at which scoring fans out across threads
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            default_cct_k: 4000.0,
            default_cri: 80.0,
            default_results: 5,
            max_results: 50,
            undertone_penalty: PenaltyMode::Literal,
            perimeter: PerimeterWindow::default(),
            parallel_threshold: 4096,
        }
    }
}

impl MatcherConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded matcher config");
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        LightingContext::new(self.default_cct_k, self.default_cri)
            .map_err(|e| Error::Config(format!("default lighting: {e}")))?;

        if self.max_results == 0 {
            return Err(Error::Config("max_results must be at least 1".into()));
        }
        if self.default_results == 0 || self.default_results > self.max_results {
            return Err(Error::Config(format!(
                "default_results must be within 1..={}",
                self.max_results
            )));
        }

        let window = &self.perimeter;
        if !(window.min_delta_l.is_finite() && window.max_delta_l.is_finite()) {
            return Err(Error::Config("perimeter bounds must be finite".into()));
        }
        if window.min_delta_l < 0.0 || window.max_delta_l < window.min_delta_l {
            return Err(Error::Config(format!(
                "perimeter window [{}, {}] is empty or negative",
                window.min_delta_l, window.max_delta_l
            )));
        }
        Ok(())
    }

    /// Default lighting for requests that omit it
    pub fn default_lighting(&self) -> LightingContext {
        LightingContext {
            cct_k: self.default_cct_k,
            cri: self.default_cri,
        }
    }

    /// Options handed to the ranking engine
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            penalty: self.undertone_penalty,
            perimeter: self.perimeter,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(MatcherConfig::from_toml_str("").unwrap(), MatcherConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = MatcherConfig::from_toml_str(
            r#"
            undertone_penalty = "corrected"
            [perimeter]
            max_options = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.undertone_penalty, PenaltyMode::Corrected);
        assert_eq!(config.perimeter.max_options, 5);
        assert_eq!(config.perimeter.min_delta_l, 0.03);
        assert_eq!(config.default_results, 5);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            MatcherConfig::from_toml_str("colour_space = \"lab\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_window() {
        let err = MatcherConfig::from_toml_str(
            "[perimeter]\nmin_delta_l = 0.2\nmax_delta_l = 0.1\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_bad_result_counts() {
        assert!(MatcherConfig::from_toml_str("max_results = 0").is_err());
        assert!(MatcherConfig::from_toml_str("default_results = 60").is_err());
    }

    #[test]
    fn test_rejects_bad_default_lighting() {
        assert!(MatcherConfig::from_toml_str("default_cri = 140.0").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            MatcherConfig::load("/nonexistent/shadematch.toml"),
            Err(Error::Config(_))
        ));
    }
}

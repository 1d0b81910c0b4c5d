//! Error types for shadematch

use thiserror::Error;

/// Result type for shadematch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shadematch operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Malformed sRGB hex color
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: &'static str },

    /// Lighting parameters outside the accepted range
    #[error("Invalid lighting: {0}")]
    InvalidLighting(String),

    /// Request fields that fail validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Catalog data source could not be read
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Configuration file or value rejected
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON encode/decode failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_hex(input: &str, reason: &'static str) -> Self {
        Self::InvalidHex {
            input: input.to_owned(),
            reason,
        }
    }

    /// Whether the error was caused by the caller's input rather than an
    /// upstream dependency.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidHex { .. }
                | Self::InvalidLighting(_)
                | Self::InvalidRequest(_)
                | Self::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors() {
        assert!(Error::invalid_hex("#zz", "non-hex digit").is_caller_error());
        assert!(Error::InvalidLighting("cri".into()).is_caller_error());
        assert!(!Error::CatalogUnavailable("down".into()).is_caller_error());
        assert!(!Error::Config("bad".into()).is_caller_error());
    }

    #[test]
    fn test_hex_message_names_input() {
        let err = Error::invalid_hex("12345", "expected 3 or 6 hex digits");
        assert_eq!(err.to_string(), "Invalid hex color \"12345\": expected 3 or 6 hex digits");
    }
}

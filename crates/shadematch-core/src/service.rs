//! JSON request/response contract
//!
//! ```json
//! { "user_hex": "#F1C27D", "lighting_cct_k": 4000, "lighting_cri": 80, "n_results": 5 }
//! ```
//!
//! answers with either
//!
//! ```json
//! { "ok": true, "top_matches": [...], "perimeter_options": [...] }
//! { "ok": false, "error": "..." }
//! ```
//!
//! Caller mistakes are echoed back in `error`. Catalog failures are logged
//! and reported with a generic message; retrying is the caller's decision.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSource;
use crate::color::{PerceptualColor, Rgb8};
use crate::config::MatcherConfig;
use crate::lighting::LightingContext;
use crate::ranking::{MatchResult, Ranking, rank_color};
use crate::undertone::ShadeUndertone;
use crate::{Error, Result};

/// Message returned when the catalog source fails
pub const CATALOG_FAILURE_MESSAGE: &str = "catalog unavailable";

/// A match query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub user_hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting_cct_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting_cri: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_results: Option<usize>,
}

impl MatchRequest {
    pub fn new(user_hex: impl Into<String>) -> Self {
        Self {
            user_hex: user_hex.into(),
            lighting_cct_k: None,
            lighting_cri: None,
            n_results: None,
        }
    }
}

/// One shade in a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPayload {
    pub brand: String,
    pub product: String,
    pub shade_name: String,
    pub hex: String,
    pub undertone: ShadeUndertone,
    pub url: Option<String>,
    pub img: Option<String>,
    pub score: f64,
}

impl From<&MatchResult> for MatchPayload {
    fn from(m: &MatchResult) -> Self {
        Self {
            brand: m.entry.brand.clone(),
            product: m.entry.product.clone(),
            shade_name: m.entry.shade_label().to_owned(),
            hex: m.entry.hex.clone().unwrap_or_default(),
            undertone: m.undertone,
            url: m.entry.url.clone(),
            img: m.entry.image.clone(),
            score: m.score,
        }
    }
}

/// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_matches: Option<Vec<MatchPayload>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perimeter_options: Option<Vec<MatchPayload>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            top_matches: None,
            perimeter_options: None,
            error: Some(message.into()),
        }
    }

    /// Failure response for an error, hiding upstream details
    pub fn from_error(err: &Error) -> Self {
        if err.is_caller_error() {
            Self::failure(err.to_string())
        } else {
            Self::failure(CATALOG_FAILURE_MESSAGE)
        }
    }
}

impl From<&Ranking> for MatchResponse {
    fn from(ranking: &Ranking) -> Self {
        Self {
            ok: true,
            top_matches: Some(ranking.top_matches.iter().map(MatchPayload::from).collect()),
            perimeter_options: Some(
                ranking
                    .perimeter_options
                    .iter()
                    .map(MatchPayload::from)
                    .collect(),
            ),
            error: None,
        }
    }
}

/// Request handler over a catalog source
pub struct MatchService<S> {
    config: MatcherConfig,
    source: S,
}

impl<S: CatalogSource> MatchService<S> {
    pub fn new(config: MatcherConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Validate a request, load the catalog and rank it
    pub fn rank(&self, request: &MatchRequest) -> Result<Ranking> {
        let sample = PerceptualColor::from_rgb8(Rgb8::parse(&request.user_hex)?);
        let lighting = LightingContext::new(
            request.lighting_cct_k.unwrap_or(self.config.default_cct_k),
            request.lighting_cri.unwrap_or(self.config.default_cri),
        )?;
        let n = request.n_results.unwrap_or(self.config.default_results);
        if n == 0 || n > self.config.max_results {
            return Err(Error::InvalidRequest(format!(
                "n_results must be within 1..={}, got {n}",
                self.config.max_results
            )));
        }

        let catalog = self.source.load()?;
        Ok(rank_color(
            &sample,
            &catalog,
            &lighting,
            n,
            &self.config.rank_options(),
        ))
    }

    /// Answer a request; never fails, errors become `ok: false`
    pub fn handle(&self, request: &MatchRequest) -> MatchResponse {
        match self.rank(request) {
            Ok(ranking) => MatchResponse::from(&ranking),
            Err(err) => {
                if err.is_caller_error() {
                    tracing::info!(%err, user_hex = %request.user_hex, "rejected match request");
                } else {
                    tracing::error!(%err, "match request failed");
                }
                MatchResponse::from_error(&err)
            }
        }
    }

    /// Answer a JSON request body; a body that does not decode is a caller error
    pub fn handle_body(&self, body: &str) -> MatchResponse {
        match serde_json::from_str::<MatchRequest>(body) {
            Ok(request) => self.handle(&request),
            Err(err) => {
                tracing::info!(%err, "rejected malformed request body");
                MatchResponse::from_error(&Error::Json(err))
            }
        }
    }

    /// Answer a JSON request body with a JSON response body
    pub fn handle_json(&self, body: &str) -> String {
        encode_response(&self.handle_body(body))
    }
}

/// Serialize a response, degrading to a fixed failure body
pub fn encode_response(response: &MatchResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|err| {
        tracing::error!(%err, "failed to encode response");
        r#"{"ok":false,"error":"internal error"}"#.to_owned()
    })
}

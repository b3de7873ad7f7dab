use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TokTabError};
use crate::model::{ModelRecord, SearchHit, SearchResults, CAPABILITY_FLAGS};

const TOKTAB_API: &str = "https://toktab.com/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Hard cap the search endpoint enforces on `limit`.
pub const MAX_SEARCH_LIMIT: u32 = 50;

pub struct TokTabClient {
    http: Client,
    base_url: String,
}

impl TokTabClient {
    pub fn new() -> Self {
        Self::with_base_url(TOKTAB_API)
    }

    /// Honor `$TOKTAB_BASE_URL` so tests can point at a mock server.
    pub fn from_env() -> Self {
        match std::env::var("TOKTAB_BASE_URL") {
            Ok(base) if !base.is_empty() => Self::with_base_url(base),
            _ => Self::new(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::builder()
                .timeout(timeout)
                .build()
                .expect("failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch the pricing record for a single model slug.
    pub async fn model(&self, slug: &str) -> Result<Value> {
        let url = format!("{}/{slug}/", self.base_url);
        debug!(%url, "fetching model record");
        let resp = self.http.get(&url).send().await.map_err(transport)?;
        let status = resp.status().as_u16();
        if status == 404 {
            return Err(TokTabError::ModelNotFound(slug.to_string()));
        }
        if !resp.status().is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TokTabError::Api { status, message });
        }
        resp.json().await.map_err(transport)
    }

    /// Search models by name or provider. `limit` is clamped to the server cap.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Value> {
        let limit = limit.min(MAX_SEARCH_LIMIT);
        let url = format!(
            "{}/search?q={}&limit={limit}",
            self.base_url,
            urlencoding::encode(query),
        );
        debug!(%url, "searching models");
        let resp = self.http.get(&url).send().await.map_err(transport)?;
        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            if status == 400 {
                return Err(TokTabError::Api {
                    status,
                    message: "invalid search query".to_string(),
                });
            }
            let message = resp.text().await.unwrap_or_default();
            return Err(TokTabError::Api { status, message });
        }
        resp.json().await.map_err(transport)
    }
}

impl Default for TokTabClient {
    fn default() -> Self {
        Self::new()
    }
}

fn transport(err: reqwest::Error) -> TokTabError {
    if err.is_timeout() {
        TokTabError::Timeout
    } else {
        TokTabError::Http(err)
    }
}

/// Parse a raw catalog payload into a [`ModelRecord`].
/// Returns `None` when the record has neither a display name nor a slug.
pub fn parse_model(data: &Value) -> Option<ModelRecord> {
    let name = data
        .get("litellm_model_name")
        .and_then(|v| v.as_str())
        .or_else(|| data.get("slug").and_then(|v| v.as_str()))?
        .to_string();
    let provider = data
        .get("litellm_provider")
        .and_then(|v| v.as_str())
        .map(String::from);

    let capabilities = CAPABILITY_FLAGS
        .iter()
        .filter(|(field, _)| data.get(*field).and_then(|v| v.as_bool()).unwrap_or(false))
        .map(|&(_, cap)| cap)
        .collect();

    Some(ModelRecord {
        name,
        provider,
        input_cost_per_token: data.get("input_cost_per_token").and_then(|v| v.as_f64()),
        output_cost_per_token: data.get("output_cost_per_token").and_then(|v| v.as_f64()),
        cache_read_cost_per_token: data
            .get("cache_read_input_token_cost")
            .and_then(|v| v.as_f64()),
        cache_write_cost_per_token: data
            .get("cache_creation_input_token_cost")
            .and_then(|v| v.as_f64()),
        max_input_tokens: data.get("max_input_tokens").and_then(|v| v.as_u64()),
        max_output_tokens: data.get("max_output_tokens").and_then(|v| v.as_u64()),
        max_total_tokens: data.get("max_tokens").and_then(|v| v.as_u64()),
        capabilities,
    })
}

/// Parse a raw search response into [`SearchResults`].
/// Rows without a slug or name are skipped; `count` falls back to the row count.
pub fn parse_search(data: &Value) -> SearchResults {
    let hits: Vec<SearchHit> = data
        .get("results")
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(parse_hit).collect())
        .unwrap_or_default();
    let count = data
        .get("count")
        .and_then(|v| v.as_u64())
        .unwrap_or(hits.len() as u64);
    let query = data
        .get("query")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    SearchResults { query, count, hits }
}

fn parse_hit(data: &Value) -> Option<SearchHit> {
    let slug = data
        .get("slug")
        .and_then(|v| v.as_str())
        .or_else(|| data.get("name").and_then(|v| v.as_str()))?
        .to_string();

    Some(SearchHit {
        slug,
        provider: data
            .get("provider")
            .and_then(|v| v.as_str())
            .map(String::from),
        input_cost_per_token: data.get("input_cost_per_token").and_then(|v| v.as_f64()),
        output_cost_per_token: data.get("output_cost_per_token").and_then(|v| v.as_f64()),
    })
}

//! Wire types for the search backend's request and response payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Search request posted to `/api/search`.
///
/// Optional fields are omitted from the JSON body entirely so the backend
/// applies its own defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// User's search phrase
    pub query: String,
    /// Budget cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    /// Source sites to restrict the search to (None = all sites)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sites: Option<Vec<String>>,
    /// Requested result count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    /// Hint to bias category classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_hint: Option<String>,
}

impl SearchRequest {
    /// Creates a request with only the query set.
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), max_price: None, sites: None, k: None, category_hint: None }
    }

    /// Sets the budget cap.
    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Restricts the search to the given source sites.
    pub fn with_sites(mut self, sites: Vec<String>) -> Self {
        self.sites = Some(sites);
        self
    }

    /// Sets the requested result count.
    pub fn with_k(mut self, k: u32) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets the category hint.
    pub fn with_category_hint(mut self, hint: impl Into<String>) -> Self {
        self.category_hint = Some(hint.into());
        self
    }
}

/// One search result, shaped for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIProduct {
    /// Display title
    pub name: String,
    /// Price text; sanitized to `[0-9.]*` after the client returns
    #[serde(deserialize_with = "price_text")]
    pub price: String,
    /// Star rating (0.0 - 5.0)
    pub rating: Option<f32>,
    /// Short human-readable attribute lines
    #[serde(default)]
    pub specifications: Vec<String>,
    /// URL of the product listing
    pub link: String,
    /// Product image URL
    pub image: Option<String>,
    /// Identifier of the originating site
    pub source: String,
    /// Number of reviews
    #[serde(rename = "reviewCount")]
    pub review_count: Option<u32>,
    /// Original title before backend cleanup
    #[serde(rename = "rawTitle")]
    pub raw_title: Option<String>,
    /// Classification label
    pub category: Option<String>,
}

/// Response envelope from `/api/search`.
///
/// Every field defaults when missing, so a body without `results` decodes to
/// an empty list rather than an error. `debug` and `top_k` are opaque to the
/// client and pass through exactly as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked results; order is significant and preserved
    #[serde(default)]
    pub results: Vec<UIProduct>,
    /// Free-text summary of the result set
    #[serde(default)]
    pub summary: String,
    /// Diagnostic key/value pairs, not interpreted
    #[serde(default)]
    pub debug: serde_json::Map<String, Value>,
    /// Internal ranking objects, not interpreted
    #[serde(default)]
    pub top_k: Vec<Value>,
}

impl SearchResponse {
    /// Returns the number of results.
    pub fn count(&self) -> usize {
        self.results.len()
    }

    /// Returns true if no results were returned.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Accepts the price as either a JSON string or a bare number; the backend
/// formats prices as text, but a raw number must not fail the decode.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

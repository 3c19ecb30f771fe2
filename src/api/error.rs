//! Error types for the search API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single search call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connection, timeout), propagated from the
    /// transport untranslated.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. The message is the response body when readable and
    /// non-empty, else the status reason phrase, else `HTTP <code>`.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Response body was not a valid search response.
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds the status error for a failed response, applying the
    /// body-text-first fallback chain.
    pub(crate) fn from_status(status: StatusCode, body: Option<String>) -> Self {
        let message = body.filter(|text| !text.trim().is_empty()).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        });

        ApiError::Status { status, message }
    }
}

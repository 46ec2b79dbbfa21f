//! Single-shot quote fetcher.
//!
//! One GET per call, no cache, no retry. Failures come back as
//! [`FetchError`]; the feed decides how to log and absorb them.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::http_client::{HttpClient, HttpRequest};
use crate::Symbol;

/// Why a fetch produced no payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {message}")]
    Transport { message: String, timed_out: bool },

    #[error("upstream returned status {status}")]
    Status { status: u16 },

    #[error("upstream body is not valid JSON: {message}")]
    Decode { message: String },
}

impl FetchError {
    pub const fn timed_out(&self) -> bool {
        matches!(self, Self::Transport { timed_out: true, .. })
    }
}

#[derive(Clone)]
pub struct QuoteFetcher {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: Option<u64>,
}

impl QuoteFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            timeout_ms: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// GET `endpoint_url` and parse the body as JSON.
    ///
    /// `symbol` is only used for log context; the caller has already embedded
    /// it in the URL.
    pub async fn fetch(&self, endpoint_url: &str, symbol: &Symbol) -> Result<Value, FetchError> {
        log::debug!("fetching {symbol} quote from {endpoint_url}");

        let request = HttpRequest::get(endpoint_url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response =
            self.http_client
                .execute(request)
                .await
                .map_err(|error| FetchError::Transport {
                    message: error.message().to_owned(),
                    timed_out: error.timed_out(),
                })?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|error| FetchError::Decode {
            message: error.to_string(),
        })
    }
}

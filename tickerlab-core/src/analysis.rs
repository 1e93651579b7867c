//! Analysis backend client — one POST per summary request.
//!
//! The backend runs the actual simulation; this side only carries the
//! ticker over and maps whatever comes back into a summary or one of
//! three failure classes. Failures are values, not panics: every error is
//! converted into a `Failed` display state at the fetcher boundary and
//! nothing propagates further. No retry is attempted; only a new
//! selection re-arms the fetcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ClientConfig, TimeoutPolicy};
use crate::summary::TickerSummary;

/// Request body for the summary endpoint.
#[derive(Debug, Serialize)]
struct SummaryRequestBody<'a> {
    ticker: &'a str,
}

/// Optional error detail the backend attaches to failure statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Health endpoint response.
#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

/// Failure classes for the analysis collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The request could not be sent or no response was received.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived with a non-success status.
    #[error("analysis backend returned HTTP {status}")]
    Http { status: u16, detail: Option<String> },

    /// The response body could not be parsed as a summary.
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// The short message shown in place of the summary panel:
    /// server-supplied detail if present, else a status-derived line,
    /// else a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Transport(_) => "could not reach the analysis backend".into(),
            AnalysisError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            AnalysisError::Http { status, .. } => format!("request failed with status {status}"),
            AnalysisError::MalformedResponse(_) => "unknown error occurred".into(),
        }
    }
}

/// Blocking HTTP client for the analysis backend.
pub struct AnalysisClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>, timeout: TimeoutPolicy) -> Self {
        let mut builder = reqwest::blocking::Client::builder();
        if let TimeoutPolicy::Fixed(duration) = timeout {
            builder = builder.timeout(duration);
        }
        let client = builder.build().expect("failed to build HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.analysis_base_url.clone(), config.timeout())
    }

    /// Fetch the financial summary for one ticker.
    ///
    /// The ticker is trimmed and uppercased before it goes on the wire;
    /// case-insensitivity at this boundary is the client's job, not the
    /// server's. Exactly one request is issued per call.
    pub fn fetch_summary(&self, ticker: &str) -> Result<TickerSummary, AnalysisError> {
        let ticker = ticker.trim().to_uppercase();
        let url = format!("{}/api/get_ticker_data", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&SummaryRequestBody { ticker: &ticker })
            .send()
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.json::<ErrorBody>().ok().and_then(|body| body.detail);
            return Err(AnalysisError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        resp.json::<TickerSummary>()
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
    }

    /// Probe the backend's health endpoint. Returns the reported status
    /// string (normally `"healthy"`).
    pub fn health_check(&self) -> Result<String, AnalysisError> {
        let url = format!("{}/api/health", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.json::<ErrorBody>().ok().and_then(|body| body.detail);
            return Err(AnalysisError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        resp.json::<HealthBody>()
            .map(|body| body.status)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_detail() {
        let err = AnalysisError::Http {
            status: 500,
            detail: Some("no data".into()),
        };
        assert_eq!(err.user_message(), "no data");
    }

    #[test]
    fn user_message_falls_back_to_status() {
        let err = AnalysisError::Http {
            status: 502,
            detail: None,
        };
        assert_eq!(err.user_message(), "request failed with status 502");
    }

    #[test]
    fn user_message_for_malformed_is_generic_and_non_empty() {
        let err = AnalysisError::MalformedResponse("expected value at line 1".into());
        assert_eq!(err.user_message(), "unknown error occurred");
    }

    #[test]
    fn user_message_for_transport_is_generic() {
        let err = AnalysisError::Transport("connection refused".into());
        assert!(!err.user_message().is_empty());
        assert!(!err.user_message().contains("connection refused"));
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = AnalysisClient::new("http://localhost:8000/", TimeoutPolicy::None);
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}

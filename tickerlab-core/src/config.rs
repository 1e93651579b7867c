//! Client configuration — collaborator endpoints and timeout policy.
//!
//! Stored as a TOML file under the user config directory. Every field has
//! a default so a missing or partial file still yields a usable config.
//! The speech API key itself is never stored here; only the name of the
//! environment variable that holds it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// How long to wait for a collaborator before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutPolicy {
    /// Wait indefinitely.
    None,
    /// Fail with a transport error after the given duration.
    Fixed(Duration),
}

impl TimeoutPolicy {
    /// Zero seconds means no timeout.
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            TimeoutPolicy::None
        } else {
            TimeoutPolicy::Fixed(Duration::from_secs(secs))
        }
    }
}

/// Endpoints and knobs for both HTTP collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the analysis backend.
    pub analysis_base_url: String,
    /// Request timeout in seconds; 0 waits indefinitely.
    pub timeout_secs: u64,
    /// Speech synthesis endpoint.
    pub speech_endpoint: String,
    /// Voice identifier sent with speech requests.
    pub speech_voice: String,
    /// Environment variable holding the speech API key.
    pub speech_api_key_env: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            analysis_base_url: "http://localhost:8000".into(),
            timeout_secs: 30,
            speech_endpoint: "https://api.murf.ai/v1/speech/generate".into(),
            speech_voice: "en-US-natalie".into(),
            speech_api_key_env: "MURF_API_KEY".into(),
        }
    }
}

impl ClientConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse client config TOML: {e}"))
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read client config: {e}"))?;
        Self::from_toml(&content)
    }

    /// Load from a file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::from_file(path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    pub fn timeout(&self) -> TimeoutPolicy {
        TimeoutPolicy::from_secs(self.timeout_secs)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize client config: {e}"))
    }
}

//! Speech synthesis client — text in, audio URL out.
//!
//! Opaque third-party collaborator: one POST with an `api-key` header and
//! a camelCase JSON body, one `audioFile` URL back. Nothing beyond that
//! contract is modeled.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ClientConfig, TimeoutPolicy};

/// Default narration text for the About screen and the `speak` command.
pub const PRODUCT_BLURB: &str = "TickerLab is an innovative stock analysis dashboard that \
leverages advanced AI algorithms to provide real-time insights and predictions. Our mission \
is to empower traders with the tools they need to make informed decisions and maximize their \
trading potential.\n\nWith TickerLab, you can access a wide range of features including \
personalized stock recommendations, market analysis, and portfolio management tools. Whether \
you're a seasoned trader or just starting out, TickerLab is designed to help you succeed in \
the stock market.\n\nJoin our community of traders and experience the future of stock \
analysis today!";

/// One synthesis request. Field names follow the provider's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub voice_id: String,
    pub text: String,
    /// Audio container: wav, mp3, flac, alaw, ulaw.
    pub format: String,
    /// 8000, 24000, 44100, or 48000.
    pub sample_rate: u32,
    /// mono or stereo.
    pub channel_type: String,
}

impl SpeechRequest {
    /// Request with the provider defaults the dashboard uses.
    pub fn new(voice_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            text: text.into(),
            format: "wav".into(),
            sample_rate: 24_000,
            channel_type: "stereo".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpeechResponse {
    audio_file: Option<String>,
}

/// Failure payloads vary; the provider uses `message`, some gateways `error`.
#[derive(Debug, Deserialize)]
struct SpeechErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Failure classes for the speech collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    /// No API key in the configured environment variable.
    #[error("speech API key is not configured (set {0})")]
    MissingApiKey(String),

    /// The request could not be sent or no response was received.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived with a non-success status.
    #[error("speech backend returned HTTP {status}")]
    Http { status: u16, detail: Option<String> },

    /// The response body had no usable audio URL.
    #[error("malformed speech response: {0}")]
    MalformedResponse(String),
}

impl SpeechError {
    /// Short display message, same derivation rules as the analysis side.
    pub fn user_message(&self) -> String {
        match self {
            SpeechError::MissingApiKey(var) => {
                format!("speech API key is not configured (set {var})")
            }
            SpeechError::Transport(_) => "could not reach the speech backend".into(),
            SpeechError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            SpeechError::Http { status, .. } => format!("request failed with status {status}"),
            SpeechError::MalformedResponse(_) => "unknown error occurred".into(),
        }
    }
}

/// Blocking HTTP client for the speech backend.
pub struct SpeechClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl SpeechClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: TimeoutPolicy,
    ) -> Self {
        let mut builder = reqwest::blocking::Client::builder();
        if let TimeoutPolicy::Fixed(duration) = timeout {
            builder = builder.timeout(duration);
        }
        let client = builder.build().expect("failed to build HTTP client");
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from config, reading the API key from the
    /// configured environment variable. Fails fast before any request if
    /// the key is missing or empty.
    pub fn from_config(config: &ClientConfig) -> Result<Self, SpeechError> {
        let api_key = std::env::var(&config.speech_api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SpeechError::MissingApiKey(config.speech_api_key_env.clone()))?;
        Ok(Self::new(
            config.speech_endpoint.clone(),
            api_key,
            config.timeout(),
        ))
    }

    /// Synthesize speech; returns the URL of the generated audio asset.
    pub fn synthesize(&self, request: &SpeechRequest) -> Result<String, SpeechError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .map_err(|e| SpeechError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .json::<SpeechErrorBody>()
                .ok()
                .and_then(|body| body.message.or(body.error));
            return Err(SpeechError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SpeechResponse = resp
            .json()
            .map_err(|e| SpeechError::MalformedResponse(e.to_string()))?;
        body.audio_file
            .ok_or_else(|| SpeechError::MalformedResponse("no audio file in response".into()))
    }
}

//! HTTP integration tests for both collaborator clients, against mockito.
//!
//! Each test runs its own mock server, so the exact wire behavior —
//! uppercased ticker in the POST body, api-key header, error detail
//! extraction — is asserted end to end without a live backend.

use mockito::Matcher;
use serde_json::json;

use tickerlab_core::analysis::{AnalysisClient, AnalysisError};
use tickerlab_core::config::TimeoutPolicy;
use tickerlab_core::speech::{SpeechClient, SpeechError, SpeechRequest};

const SUMMARY_BODY: &str = r#"{
    "ticker": "MSFT",
    "market_return": 0.08,
    "portfolio_return": 0.12,
    "initial_balance": 10000.0,
    "final_balance": 11200.0,
    "total_episodes": 1,
    "data_points": 2500,
    "start_date": "2015-01-02",
    "end_date": "2025-01-02",
    "performance_metrics": {"sharpe_ratio": 1.31, "volatility": 0.2219, "total_steps": 2499}
}"#;

fn fixed_timeout() -> TimeoutPolicy {
    TimeoutPolicy::from_secs(5)
}

#[test]
fn summary_request_uppercases_ticker_and_parses_payload() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/get_ticker_data")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"ticker": "MSFT"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SUMMARY_BODY)
        .create();

    let client = AnalysisClient::new(server.url(), fixed_timeout());
    // Lowercase in, uppercase on the wire.
    let summary = client.fetch_summary("msft").unwrap();

    mock.assert();
    assert_eq!(summary.ticker, "MSFT");
    assert_eq!(summary.market_return, 0.08);
    assert_eq!(summary.final_balance, 11_200.0);
    assert_eq!(summary.performance_metrics.len(), 3);
    assert_eq!(summary.performance_metrics["sharpe_ratio"], 1.31);
}

#[test]
fn summary_without_metrics_defaults_to_empty_map() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/get_ticker_data")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ticker": "AAPL",
                "market_return": 0.05,
                "portfolio_return": 0.02,
                "initial_balance": 10000.0,
                "final_balance": 10200.0,
                "total_episodes": 1,
                "data_points": 1200,
                "start_date": "2020-01-02",
                "end_date": "2025-01-02"
            }"#,
        )
        .create();

    let client = AnalysisClient::new(server.url(), fixed_timeout());
    let summary = client.fetch_summary("AAPL").unwrap();
    assert!(summary.performance_metrics.is_empty());
}

#[test]
fn failure_status_with_detail_surfaces_the_detail() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/get_ticker_data")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "no data"}"#)
        .create();

    let client = AnalysisClient::new(server.url(), fixed_timeout());
    let err = client.fetch_summary("AAPL").unwrap_err();

    assert_eq!(
        err,
        AnalysisError::Http {
            status: 500,
            detail: Some("no data".into()),
        }
    );
    assert_eq!(err.user_message(), "no data");
}

#[test]
fn failure_status_without_detail_derives_message_from_status() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/get_ticker_data")
        .with_status(502)
        .with_body("bad gateway")
        .create();

    let client = AnalysisClient::new(server.url(), fixed_timeout());
    let err = client.fetch_summary("AAPL").unwrap_err();

    assert_eq!(
        err,
        AnalysisError::Http {
            status: 502,
            detail: None,
        }
    );
    assert_eq!(err.user_message(), "request failed with status 502");
}

#[test]
fn unparsable_success_body_is_malformed_response() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/get_ticker_data")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<!doctype html><html>not json</html>")
        .create();

    let client = AnalysisClient::new(server.url(), fixed_timeout());
    let err = client.fetch_summary("AAPL").unwrap_err();

    assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    assert!(!err.user_message().is_empty());
}

#[test]
fn unreachable_backend_is_transport_error() {
    // Port 9 (discard) should refuse the connection outright.
    let client = AnalysisClient::new("http://127.0.0.1:9", fixed_timeout());
    let err = client.fetch_summary("AAPL").unwrap_err();
    assert!(matches!(err, AnalysisError::Transport(_)));
}

#[test]
fn health_check_reports_backend_status() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "healthy", "message": "Trading API is running"}"#)
        .create();

    let client = AnalysisClient::new(server.url(), fixed_timeout());
    assert_eq!(client.health_check().unwrap(), "healthy");
}

#[test]
fn speech_request_sends_api_key_and_returns_audio_url() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/speech/generate")
        .match_header("api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "voiceId": "en-US-natalie",
            "sampleRate": 24000,
            "channelType": "stereo",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"audioFile": "https://cdn.example.com/audio/abc123.wav"}"#)
        .create();

    let endpoint = format!("{}/v1/speech/generate", server.url());
    let client = SpeechClient::new(endpoint, "test-key", fixed_timeout());
    let url = client
        .synthesize(&SpeechRequest::new("en-US-natalie", "hello world"))
        .unwrap();

    mock.assert();
    assert_eq!(url, "https://cdn.example.com/audio/abc123.wav");
}

#[test]
fn speech_failure_surfaces_provider_message() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/v1/speech/generate")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "invalid api key"}"#)
        .create();

    let endpoint = format!("{}/v1/speech/generate", server.url());
    let client = SpeechClient::new(endpoint, "bad-key", fixed_timeout());
    let err = client
        .synthesize(&SpeechRequest::new("en-US-natalie", "hello"))
        .unwrap_err();

    assert_eq!(
        err,
        SpeechError::Http {
            status: 401,
            detail: Some("invalid api key".into()),
        }
    );
    assert_eq!(err.user_message(), "invalid api key");
}

#[test]
fn speech_success_without_audio_url_is_malformed() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/v1/speech/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "queued"}"#)
        .create();

    let endpoint = format!("{}/v1/speech/generate", server.url());
    let client = SpeechClient::new(endpoint, "test-key", fixed_timeout());
    let err = client
        .synthesize(&SpeechRequest::new("en-US-natalie", "hello"))
        .unwrap_err();

    assert!(matches!(err, SpeechError::MalformedResponse(_)));
}

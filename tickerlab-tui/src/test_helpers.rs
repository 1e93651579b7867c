//! Test helpers for creating app state with loose channel ends.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tickerlab_core::config::ClientConfig;
use tickerlab_core::summary::TickerSummary;

use crate::app::AppState;
use crate::worker::{WorkerCommand, WorkerResponse};

/// App wired to channel ends the test holds, so commands sent by input
/// handlers can be inspected and worker responses injected.
pub fn test_app() -> (AppState, Receiver<WorkerCommand>, Sender<WorkerResponse>) {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let app = AppState::new(cmd_tx, resp_rx, ClientConfig::default(), PathBuf::from("."));
    (app, cmd_rx, resp_tx)
}

pub fn sample_summary(ticker: &str) -> TickerSummary {
    TickerSummary {
        ticker: ticker.to_string(),
        market_return: 0.08,
        portfolio_return: 0.12,
        initial_balance: 10_000.0,
        final_balance: 11_200.0,
        total_episodes: 1,
        data_points: 2500,
        start_date: "2015-01-02".into(),
        end_date: "2025-01-02".into(),
        performance_metrics: Default::default(),
    }
}

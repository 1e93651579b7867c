//! Background worker thread — all blocking HTTP runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The
//! worker processes commands serially, so at most one request is in
//! flight at a time; a newer selection queues behind the current request
//! and the response token decides which outcome is actually displayed.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use tickerlab_core::analysis::{AnalysisClient, AnalysisError};
use tickerlab_core::config::ClientConfig;
use tickerlab_core::speech::{SpeechClient, SpeechError, SpeechRequest};
use tickerlab_core::summary::{RequestToken, TickerSummary};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchSummary {
        ticker: String,
        token: RequestToken,
    },
    Synthesize {
        request: SpeechRequest,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    SummaryReady {
        ticker: String,
        token: RequestToken,
        outcome: Result<TickerSummary, AnalysisError>,
    },
    SpeechReady {
        outcome: Result<String, SpeechError>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    config: ClientConfig,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("tickerlab-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, config);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, config: ClientConfig) {
    let analysis = AnalysisClient::from_config(&config);

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(cmd) => handle_command(cmd, &tx, &analysis, &config),
        }
    }
}

fn handle_command(
    cmd: WorkerCommand,
    tx: &Sender<WorkerResponse>,
    analysis: &AnalysisClient,
    config: &ClientConfig,
) {
    match cmd {
        WorkerCommand::FetchSummary { ticker, token } => {
            let outcome = analysis.fetch_summary(&ticker);
            let _ = tx.send(WorkerResponse::SummaryReady {
                ticker,
                token,
                outcome,
            });
        }
        WorkerCommand::Synthesize { request } => {
            // The client is built per request so a key exported after
            // startup is picked up without a restart.
            let outcome =
                SpeechClient::from_config(config).and_then(|client| client.synthesize(&request));
            let _ = tx.send(WorkerResponse::SpeechReady { outcome });
        }
        WorkerCommand::Shutdown => {} // handled in loop
    }
}

//! TickerLab TUI — terminal dashboard for ticker search and AI-backed
//! financial summaries.
//!
//! Screens:
//! 1. Dashboard — catalog search, ticker list, summary panel
//! 2. Account — static profile card
//! 3. About — product blurb with text-to-speech
//! 4. Help — keyboard reference and error history

mod app;
mod input;
mod persistence;
mod theme;
mod ui;
mod worker;

#[cfg(test)]
mod test_helpers;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tickerlab_core::config::ClientConfig;

use crate::app::{AppState, ErrorCategory, SpeechStatus};
use crate::worker::{WorkerCommand, WorkerResponse};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickerlab");
    let config = ClientConfig::load_or_default(&config_dir.join("config.toml"));
    let state_path = config_dir.join("state.json");

    // Load persisted state
    let persisted = persistence::load(&state_path);

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    // Spawn worker
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, config.clone());

    // Build app state
    let mut app = AppState::new(cmd_tx.clone(), resp_rx, config, state_path.clone());

    // Apply persisted state
    persistence::apply(&mut app, persisted);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::SummaryReady {
            ticker,
            token,
            outcome,
        } => {
            let failure = outcome.as_ref().err().map(|e| e.user_message());
            // A stale token means the user already selected something newer;
            // the outcome is dropped on the floor.
            if app.dashboard.summary.resolve(token, outcome) {
                match failure {
                    Some(message) => {
                        app.push_error(ErrorCategory::Analysis, message, ticker);
                    }
                    None => app.set_status(format!("Summary ready for {ticker}")),
                }
            }
        }
        WorkerResponse::SpeechReady { outcome } => match outcome {
            Ok(audio_url) => {
                app.about.speech = SpeechStatus::Ready { audio_url };
                app.set_status("Audio generated");
            }
            Err(err) => {
                let message = err.user_message();
                app.about.speech = SpeechStatus::Failed {
                    message: message.clone(),
                };
                app.push_error(ErrorCategory::Speech, message, "text to speech".into());
            }
        },
    }
}

//! Keyboard input dispatch — overlays → global keys → screen handlers.
//!
//! The Dashboard owns the keyboard while active: printable characters go
//! to the search box, so quit and screen-jump shortcuts live on Ctrl+C,
//! Tab, and the other screens' digit keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tickerlab_core::speech::{SpeechRequest, PRODUCT_BLURB};

use crate::app::{AppState, Overlay, Screen, SpeechStatus};
use crate::worker::WorkerCommand;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }
    match key.code {
        KeyCode::Tab => {
            app.active_screen = app.active_screen.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_screen = app.active_screen.prev();
            return;
        }
        _ => {}
    }

    // 3. Screen-specific keys.
    match app.active_screen {
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::Account => handle_nav_key(app, key),
        Screen::About => handle_about_key(app, key),
        Screen::Help => handle_help_key(app, key),
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

/// Quit and screen-jump keys, shared by every screen without a text box.
fn handle_nav_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('1') => app.active_screen = Screen::Dashboard,
        KeyCode::Char('2') => app.active_screen = Screen::Account,
        KeyCode::Char('3') => app.active_screen = Screen::About,
        KeyCode::Char('4') => app.active_screen = Screen::Help,
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.dashboard.search_input.clear();
            app.dashboard.clamp_cursor();
        }
        KeyCode::Backspace => {
            app.dashboard.search_input.pop();
            app.dashboard.clamp_cursor();
        }
        KeyCode::Down => {
            let count = app.dashboard.filtered().len();
            if count > 0 && app.dashboard.cursor + 1 < count {
                app.dashboard.cursor += 1;
            }
        }
        KeyCode::Up => {
            app.dashboard.cursor = app.dashboard.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            request_summary(app);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dashboard.search_input.push(c);
            app.dashboard.clamp_cursor();
        }
        _ => {}
    }
}

/// Kick off a summary fetch for the record under the cursor. Transitions
/// the state machine to Loading before the worker ever sees the command.
fn request_summary(app: &mut AppState) {
    let ticker = app
        .dashboard
        .selected_record()
        .and_then(|record| record.symbol.clone())
        .map(|symbol| symbol.trim().to_uppercase())
        .filter(|symbol| !symbol.is_empty());

    let Some(ticker) = ticker else {
        app.set_warning("Selected entry has no ticker symbol");
        return;
    };

    let token = app.dashboard.summary.begin(&ticker);
    let _ = app.worker_tx.send(WorkerCommand::FetchSummary {
        ticker: ticker.clone(),
        token,
    });
    app.set_status(format!("Requesting summary for {ticker}..."));
}

fn handle_about_key(app: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Char('s') {
        if app.about.speech != SpeechStatus::Pending {
            app.about.speech = SpeechStatus::Pending;
            let request = SpeechRequest::new(app.config.speech_voice.clone(), PRODUCT_BLURB);
            let _ = app.worker_tx.send(WorkerCommand::Synthesize { request });
            app.set_status("Generating speech...");
        }
        return;
    }
    handle_nav_key(app, key);
}

fn handle_help_key(app: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Char('e') {
        app.overlay = Overlay::ErrorHistory;
        app.error_scroll = 0;
        return;
    }
    handle_nav_key(app, key);
}

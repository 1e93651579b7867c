//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels;
//! the summary state machine is written only at its two transition points
//! (selection and response resolution) and read only by the renderers.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use tickerlab_core::catalog::{Catalog, TickerRecord};
use tickerlab_core::config::ClientConfig;
use tickerlab_core::filter::filter;
use tickerlab_core::summary::SummaryFetcher;

use crate::worker::{WorkerCommand, WorkerResponse};

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Dashboard,
    Account,
    About,
    Help,
}

impl Screen {
    pub fn index(self) -> usize {
        match self {
            Screen::Dashboard => 0,
            Screen::Account => 1,
            Screen::About => 2,
            Screen::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Screen::Dashboard),
            1 => Some(Screen::Account),
            2 => Some(Screen::About),
            3 => Some(Screen::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Account => "Account",
            Screen::About => "About",
            Screen::Help => "Help",
        }
    }

    pub fn next(self) -> Screen {
        Screen::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Screen {
        Screen::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Analysis,
    Speech,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Analysis => "API",
            ErrorCategory::Speech => "TTS",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// Dashboard screen state: the search box, the cursor into the filtered
/// list, and the summary request state machine.
pub struct DashboardState {
    pub catalog: Catalog,
    pub search_input: String,
    pub cursor: usize,
    pub summary: SummaryFetcher,
}

impl DashboardState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            search_input: String::new(),
            cursor: 0,
            summary: SummaryFetcher::new(),
        }
    }

    /// The records matching the current query, in catalog order.
    pub fn filtered(&self) -> Vec<&TickerRecord> {
        filter(&self.catalog, &self.search_input)
    }

    /// The record under the cursor, if any.
    pub fn selected_record(&self) -> Option<&TickerRecord> {
        self.filtered().get(self.cursor).copied()
    }

    /// Keep the cursor inside the filtered list after the query changes.
    pub fn clamp_cursor(&mut self) {
        let count = self.filtered().len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }
}

/// Speech synthesis progress on the About screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpeechStatus {
    #[default]
    Idle,
    Pending,
    Ready {
        audio_url: String,
    },
    Failed {
        message: String,
    },
}

/// About screen state.
#[derive(Debug, Default)]
pub struct AboutState {
    pub speech: SpeechStatus,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_screen: Screen,
    pub running: bool,

    // Screen states
    pub dashboard: DashboardState,
    pub about: AboutState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub config: ClientConfig,
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        config: ClientConfig,
        state_path: PathBuf,
    ) -> Self {
        Self {
            active_screen: Screen::Dashboard,
            running: true,
            dashboard: DashboardState::new(Catalog::default_us()),
            about: AboutState::default(),
            worker_tx,
            worker_rx,
            config,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
            state_path,
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;

    #[test]
    fn screen_cycle() {
        assert_eq!(Screen::Dashboard.next(), Screen::Account);
        assert_eq!(Screen::Help.next(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.prev(), Screen::Help);
        assert_eq!(Screen::Account.prev(), Screen::Dashboard);
    }

    #[test]
    fn screen_from_index() {
        for i in 0..4 {
            let s = Screen::from_index(i).unwrap();
            assert_eq!(s.index(), i);
        }
        assert!(Screen::from_index(4).is_none());
    }

    #[test]
    fn error_history_caps_at_50() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Other, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn filtered_view_tracks_query() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();
        let full = app.dashboard.filtered().len();
        assert_eq!(full, app.dashboard.catalog.len());

        app.dashboard.search_input = "apple".into();
        let matches = app.dashboard.filtered();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].display_symbol(), "AAPL");
    }

    #[test]
    fn clamp_cursor_after_narrowing_query() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();
        app.dashboard.cursor = app.dashboard.catalog.len() - 1;

        app.dashboard.search_input = "apple".into();
        app.dashboard.clamp_cursor();
        assert_eq!(app.dashboard.cursor, 0);
        assert_eq!(
            app.dashboard.selected_record().unwrap().display_symbol(),
            "AAPL"
        );
    }

    #[test]
    fn clamp_cursor_with_no_matches() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();
        app.dashboard.cursor = 3;
        app.dashboard.search_input = "zzzzzz no such ticker".into();
        app.dashboard.clamp_cursor();
        assert_eq!(app.dashboard.cursor, 0);
        assert!(app.dashboard.selected_record().is_none());
    }
}

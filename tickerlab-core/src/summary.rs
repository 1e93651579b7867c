//! Financial summary payload and the request state machine.
//!
//! The fetcher models at most one outstanding request. Selecting a new
//! ticker immediately discards whatever was shown before and transitions
//! to `Loading`; the eventual response resolves to `Loaded` or `Failed`.
//! Each `Loading` transition carries a monotonically increasing token, and
//! a response is applied only if its token is still current — a late
//! response for a superseded selection is dropped instead of overwriting
//! the newer state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::AnalysisError;

/// The analysis backend's summary payload, passed through to display.
///
/// `performance_metrics` is absent in some responses and defaults to an
/// empty map rather than failing the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    pub ticker: String,
    pub market_return: f64,
    pub portfolio_return: f64,
    pub initial_balance: f64,
    pub final_balance: f64,
    pub total_episodes: u64,
    pub data_points: u64,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub performance_metrics: BTreeMap<String, f64>,
}

/// Identifies one fetch request. Later tokens supersede earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Current state of the summary request. Exactly one variant holds at any
/// time; transitions are driven only by selection events and request
/// resolution. A failure is terminal until the next selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SummaryRequestState {
    #[default]
    Idle,
    Loading {
        ticker: String,
        token: RequestToken,
    },
    Loaded(TickerSummary),
    Failed {
        message: String,
    },
}

/// Owns the request state and the token counter.
#[derive(Debug, Default)]
pub struct SummaryFetcher {
    state: SummaryRequestState,
    next_token: u64,
}

impl SummaryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SummaryRequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SummaryRequestState::Loading { .. })
    }

    /// Start a request for `ticker`, discarding any prior result. Returns
    /// the token the eventual response must present to `resolve`.
    ///
    /// The caller uppercases the ticker before sending; this method stores
    /// it as given.
    pub fn begin(&mut self, ticker: &str) -> RequestToken {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.state = SummaryRequestState::Loading {
            ticker: ticker.to_string(),
            token,
        };
        token
    }

    /// Apply a request outcome. Returns `true` if the outcome was applied,
    /// `false` if it was stale (its token no longer matches the current
    /// `Loading` state) and the state was left untouched.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        outcome: Result<TickerSummary, AnalysisError>,
    ) -> bool {
        let is_current = matches!(
            &self.state,
            SummaryRequestState::Loading { token: current, .. } if *current == token
        );
        if !is_current {
            return false;
        }

        self.state = match outcome {
            Ok(summary) => SummaryRequestState::Loaded(summary),
            Err(err) => SummaryRequestState::Failed {
                message: err.user_message(),
            },
        };
        true
    }
}

//! App state persistence — JSON save/load across restarts.
//!
//! Only navigation state survives a restart. The search text and the
//! summary state are session-local by design and never written to disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::Screen;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_screen: Screen,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_screen: Screen::Dashboard,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &crate::app::AppState) -> PersistedState {
    PersistedState {
        active_screen: app.active_screen,
        welcome_dismissed: app.overlay != crate::app::Overlay::Welcome,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut crate::app::AppState, state: PersistedState) {
    app.active_screen = state.active_screen;
    if !state.welcome_dismissed {
        app.overlay = crate::app::Overlay::Welcome;
    }
}

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::collaborators::ViewState;

/// Top-level screen of the field assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Procedures,
    Translation,
    Documentation,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Procedures => "procedures",
            View::Translation => "translation",
            View::Documentation => "documentation",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time copy of [`AppState`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub current_view: View,
    pub last_voice_command: Option<String>,
    pub last_voice_command_at: Option<DateTime<Utc>>,
    pub voice_active: bool,
}

/// Application view-state, created once by the application assembly and
/// shared by `Arc` with everything that needs it.
#[derive(Debug, Default)]
pub struct AppState {
    inner: RwLock<ViewSnapshot>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.inner.read().clone()
    }

    pub fn current_view(&self) -> View {
        self.inner.read().current_view
    }

    pub fn last_voice_command(&self) -> Option<String> {
        self.inner.read().last_voice_command.clone()
    }

    pub fn is_voice_active(&self) -> bool {
        self.inner.read().voice_active
    }
}

impl ViewState for AppState {
    fn set_current_view(&self, view: View) {
        self.inner.write().current_view = view;
    }

    fn set_last_voice_command(&self, text: &str) {
        let mut state = self.inner.write();
        state.last_voice_command = Some(text.to_string());
        state.last_voice_command_at = Some(Utc::now());
    }

    fn set_voice_active(&self, active: bool) {
        self.inner.write().voice_active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = AppState::new();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.current_view, View::Home);
        assert!(snapshot.last_voice_command.is_none());
        assert!(!snapshot.voice_active);
    }

    #[test]
    fn test_setters_update_snapshot() {
        let state = AppState::new();
        state.set_current_view(View::Documentation);
        state.set_last_voice_command("document patient information");
        state.set_voice_active(true);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.current_view, View::Documentation);
        assert_eq!(snapshot.last_voice_command.as_deref(), Some("document patient information"));
        assert!(snapshot.last_voice_command_at.is_some());
        assert!(state.is_voice_active());
    }
}

use serde::{Deserialize, Serialize};

/// Default on-screen time of an auto-dismissing alert
pub const DEFAULT_DISMISS_TIME_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Safety banner request handed to the alert display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub message: String,
    pub severity: AlertSeverity,
    pub auto_dismiss: bool,
    pub dismiss_time_ms: u64,
}

impl AlertRequest {
    /// Auto-dismissing alert with the default display time
    pub fn new(message: impl Into<String>, severity: AlertSeverity) -> Self {
        Self {
            message: message.into(),
            severity,
            auto_dismiss: true,
            dismiss_time_ms: DEFAULT_DISMISS_TIME_MS,
        }
    }

    pub fn with_auto_dismiss(mut self, auto_dismiss: bool) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    pub fn with_dismiss_time(mut self, dismiss_time_ms: u64) -> Self {
        self.dismiss_time_ms = dismiss_time_ms;
        self
    }
}

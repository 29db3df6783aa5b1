use serde::{Deserialize, Serialize};

/// What a voice command asks the assistant to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ShowProcedure,
    Translate,
    Document,
    Alert,
    CheckVitals,
    Help,
    /// No rule matched; a valid outcome, not an error
    Unrecognized,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ShowProcedure => "show_procedure",
            Intent::Translate => "translate",
            Intent::Document => "document",
            Intent::Alert => "alert",
            Intent::CheckVitals => "check_vitals",
            Intent::Help => "help",
            Intent::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

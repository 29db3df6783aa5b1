use std::sync::Arc;

use logger_redacted::TranscriptRedactor;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::alert::{AlertRequest, AlertSeverity, DEFAULT_DISMISS_TIME_MS};
use crate::collaborators::{AlertSink, ProcedureLookup, StatusSink, TranslationSink, ViewState};
use crate::config::VoiceCommandConfig;
use crate::error::{VoiceError, VoiceResult};
use crate::intent::Intent;
use crate::state::View;

/// Procedures that can be opened by voice, checked in this order
pub const PROCEDURE_KEYWORDS: &[&str] = &["cardiac arrest", "cpr", "medication", "trauma", "airway"];

pub const HELP_TEXT: &str =
    r#"Voice commands: "Show [procedure]", "Translate [text]", "Document [type]", "Alert [level]""#;

const TRANSLATE_TARGET_PATTERN: &str = r"translate\s+(.+)";

/// Documentation form chosen from the spoken command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentTemplate {
    PatientInfo,
    Vitals,
    General,
}

impl DocumentTemplate {
    /// "patient" is checked before "vitals"
    pub fn for_transcript(transcript: &str) -> Self {
        let lowered = transcript.to_lowercase();
        if lowered.contains("patient") {
            DocumentTemplate::PatientInfo
        } else if lowered.contains("vitals") {
            DocumentTemplate::Vitals
        } else {
            DocumentTemplate::General
        }
    }
}

/// Collaborators every dispatch may touch
#[derive(Clone)]
pub struct DispatchTargets {
    pub view_state: Arc<dyn ViewState>,
    pub alerts: Arc<dyn AlertSink>,
    pub status: Arc<dyn StatusSink>,
}

/// Runs the handler for a routed intent.
///
/// Handlers never fail: missing parameters degrade to a status message.
/// View-state changes are made before any alert or status is emitted.
pub struct ActionDispatcher {
    targets: DispatchTargets,
    translation: Option<Arc<dyn TranslationSink>>,
    procedures: Option<Arc<dyn ProcedureLookup>>,
    procedure_keywords: Vec<String>,
    translate_target: Regex,
    alert_dismiss_ms: u64,
    help_dismiss_ms: u64,
    redactor: TranscriptRedactor,
}

impl ActionDispatcher {
    pub fn new(targets: DispatchTargets) -> VoiceResult<Self> {
        let translate_target = RegexBuilder::new(TRANSLATE_TARGET_PATTERN)
            .case_insensitive(true)
            .build()
            .map_err(|source| VoiceError::InvalidPattern {
                pattern: TRANSLATE_TARGET_PATTERN.to_string(),
                source,
            })?;

        Ok(Self {
            targets,
            translation: None,
            procedures: None,
            procedure_keywords: PROCEDURE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            translate_target,
            alert_dismiss_ms: DEFAULT_DISMISS_TIME_MS,
            help_dismiss_ms: 8000,
            redactor: TranscriptRedactor::default(),
        })
    }

    pub fn with_config(mut self, config: &VoiceCommandConfig) -> Self {
        self.alert_dismiss_ms = config.alert_dismiss_ms;
        self.help_dismiss_ms = config.help_dismiss_ms;
        self
    }

    pub fn with_translation_sink(mut self, sink: Arc<dyn TranslationSink>) -> Self {
        self.translation = Some(sink);
        self
    }

    pub fn with_procedure_lookup(mut self, lookup: Arc<dyn ProcedureLookup>) -> Self {
        self.procedures = Some(lookup);
        self
    }

    pub fn with_redactor(mut self, redactor: TranscriptRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    pub fn execute(&self, intent: Intent, transcript: &str) {
        debug!(intent = %intent, "Dispatching voice command");

        match intent {
            Intent::ShowProcedure => self.handle_show_procedure(transcript),
            Intent::Translate => self.handle_translate(transcript),
            Intent::Document => self.handle_document(transcript),
            Intent::Alert => self.handle_alert(transcript),
            Intent::CheckVitals => self.handle_check_vitals(),
            Intent::Help => self.handle_help(),
            Intent::Unrecognized => self.handle_unrecognized(),
        }
    }

    /// First configured procedure keyword contained in the transcript
    pub fn procedure_keyword(&self, transcript: &str) -> Option<&str> {
        let lowered = transcript.to_lowercase();
        self.procedure_keywords
            .iter()
            .find(|keyword| lowered.contains(keyword.as_str()))
            .map(String::as_str)
    }

    /// Everything spoken after "translate", if anything
    pub fn translation_target(&self, transcript: &str) -> Option<String> {
        self.translate_target
            .captures(transcript)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|text| !text.is_empty())
    }

    /// Alert requested by an "alert ..." command
    pub fn alert_for(&self, transcript: &str) -> AlertRequest {
        let lowered = transcript.to_lowercase();
        let (severity, message) = if lowered.contains("critical") || lowered.contains("emergency") {
            (AlertSeverity::Critical, "CRITICAL: Emergency situation detected")
        } else {
            (AlertSeverity::Warning, "Safety alert triggered by voice command")
        };

        AlertRequest::new(message, severity)
            .with_auto_dismiss(severity != AlertSeverity::Critical)
            .with_dismiss_time(self.alert_dismiss_ms)
    }

    fn handle_show_procedure(&self, transcript: &str) {
        // Unknown procedures are ignored without a status update.
        let Some(keyword) = self.procedure_keyword(transcript) else {
            debug!("No procedure keyword in command");
            return;
        };

        if let Some(lookup) = &self.procedures {
            match lookup.find_by_keyword(keyword) {
                Some(procedure_id) => info!(keyword, procedure_id = %procedure_id, "Opening procedure"),
                None => debug!(keyword, "Procedure keyword not in catalog"),
            }
        } else {
            info!(keyword, "Opening procedure");
        }

        self.status(&format!("Opening {} protocol", keyword));
    }

    fn handle_translate(&self, transcript: &str) {
        info!("Switching to translation mode");
        self.targets.view_state.set_current_view(View::Translation);

        if let Some(text) = self.translation_target(transcript) {
            debug!(text = %self.redactor.redact(&text), "Text to translate");
            if let Some(sink) = &self.translation {
                sink.translate(&text);
            }
        }

        self.status("Translation mode activated");
    }

    fn handle_document(&self, transcript: &str) {
        info!("Switching to documentation mode");
        self.targets.view_state.set_current_view(View::Documentation);

        let template = DocumentTemplate::for_transcript(transcript);
        debug!(?template, "Selected documentation template");

        self.status("Documentation mode activated");
    }

    fn handle_alert(&self, transcript: &str) {
        let alert = self.alert_for(transcript);
        let severity = alert.severity;
        info!(severity = %severity, auto_dismiss = alert.auto_dismiss, "Raising safety alert");

        self.targets.alerts.show(alert);
        self.status(&format!("{} alert shown", severity));
    }

    fn handle_check_vitals(&self) {
        info!("Initiating vitals check");
        self.status("Opening vitals checklist");
    }

    fn handle_help(&self) {
        info!("Showing help information");
        self.targets.alerts.show(
            AlertRequest::new(HELP_TEXT, AlertSeverity::Info)
                .with_auto_dismiss(true)
                .with_dismiss_time(self.help_dismiss_ms),
        );
        self.status("Help information displayed");
    }

    fn handle_unrecognized(&self) {
        debug!("No matching pattern for command");
        self.status("Command not recognized");
    }

    fn status(&self, text: &str) {
        self.targets.status.update_status(text);
    }
}

//! In-memory collaborators that keep everything they receive.
//!
//! Used by headless embeddings and throughout the test suite.

use parking_lot::Mutex;

use crate::alert::AlertRequest;
use crate::collaborators::{AlertSink, StatusSink, TranslationSink};

#[derive(Debug, Default)]
pub struct RecordingStatusSink {
    updates: Mutex<Vec<String>>,
}

impl RecordingStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<String> {
        self.updates.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.updates.lock().last().cloned()
    }
}

impl StatusSink for RecordingStatusSink {
    fn update_status(&self, text: &str) {
        self.updates.lock().push(text.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingAlertSink {
    alerts: Mutex<Vec<AlertRequest>>,
}

impl RecordingAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<AlertRequest> {
        self.alerts.lock().clone()
    }

    pub fn last(&self) -> Option<AlertRequest> {
        self.alerts.lock().last().cloned()
    }
}

impl AlertSink for RecordingAlertSink {
    fn show(&self, alert: AlertRequest) {
        self.alerts.lock().push(alert);
    }
}

#[derive(Debug, Default)]
pub struct RecordingTranslationSink {
    requests: Mutex<Vec<String>>,
}

impl RecordingTranslationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl TranslationSink for RecordingTranslationSink {
    fn translate(&self, text: &str) {
        self.requests.lock().push(text.to_string());
    }
}

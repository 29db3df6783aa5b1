// Logger configuration
use serde::{Deserialize, Serialize};

use crate::{TranscriptRedactor, DEFAULT_LOG_DIRECTIVE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for terminals
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub redaction_enabled: bool,
    pub hash_for_correlation: bool,
    pub log_level: String,
    pub format: LogFormat,
}

impl LoggerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_level = std::env::var("ASSISTAI_LOG")
            .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.to_string());

        let format = match std::env::var("ASSISTAI_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let redaction_enabled = std::env::var("ASSISTAI_LOG_REDACTION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        // Hash PHI instead of masking it
        let hash_for_correlation = std::env::var("ASSISTAI_LOG_HASH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);

        Self {
            redaction_enabled,
            hash_for_correlation,
            log_level,
            format,
        }
    }

    /// Redactor matching these settings
    pub fn redactor(&self) -> TranscriptRedactor {
        if self.redaction_enabled {
            TranscriptRedactor::default().with_hash_correlation(self.hash_for_correlation)
        } else {
            TranscriptRedactor::disabled()
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            redaction_enabled: true,
            hash_for_correlation: false,
            log_level: DEFAULT_LOG_DIRECTIVE.to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every environment case lives in this one test so parallel tests never
    // observe each other's variables.
    #[test]
    fn test_from_env() {
        for key in ["ASSISTAI_LOG", "ASSISTAI_LOG_FORMAT", "ASSISTAI_LOG_REDACTION", "ASSISTAI_LOG_HASH"] {
            std::env::remove_var(key);
        }

        let config = LoggerConfig::from_env();
        assert_eq!(config.log_level, DEFAULT_LOG_DIRECTIVE);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.redaction_enabled);
        assert!(!config.hash_for_correlation);

        std::env::set_var("ASSISTAI_LOG", "voice_command_service=debug");
        std::env::set_var("ASSISTAI_LOG_FORMAT", "JSON");
        std::env::set_var("ASSISTAI_LOG_REDACTION", "not-a-bool");
        std::env::set_var("ASSISTAI_LOG_HASH", "true");

        let config = LoggerConfig::from_env();
        assert_eq!(config.log_level, "voice_command_service=debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.redaction_enabled);
        assert!(config.hash_for_correlation);
        assert!(config.redactor().redact("callback 555-123-4567").starts_with("callback PHONE["));

        std::env::set_var("ASSISTAI_LOG_REDACTION", "false");
        let config = LoggerConfig::from_env();
        assert_eq!(config.redactor().redact("callback 555-123-4567"), "callback 555-123-4567");

        for key in ["ASSISTAI_LOG", "ASSISTAI_LOG_FORMAT", "ASSISTAI_LOG_REDACTION", "ASSISTAI_LOG_HASH"] {
            std::env::remove_var(key);
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::alert::DEFAULT_DISMISS_TIME_MS;
use crate::error::{VoiceError, VoiceResult};

/// Where transcripts come from while listening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureBackend {
    /// Host-provided speech capture, falling back to simulation on failure
    Live,
    /// Demo generator only
    Simulated,
}

/// Demo transcripts played back when no live capture is available
pub const SIMULATED_COMMANDS: &[&str] = &[
    "show cardiac arrest protocol",
    "check vitals",
    "translate where does it hurt",
    "document patient information",
    "alert critical patient",
    "show medication dosage",
    "start CPR checklist",
];

/// Voice command service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VoiceCommandConfig {
    pub commands_enabled: bool,
    pub capture_backend: CaptureBackend,
    pub recognition_language: String,
    /// Time spent "listening" before a simulated transcript is heard
    pub simulated_latency_ms: u64,
    /// Recognition time added to `simulated_latency_ms`; the transcript is
    /// heard and dispatched once both have elapsed
    pub processing_delay_ms: u64,
    pub alert_dismiss_ms: u64,
    pub help_dismiss_ms: u64,
    pub simulated_commands: Vec<String>,
}

impl VoiceCommandConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> VoiceResult<Self> {
        let defaults = Self::default();

        let commands_enabled = std::env::var("VOICE_COMMANDS_ENABLED")
            .ok()
            .and_then(|s| Self::parse_flag(&s))
            .unwrap_or(defaults.commands_enabled);

        let recognition_language = std::env::var("VOICE_LANGUAGE")
            .unwrap_or(defaults.recognition_language);

        let simulated_latency_ms = std::env::var("VOICE_SIMULATED_LATENCY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.simulated_latency_ms);

        let processing_delay_ms = std::env::var("VOICE_PROCESSING_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.processing_delay_ms);

        let alert_dismiss_ms = std::env::var("VOICE_ALERT_DISMISS_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.alert_dismiss_ms);

        let help_dismiss_ms = std::env::var("VOICE_HELP_DISMISS_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.help_dismiss_ms);

        let capture_backend = match std::env::var("VOICE_CAPTURE_BACKEND") {
            Ok(backend) => Self::parse_backend(&backend)?,
            Err(_) => defaults.capture_backend,
        };

        Ok(Self {
            commands_enabled,
            capture_backend,
            recognition_language,
            simulated_latency_ms,
            processing_delay_ms,
            alert_dismiss_ms,
            help_dismiss_ms,
            simulated_commands: defaults.simulated_commands,
        })
    }

    /// `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`; anything else is `None`
    pub fn parse_flag(value: &str) -> Option<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    pub fn parse_backend(value: &str) -> VoiceResult<CaptureBackend> {
        match value.trim().to_lowercase().as_str() {
            "live" | "speech" => Ok(CaptureBackend::Live),
            "simulated" | "simulation" | "demo" => Ok(CaptureBackend::Simulated),
            other => Err(VoiceError::Config(format!(
                "Unknown capture backend: {}",
                other
            ))),
        }
    }

    /// Settings for tests and scripted runs: no artificial delays
    pub fn immediate() -> Self {
        Self {
            simulated_latency_ms: 0,
            processing_delay_ms: 0,
            ..Self::default()
        }
    }
}

impl Default for VoiceCommandConfig {
    fn default() -> Self {
        Self {
            commands_enabled: true,
            capture_backend: CaptureBackend::Live,
            recognition_language: "en-US".to_string(),
            simulated_latency_ms: 1500,
            processing_delay_ms: 500,
            alert_dismiss_ms: DEFAULT_DISMISS_TIME_MS,
            help_dismiss_ms: 8000,
            simulated_commands: SIMULATED_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!(VoiceCommandConfig::parse_backend("Live").unwrap(), CaptureBackend::Live);
        assert_eq!(VoiceCommandConfig::parse_backend("demo").unwrap(), CaptureBackend::Simulated);
        assert!(matches!(
            VoiceCommandConfig::parse_backend("carrier-pigeon"),
            Err(VoiceError::Config(_))
        ));
    }

    const ENV_KEYS: &[&str] = &[
        "VOICE_COMMANDS_ENABLED",
        "VOICE_CAPTURE_BACKEND",
        "VOICE_LANGUAGE",
        "VOICE_SIMULATED_LATENCY_MS",
        "VOICE_PROCESSING_DELAY_MS",
        "VOICE_ALERT_DISMISS_MS",
        "VOICE_HELP_DISMISS_MS",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    // All environment cases share one test so parallel tests never see
    // each other's variables.
    #[test]
    fn test_from_env() {
        clear_env();

        let config = VoiceCommandConfig::from_env().unwrap();
        assert!(config.commands_enabled);
        assert_eq!(config.capture_backend, CaptureBackend::Live);
        assert_eq!(config.recognition_language, "en-US");
        assert_eq!(config.simulated_latency_ms, 1500);
        assert_eq!(config.alert_dismiss_ms, DEFAULT_DISMISS_TIME_MS);

        std::env::set_var("VOICE_COMMANDS_ENABLED", "0");
        std::env::set_var("VOICE_CAPTURE_BACKEND", "simulated");
        std::env::set_var("VOICE_LANGUAGE", "es-MX");
        std::env::set_var("VOICE_SIMULATED_LATENCY_MS", "250");
        std::env::set_var("VOICE_ALERT_DISMISS_MS", "soon");
        std::env::set_var("VOICE_HELP_DISMISS_MS", "12000");

        let config = VoiceCommandConfig::from_env().unwrap();
        assert!(!config.commands_enabled);
        assert_eq!(config.capture_backend, CaptureBackend::Simulated);
        assert_eq!(config.recognition_language, "es-MX");
        assert_eq!(config.simulated_latency_ms, 250);
        assert_eq!(config.processing_delay_ms, 500);
        assert_eq!(config.alert_dismiss_ms, DEFAULT_DISMISS_TIME_MS);
        assert_eq!(config.help_dismiss_ms, 12000);

        std::env::set_var("VOICE_COMMANDS_ENABLED", "maybe");
        std::env::set_var("VOICE_CAPTURE_BACKEND", "carrier-pigeon");
        let err = VoiceCommandConfig::from_env().unwrap_err();
        assert!(matches!(err, VoiceError::Config(_)));

        std::env::remove_var("VOICE_CAPTURE_BACKEND");
        assert!(VoiceCommandConfig::from_env().unwrap().commands_enabled);

        clear_env();
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(VoiceCommandConfig::parse_flag("1"), Some(true));
        assert_eq!(VoiceCommandConfig::parse_flag(" Off "), Some(false));
        assert_eq!(VoiceCommandConfig::parse_flag("FALSE"), Some(false));
        assert_eq!(VoiceCommandConfig::parse_flag("maybe"), None);
    }

    #[test]
    fn test_defaults_match_field_demo() {
        let config = VoiceCommandConfig::default();
        assert_eq!(config.help_dismiss_ms, 8000);
        assert_eq!(config.alert_dismiss_ms, 5000);
        assert_eq!(config.simulated_commands.len(), 7);
        assert_eq!(config.simulated_latency_ms + config.processing_delay_ms, 2000);
    }
}

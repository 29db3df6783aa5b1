use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::VoiceCommandConfig;
use crate::error::{VoiceError, VoiceResult};

/// Which path produced (or failed to produce) a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcquisitionMode {
    Live,
    Simulated,
}

impl std::fmt::Display for AcquisitionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcquisitionMode::Live => f.write_str("live"),
            AcquisitionMode::Simulated => f.write_str("simulated"),
        }
    }
}

/// Produces one final transcript per call.
///
/// Implementations may take as long as the speaker does; the session
/// cancels the call by dropping the task when listening stops.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    fn name(&self) -> &str;

    async fn capture(&self) -> VoiceResult<String>;
}

/// Demo generator that "hears" a random scripted command
pub struct SimulatedTranscriptSource {
    commands: Vec<String>,
    latency: Duration,
}

impl SimulatedTranscriptSource {
    pub fn new(commands: Vec<String>, latency: Duration) -> Self {
        Self { commands, latency }
    }

    pub fn from_config(config: &VoiceCommandConfig) -> Self {
        Self::new(
            config.simulated_commands.clone(),
            Duration::from_millis(
                config
                    .simulated_latency_ms
                    .saturating_add(config.processing_delay_ms),
            ),
        )
    }
}

#[async_trait]
impl TranscriptSource for SimulatedTranscriptSource {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn capture(&self) -> VoiceResult<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let picked = {
            let mut rng = rand::thread_rng();
            self.commands.choose(&mut rng).cloned()
        };

        picked.ok_or_else(|| {
            VoiceError::acquisition(AcquisitionMode::Simulated, "no simulated commands configured")
        })
    }
}

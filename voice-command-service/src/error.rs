use thiserror::Error;

use crate::acquisition::AcquisitionMode;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid command pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{mode} capture failed: {reason}")]
    Acquisition {
        mode: AcquisitionMode,
        reason: String,
    },

    #[error("Voice command queue closed")]
    QueueClosed,
}

impl VoiceError {
    pub fn acquisition(mode: AcquisitionMode, reason: impl Into<String>) -> Self {
        VoiceError::Acquisition {
            mode,
            reason: reason.into(),
        }
    }
}

pub type VoiceResult<T> = Result<T, VoiceError>;

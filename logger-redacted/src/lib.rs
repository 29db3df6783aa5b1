//! Logging for the field assistant with PHI redaction of spoken transcripts
//!
//! Voice transcripts captured on scene routinely carry patient details
//! ("patient name is Rivera, call back 555-123-4567"). Everything that
//! reaches a log sink goes through [`TranscriptRedactor`] first.
//!
//! # Detected Data Types
//!
//! - **Phone Numbers**: (555) 123-4567 → (***) ***-****
//! - **SSN**: 123-45-6789 → ***-**-****
//! - **Dates**: 03/14/1980 → **/**/****
//! - **Medical Record Numbers**: MRN123456 → MRN******
//! - **Names**: "name is Rivera" → "name is [NAME]"
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init_logging, LoggerConfig, TranscriptRedactor};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_logging(&LoggerConfig::from_env())?;
//!
//!     let redactor = TranscriptRedactor::default();
//!     tracing::info!(
//!         transcript = %redactor.redact("document patient MRN 4411"),
//!         "Processing voice command"
//!     );
//!     // Output: transcript="document patient MRN****"
//!     Ok(())
//! }
//! ```

pub mod redactor;
pub mod config;
pub mod subscriber;

pub use redactor::*;
pub use config::*;
pub use subscriber::*;

/// Filter directive used when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

//! Voice command routing and dispatch for the EMT field assistant
//!
//! Turns spoken (or typed) transcripts into assistant actions: opening
//! protocols, switching to translation or documentation, raising safety
//! alerts, showing help.
//!
//! # Pipeline
//!
//! 1. **Capture** - a [`TranscriptSource`] produces a final transcript; live
//!    capture failures fall back to the simulated demo generator
//! 2. **Route** - [`CommandRouter`] picks the first rule whose pattern
//!    matches (ordered, case-insensitive, first match wins)
//! 3. **Dispatch** - [`ActionDispatcher`] runs the intent's handler against
//!    injected collaborators ([`ViewState`], [`AlertSink`], [`StatusSink`])
//!
//! A [`VoiceSession`] owns the single-consumer message queue that ties these
//! together; UI events arrive as [`VoiceMessage`]s through a [`VoiceHandle`].
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use voice_command_service::*;
//!
//! # fn example() -> VoiceResult<()> {
//! let state = Arc::new(AppState::new());
//! let alerts = Arc::new(RecordingAlertSink::new());
//! let status = Arc::new(RecordingStatusSink::new());
//!
//! let dispatcher = ActionDispatcher::new(DispatchTargets {
//!     view_state: state.clone(),
//!     alerts: alerts.clone(),
//!     status: status.clone(),
//! })?;
//! let pipeline = CommandPipeline::new(CommandRouter::standard()?, dispatcher, state.clone());
//!
//! let intent = pipeline.process("translate where does it hurt");
//! assert_eq!(intent, Intent::Translate);
//! assert_eq!(state.current_view(), View::Translation);
//! # Ok(())
//! # }
//! ```

pub mod acquisition;
pub mod alert;
pub mod collaborators;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod intent;
pub mod memory;
pub mod pipeline;
pub mod router;
pub mod session;
pub mod state;

pub use acquisition::*;
pub use alert::*;
pub use collaborators::*;
pub use config::*;
pub use dispatcher::*;
pub use error::*;
pub use intent::*;
pub use memory::*;
pub use pipeline::*;
pub use router::*;
pub use session::*;
pub use state::*;

pub use field_reference::{ProcedureCatalog, ProcedureId};

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::acquisition::{AcquisitionMode, SimulatedTranscriptSource, TranscriptSource};
use crate::collaborators::{StatusSink, ViewState};
use crate::config::{CaptureBackend, VoiceCommandConfig};
use crate::error::{VoiceError, VoiceResult};
use crate::pipeline::CommandPipeline;

/// Everything that can happen to a voice session, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceMessage {
    StartListening,
    StopListening,
    Toggle,
    /// Typed command, dispatched without any capture
    Submit(String),
    Transcript {
        acquisition: u64,
        text: String,
    },
    AcquisitionFailed {
        acquisition: u64,
        mode: AcquisitionMode,
        reason: String,
    },
    Shutdown,
}

/// Producer side of a session's queue
#[derive(Debug, Clone)]
pub struct VoiceHandle {
    sender: mpsc::UnboundedSender<VoiceMessage>,
}

impl VoiceHandle {
    pub fn send(&self, message: VoiceMessage) -> VoiceResult<()> {
        self.sender.send(message).map_err(|_| VoiceError::QueueClosed)
    }

    pub fn start_listening(&self) -> VoiceResult<()> {
        self.send(VoiceMessage::StartListening)
    }

    pub fn stop_listening(&self) -> VoiceResult<()> {
        self.send(VoiceMessage::StopListening)
    }

    pub fn toggle(&self) -> VoiceResult<()> {
        self.send(VoiceMessage::Toggle)
    }

    pub fn submit(&self, text: impl Into<String>) -> VoiceResult<()> {
        self.send(VoiceMessage::Submit(text.into()))
    }

    pub fn shutdown(&self) -> VoiceResult<()> {
        self.send(VoiceMessage::Shutdown)
    }
}

/// Single consumer of voice messages.
///
/// Messages are handled one at a time to completion. Capture runs in a
/// spawned task that reports back through the same queue; at most one
/// capture is in flight, and results from a cancelled capture are dropped
/// by comparing acquisition ids.
pub struct VoiceSession {
    id: Uuid,
    pipeline: CommandPipeline,
    view_state: Arc<dyn ViewState>,
    status: Arc<dyn StatusSink>,
    live: Option<Arc<dyn TranscriptSource>>,
    simulated: Arc<dyn TranscriptSource>,
    commands_enabled: bool,
    capture_backend: CaptureBackend,
    sender: mpsc::UnboundedSender<VoiceMessage>,
    receiver: mpsc::UnboundedReceiver<VoiceMessage>,
    listening: bool,
    acquisition: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl VoiceSession {
    pub fn new(
        pipeline: CommandPipeline,
        view_state: Arc<dyn ViewState>,
        status: Arc<dyn StatusSink>,
        config: &VoiceCommandConfig,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            id: Uuid::new_v4(),
            pipeline,
            view_state,
            status,
            live: None,
            simulated: Arc::new(SimulatedTranscriptSource::from_config(config)),
            commands_enabled: config.commands_enabled,
            capture_backend: config.capture_backend,
            sender,
            receiver,
            listening: false,
            acquisition: 0,
            in_flight: None,
        }
    }

    /// Real speech capture; used only with the `Live` backend
    pub fn with_live_source(mut self, source: Arc<dyn TranscriptSource>) -> Self {
        self.live = Some(source);
        self
    }

    pub fn with_simulated_source(mut self, source: Arc<dyn TranscriptSource>) -> Self {
        self.simulated = source;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn handle(&self) -> VoiceHandle {
        VoiceHandle {
            sender: self.sender.clone(),
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn pipeline(&self) -> &CommandPipeline {
        &self.pipeline
    }

    /// Process messages until `Shutdown`
    pub async fn run(mut self) {
        info!(session_id = %self.id, "Voice session started");
        while self.step().await {}
        info!(session_id = %self.id, "Voice session stopped");
    }

    /// Wait for and handle one message; `false` once the session has shut down
    pub async fn step(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(message) => self.handle_message(message),
            None => false,
        }
    }

    /// Handle one message. Must be called inside a tokio runtime.
    pub fn handle_message(&mut self, message: VoiceMessage) -> bool {
        match message {
            VoiceMessage::StartListening => self.start_listening(),
            VoiceMessage::StopListening => self.stop_listening(),
            VoiceMessage::Toggle => {
                if self.listening {
                    self.stop_listening();
                } else {
                    self.start_listening();
                }
            }
            VoiceMessage::Submit(text) => {
                self.pipeline.process(&text);
            }
            VoiceMessage::Transcript { acquisition, text } => {
                self.on_transcript(acquisition, &text);
            }
            VoiceMessage::AcquisitionFailed {
                acquisition,
                mode,
                reason,
            } => self.on_acquisition_failed(acquisition, mode, &reason),
            VoiceMessage::Shutdown => {
                if self.listening {
                    self.stop_listening();
                }
                return false;
            }
        }
        true
    }

    fn start_listening(&mut self) {
        if !self.commands_enabled {
            self.status.update_status("Voice commands disabled");
            return;
        }
        if self.listening {
            debug!(session_id = %self.id, "Capture already in flight");
            return;
        }

        self.listening = true;
        self.view_state.set_voice_active(true);

        match (&self.live, self.capture_backend) {
            (Some(live), CaptureBackend::Live) => {
                let source = live.clone();
                self.status.update_status("Listening...");
                self.spawn_capture(source, AcquisitionMode::Live);
            }
            _ => self.start_simulation(),
        }
    }

    fn start_simulation(&mut self) {
        self.status.update_status("Listening (simulated)...");
        let source = self.simulated.clone();
        self.spawn_capture(source, AcquisitionMode::Simulated);
    }

    fn stop_listening(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        // Anything the aborted capture already queued is now stale.
        self.acquisition = self.acquisition.wrapping_add(1);
        self.listening = false;
        self.view_state.set_voice_active(false);
    }

    fn spawn_capture(&mut self, source: Arc<dyn TranscriptSource>, mode: AcquisitionMode) {
        self.acquisition = self.acquisition.wrapping_add(1);
        let acquisition = self.acquisition;
        let sender = self.sender.clone();

        debug!(session_id = %self.id, acquisition, source = source.name(), "Starting capture");

        self.in_flight = Some(tokio::spawn(async move {
            let message = match source.capture().await {
                Ok(text) => VoiceMessage::Transcript { acquisition, text },
                Err(err) => VoiceMessage::AcquisitionFailed {
                    acquisition,
                    mode,
                    reason: err.to_string(),
                },
            };
            // The session may already be gone; nothing left to tell.
            let _ = sender.send(message);
        }));
    }

    fn is_current(&self, acquisition: u64) -> bool {
        self.listening && acquisition == self.acquisition
    }

    fn on_transcript(&mut self, acquisition: u64, text: &str) {
        if !self.is_current(acquisition) {
            debug!(session_id = %self.id, acquisition, "Discarding transcript from cancelled capture");
            return;
        }
        self.in_flight = None;

        self.status.update_status(&format!("Heard: \"{}\"", text));
        self.pipeline.process(text);
        self.stop_listening();
    }

    fn on_acquisition_failed(&mut self, acquisition: u64, mode: AcquisitionMode, reason: &str) {
        if !self.is_current(acquisition) {
            debug!(session_id = %self.id, acquisition, "Discarding failure from cancelled capture");
            return;
        }
        self.in_flight = None;

        match mode {
            AcquisitionMode::Live => {
                warn!(session_id = %self.id, reason, "Speech capture unavailable, using simulation");
                self.start_simulation();
            }
            AcquisitionMode::Simulated => {
                warn!(session_id = %self.id, reason, "Simulated capture failed");
                self.status.update_status(&format!("Error: {}", reason));
                self.stop_listening();
            }
        }
    }
}

impl Drop for VoiceSession {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

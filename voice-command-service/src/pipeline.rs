use std::sync::Arc;

use logger_redacted::TranscriptRedactor;
use tracing::info;

use crate::collaborators::ViewState;
use crate::dispatcher::ActionDispatcher;
use crate::intent::Intent;
use crate::router::CommandRouter;

/// transcript → router → dispatcher, run to completion
pub struct CommandPipeline {
    router: CommandRouter,
    dispatcher: ActionDispatcher,
    view_state: Arc<dyn ViewState>,
    redactor: TranscriptRedactor,
}

impl CommandPipeline {
    pub fn new(router: CommandRouter, dispatcher: ActionDispatcher, view_state: Arc<dyn ViewState>) -> Self {
        Self {
            router,
            dispatcher,
            view_state,
            redactor: TranscriptRedactor::default(),
        }
    }

    pub fn with_redactor(mut self, redactor: TranscriptRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    /// Record, route and dispatch one transcript; returns the routed intent
    pub fn process(&self, transcript: &str) -> Intent {
        self.view_state.set_last_voice_command(transcript);

        let intent = self.router.match_transcript(transcript);
        info!(
            transcript = %self.redactor.redact(transcript),
            intent = %intent,
            "Processing voice command"
        );

        self.dispatcher.execute(intent, transcript);
        intent
    }

    pub fn router(&self) -> &CommandRouter {
        &self.router
    }
}

//! Seams between the command core and the rest of the application.
//!
//! Every collaborator is injected by the application assembly; the router
//! and dispatcher never reach for global state.

use field_reference::{ProcedureCatalog, ProcedureId};

use crate::alert::AlertRequest;
use crate::state::View;

/// Shared application view-state, mutated only through these setters
#[cfg_attr(test, mockall::automock)]
pub trait ViewState: Send + Sync {
    fn set_current_view(&self, view: View);
    fn set_last_voice_command(&self, text: &str);
    fn set_voice_active(&self, active: bool);
}

/// Safety banner display; owns rendering and auto-dismiss timing
#[cfg_attr(test, mockall::automock)]
pub trait AlertSink: Send + Sync {
    fn show(&self, alert: AlertRequest);
}

/// Textual status indicator
#[cfg_attr(test, mockall::automock)]
pub trait StatusSink: Send + Sync {
    fn update_status(&self, text: &str);
}

/// Translation display that receives text spoken after "translate"
#[cfg_attr(test, mockall::automock)]
pub trait TranslationSink: Send + Sync {
    fn translate(&self, text: &str);
}

/// Resolves a spoken procedure keyword to a catalog entry
pub trait ProcedureLookup: Send + Sync {
    fn find_by_keyword(&self, keyword: &str) -> Option<ProcedureId>;
}

impl ProcedureLookup for ProcedureCatalog {
    fn find_by_keyword(&self, keyword: &str) -> Option<ProcedureId> {
        ProcedureCatalog::find_by_keyword(self, keyword).map(|procedure| procedure.id)
    }
}

/// Terminal front-end for the AssistAI field assistant
///
/// Assembles the voice command core with console collaborators:
/// status lines, colored safety alerts and phrasebook translations are
/// printed to stdout, live capture reads one line per listening period
/// from stdin.
///
/// # Example Usage
///
/// ```bash
/// # Route and execute a single transcript
/// assistai dispatch "alert emergency on scene"
///
/// # Listen three times, typing commands on stdin
/// assistai listen --sessions 3
///
/// # Demo mode without any input
/// assistai listen --simulate
///
/// # Reference data
/// assistai procedures --urgency high --json
/// assistai translate "where does it hurt" --language es
/// assistai rules
/// ```
pub mod capture;
pub mod cli;
pub mod console;

pub use capture::StdinTranscriptSource;
pub use cli::{Cli, Command};
pub use console::{ConsoleAlertSink, ConsoleStatusSink, ConsoleTranslationSink};

use clap::{Parser, Subcommand};
use field_reference::DEFAULT_LANGUAGE;

/// AssistAI field assistant
#[derive(Parser, Debug)]
#[command(name = "assistai")]
#[command(about = "Voice command assistant for EMT crews", version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Route and execute one transcript
    Dispatch {
        /// Transcript text, e.g. "show cardiac arrest protocol"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Run the voice queue for a number of listening periods
    Listen {
        /// Listening periods before exiting
        #[arg(short, long, default_value_t = 1)]
        sessions: u32,

        /// Skip stdin and use the demo command generator
        #[arg(long)]
        simulate: bool,
    },

    /// List emergency procedures
    Procedures {
        /// Filter by category, e.g. "Critical Care"
        #[arg(long)]
        category: Option<String>,

        /// Filter by urgency (high or medium)
        #[arg(long)]
        urgency: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a phrasebook translation
    Translate {
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Target language code
        #[arg(short, long, default_value = DEFAULT_LANGUAGE, env = "ASSISTAI_LANGUAGE")]
        language: String,
    },

    /// Show the ordered command routing table
    Rules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_joins_words() {
        let cli = Cli::try_parse_from(["assistai", "dispatch", "check", "vitals"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Dispatch {
                text: vec!["check".to_string(), "vitals".to_string()]
            }
        );
    }

    #[test]
    fn test_listen_defaults() {
        let cli = Cli::try_parse_from(["assistai", "listen"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Listen {
                sessions: 1,
                simulate: false
            }
        );
    }

    #[test]
    fn test_procedures_filters() {
        let cli = Cli::try_parse_from([
            "assistai",
            "-v",
            "procedures",
            "--urgency",
            "high",
            "--json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Procedures {
                category: None,
                urgency: Some("high".to_string()),
                json: true
            }
        );
    }

    #[test]
    fn test_dispatch_requires_text() {
        assert!(Cli::try_parse_from(["assistai", "dispatch"]).is_err());
    }
}

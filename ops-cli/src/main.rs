use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use assistai_cli::{
    Cli, Command, ConsoleAlertSink, ConsoleStatusSink, ConsoleTranslationSink, StdinTranscriptSource,
};
use clap::Parser;
use colored::*;
use field_reference::{Phrasebook, Procedure, ProcedureCatalog, Urgency, DEFAULT_LANGUAGE};
use logger_redacted::{init_logging, LoggerConfig};
use tracing::{debug, info};
use voice_command_service::{
    ActionDispatcher, AppState, CaptureBackend, CommandPipeline, CommandRouter, DispatchTargets,
    VoiceCommandConfig, VoiceSession,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut log_config = LoggerConfig::from_env();
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    init_logging(&log_config)?;

    match cli.command {
        Command::Dispatch { text } => dispatch(&text.join(" "), &log_config),
        Command::Listen { sessions, simulate } => listen(sessions, simulate, &log_config).await,
        Command::Procedures {
            category,
            urgency,
            json,
        } => procedures(category.as_deref(), urgency.as_deref(), json),
        Command::Translate { phrase, language } => translate(&phrase.join(" "), &language),
        Command::Rules => rules(),
    }
}

/// Wire the command core to console collaborators
fn assemble(config: &VoiceCommandConfig, log_config: &LoggerConfig) -> Result<(Arc<AppState>, CommandPipeline)> {
    let state = Arc::new(AppState::new());
    let language = std::env::var("ASSISTAI_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

    let dispatcher = ActionDispatcher::new(DispatchTargets {
        view_state: state.clone(),
        alerts: Arc::new(ConsoleAlertSink),
        status: Arc::new(ConsoleStatusSink),
    })?
    .with_config(config)
    .with_translation_sink(Arc::new(ConsoleTranslationSink::new(language)))
    .with_procedure_lookup(Arc::new(ProcedureCatalog::new()))
    .with_redactor(log_config.redactor());

    let pipeline = CommandPipeline::new(CommandRouter::standard()?, dispatcher, state.clone())
        .with_redactor(log_config.redactor());

    Ok((state, pipeline))
}

fn dispatch(text: &str, log_config: &LoggerConfig) -> Result<()> {
    let config = VoiceCommandConfig::from_env()?;
    let (state, pipeline) = assemble(&config, log_config)?;

    let intent = pipeline.process(text);

    println!("{} {}", "intent:".bold(), intent);
    println!("{} {}", "view:".bold(), state.current_view());
    Ok(())
}

async fn listen(sessions: u32, simulate: bool, log_config: &LoggerConfig) -> Result<()> {
    let mut config = VoiceCommandConfig::from_env()?;
    if simulate {
        config.capture_backend = CaptureBackend::Simulated;
    }

    let (state, pipeline) = assemble(&config, log_config)?;
    let mut session = VoiceSession::new(pipeline, state.clone(), Arc::new(ConsoleStatusSink), &config)
        .with_live_source(Arc::new(StdinTranscriptSource::new()));
    let handle = session.handle();

    info!(session_id = %session.id(), sessions, backend = ?config.capture_backend, "Listening");

    for period in 1..=sessions {
        debug!(period, "Starting listening period");
        handle.start_listening()?;
        while session.step().await {
            if !session.is_listening() {
                break;
            }
        }
    }

    handle.shutdown()?;
    session.run().await;

    if let Some(command) = state.last_voice_command() {
        println!("{} {}", "last command:".bold(), command);
    }
    Ok(())
}

fn procedures(category: Option<&str>, urgency: Option<&str>, json: bool) -> Result<()> {
    let urgency = urgency
        .map(|value| Urgency::parse(value).ok_or_else(|| anyhow!("unknown urgency '{}'", value)))
        .transpose()?;

    let catalog = ProcedureCatalog::new();
    let selected: Vec<&Procedure> = catalog
        .all()
        .iter()
        .filter(|p| category.map_or(true, |c| p.category.eq_ignore_ascii_case(c)))
        .filter(|p| urgency.map_or(true, |u| p.urgency == u))
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&selected).context("serializing procedures")?;
        println!("{}", out);
        return Ok(());
    }

    for procedure in selected {
        let urgency = match procedure.urgency {
            Urgency::High => procedure.urgency.as_str().bright_red(),
            Urgency::Medium => procedure.urgency.as_str().bright_yellow(),
        };
        println!(
            "{:<22} {:<32} {:<18} {:<7} {}",
            procedure.id.to_string().bright_white(),
            procedure.name,
            procedure.category,
            urgency,
            procedure.estimated_time
        );
    }
    Ok(())
}

fn translate(phrase: &str, language: &str) -> Result<()> {
    let phrasebook = Phrasebook::new();
    let target = phrasebook
        .language(language)
        .ok_or_else(|| anyhow!("unsupported language '{}'", language))?;

    match phrasebook.translate(phrase, target.code) {
        Some(translation) => println!("{}", translation),
        None => {
            println!("{} {}", "No phrasebook entry for".yellow(), phrase);
            let known = phrasebook.phrases(target.code);
            if !known.is_empty() {
                println!("Known {} phrases:", target.name);
                for entry in known {
                    println!("  {}", entry.source);
                }
            }
        }
    }
    Ok(())
}

fn rules() -> Result<()> {
    let router = CommandRouter::standard()?;
    for (position, rule) in router.rules().iter().enumerate() {
        println!("{:>2}. {:<16} {}", position + 1, rule.intent.to_string().bright_cyan(), rule.pattern.describe());
    }
    Ok(())
}

//! End-to-end dispatch through the pipeline with in-memory collaborators

use std::sync::Arc;

use voice_command_service::*;

struct Harness {
    state: Arc<AppState>,
    alerts: Arc<RecordingAlertSink>,
    status: Arc<RecordingStatusSink>,
    translations: Arc<RecordingTranslationSink>,
    pipeline: CommandPipeline,
}

fn harness() -> Harness {
    let state = Arc::new(AppState::new());
    let alerts = Arc::new(RecordingAlertSink::new());
    let status = Arc::new(RecordingStatusSink::new());
    let translations = Arc::new(RecordingTranslationSink::new());

    let dispatcher = ActionDispatcher::new(DispatchTargets {
        view_state: state.clone(),
        alerts: alerts.clone(),
        status: status.clone(),
    })
    .unwrap()
    .with_translation_sink(translations.clone())
    .with_procedure_lookup(Arc::new(ProcedureCatalog::new()));

    let pipeline = CommandPipeline::new(CommandRouter::standard().unwrap(), dispatcher, state.clone());

    Harness {
        state,
        alerts,
        status,
        translations,
        pipeline,
    }
}

#[test]
fn test_emergency_alert_is_critical_and_sticky() {
    let h = harness();
    let intent = h.pipeline.process("alert emergency on scene");

    assert_eq!(intent, Intent::Alert);
    let alert = h.alerts.last().unwrap();
    assert_eq!(alert.severity, AlertSeverity::Critical);
    assert!(!alert.auto_dismiss);
    assert_eq!(alert.message, "CRITICAL: Emergency situation detected");
    assert_eq!(h.status.last().as_deref(), Some("critical alert shown"));
}

#[test]
fn test_minor_alert_is_warning_and_dismisses() {
    let h = harness();
    let intent = h.pipeline.process("warning minor issue");

    assert_eq!(intent, Intent::Alert);
    let alert = h.alerts.last().unwrap();
    assert_eq!(alert.severity, AlertSeverity::Warning);
    assert!(alert.auto_dismiss);
    assert_eq!(alert.dismiss_time_ms, DEFAULT_DISMISS_TIME_MS);
    assert_eq!(h.status.last().as_deref(), Some("warning alert shown"));
}

#[test]
fn test_translate_switches_view_and_forwards_text() {
    let h = harness();
    h.pipeline.process("translate where does it hurt");

    assert_eq!(h.state.current_view(), View::Translation);
    assert_eq!(h.translations.requests(), vec!["where does it hurt".to_string()]);
    assert_eq!(h.status.last().as_deref(), Some("Translation mode activated"));
}

#[test]
fn test_translate_without_text_still_switches_view() {
    let h = harness();
    h.pipeline.process("translate");

    assert_eq!(h.state.current_view(), View::Translation);
    assert!(h.translations.requests().is_empty());
}

#[test]
fn test_show_procedure_names_match() {
    let h = harness();
    h.pipeline.process("show cardiac arrest protocol");

    assert_eq!(h.status.updates(), vec!["Opening cardiac arrest protocol".to_string()]);
    assert_eq!(h.state.current_view(), View::Home);
}

#[test]
fn test_show_unknown_procedure_is_silent() {
    let h = harness();
    let intent = h.pipeline.process("show something unknown");

    assert_eq!(intent, Intent::ShowProcedure);
    assert!(h.status.updates().is_empty());
    assert!(h.alerts.alerts().is_empty());
}

#[test]
fn test_document_switches_view() {
    let h = harness();
    h.pipeline.process("document patient information");

    assert_eq!(h.state.current_view(), View::Documentation);
    assert_eq!(h.status.last().as_deref(), Some("Documentation mode activated"));
}

#[test]
fn test_check_vitals_only_reports_status() {
    let h = harness();
    h.pipeline.process("check vitals");

    assert_eq!(h.state.current_view(), View::Home);
    assert_eq!(h.status.last().as_deref(), Some("Opening vitals checklist"));
    assert!(h.alerts.alerts().is_empty());
}

#[test]
fn test_unrecognized_and_empty_input() {
    let h = harness();
    assert_eq!(h.pipeline.process("start CPR now"), Intent::Unrecognized);
    assert_eq!(h.pipeline.process(""), Intent::Unrecognized);

    assert_eq!(
        h.status.updates(),
        vec!["Command not recognized".to_string(), "Command not recognized".to_string()]
    );
    assert_eq!(h.state.current_view(), View::Home);
}

#[test]
fn test_checklist_demo_command_routes_to_vitals() {
    let h = harness();
    // "checklist" contains "check"
    assert_eq!(h.pipeline.process("start CPR checklist"), Intent::CheckVitals);
    assert_eq!(h.pipeline.process("start CPR now"), Intent::Unrecognized);

    assert_eq!(
        h.status.updates(),
        vec!["Opening vitals checklist".to_string(), "Command not recognized".to_string()]
    );
}

#[test]
fn test_last_voice_command_is_recorded() {
    let h = harness();
    h.pipeline.process("show trauma assessment");

    assert_eq!(h.state.last_voice_command().as_deref(), Some("show trauma assessment"));
}

#[test]
fn test_dispatch_does_not_depend_on_history() {
    let first = harness();
    first.pipeline.process("alert critical patient");
    first.pipeline.process("warning slippery floor");

    let fresh = harness();
    fresh.pipeline.process("warning slippery floor");

    assert_eq!(first.alerts.last(), fresh.alerts.last());
}

#[test]
fn test_configured_dismiss_times() {
    let state = Arc::new(AppState::new());
    let alerts = Arc::new(RecordingAlertSink::new());
    let config = VoiceCommandConfig {
        alert_dismiss_ms: 3000,
        help_dismiss_ms: 12000,
        ..VoiceCommandConfig::default()
    };

    let dispatcher = ActionDispatcher::new(DispatchTargets {
        view_state: state,
        alerts: alerts.clone(),
        status: Arc::new(RecordingStatusSink::new()),
    })
    .unwrap()
    .with_config(&config);

    dispatcher.execute(Intent::Alert, "alert");
    dispatcher.execute(Intent::Help, "help");

    let times: Vec<_> = alerts.alerts().iter().map(|a| a.dismiss_time_ms).collect();
    assert_eq!(times, vec![3000, 12000]);
}

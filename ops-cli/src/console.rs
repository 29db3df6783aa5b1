// Console renderings of the assistant's output collaborators
use colored::*;
use field_reference::Phrasebook;
use voice_command_service::{AlertRequest, AlertSeverity, AlertSink, StatusSink, TranslationSink};

#[derive(Debug, Default)]
pub struct ConsoleStatusSink;

impl StatusSink for ConsoleStatusSink {
    fn update_status(&self, text: &str) {
        println!("{} {}", "[status]".dimmed(), text);
    }
}

/// Prints alert banners; auto-dismiss is reported, not timed
#[derive(Debug, Default)]
pub struct ConsoleAlertSink;

impl ConsoleAlertSink {
    pub fn render(alert: &AlertRequest) -> String {
        let label = format!("[{}]", alert.severity.to_string().to_uppercase());
        let label = match alert.severity {
            AlertSeverity::Critical => label.bright_red().bold(),
            AlertSeverity::Warning => label.bright_yellow().bold(),
            AlertSeverity::Info => label.bright_blue(),
        };

        if alert.auto_dismiss {
            format!("{} {} (dismisses after {} ms)", label, alert.message, alert.dismiss_time_ms)
        } else {
            format!("{} {}", label, alert.message)
        }
    }
}

impl AlertSink for ConsoleAlertSink {
    fn show(&self, alert: AlertRequest) {
        println!("{}", Self::render(&alert));
    }
}

/// Shows the phrasebook entry for text spoken after "translate"
#[derive(Debug)]
pub struct ConsoleTranslationSink {
    phrasebook: Phrasebook,
    language: String,
}

impl ConsoleTranslationSink {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            phrasebook: Phrasebook::new(),
            language: language.into(),
        }
    }

    pub fn render(&self, text: &str) -> String {
        let language = self
            .phrasebook
            .language(&self.language)
            .map(|l| l.name)
            .unwrap_or(self.language.as_str());

        match self.phrasebook.translate(text, &self.language) {
            Some(translation) => format!("{} -> {}: {}", text, language, translation.bright_green()),
            None => format!("{} -> {}: {}", text, language, "no phrasebook entry".dimmed()),
        }
    }
}

impl TranslationSink for ConsoleTranslationSink {
    fn translate(&self, text: &str) {
        println!("{}", self.render(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_render_uses_phrasebook() {
        colored::control::set_override(false);
        let sink = ConsoleTranslationSink::new("es");

        assert_eq!(sink.render("where does it hurt"), "where does it hurt -> Spanish: ¿Dónde te duele?");
        assert_eq!(
            sink.render("is the scene safe"),
            "is the scene safe -> Spanish: no phrasebook entry"
        );
    }

    #[test]
    fn test_alert_render_mentions_dismissal() {
        colored::control::set_override(false);

        let sticky = AlertRequest::new("CRITICAL: Emergency situation detected", AlertSeverity::Critical)
            .with_auto_dismiss(false);
        assert_eq!(
            ConsoleAlertSink::render(&sticky),
            "[CRITICAL] CRITICAL: Emergency situation detected"
        );

        let warning = AlertRequest::new("Safety warning activated", AlertSeverity::Warning);
        assert_eq!(
            ConsoleAlertSink::render(&warning),
            "[WARNING] Safety warning activated (dismisses after 5000 ms)"
        );
    }
}

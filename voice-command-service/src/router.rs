use regex::{Regex, RegexBuilder};

use crate::error::{VoiceError, VoiceResult};
use crate::intent::Intent;

/// Text test applied to a transcript. Both forms ignore case.
#[derive(Debug, Clone)]
pub enum RulePattern {
    /// Matches when any keyword occurs as a substring
    Keywords(Vec<String>),
    /// Matches when the expression finds a match anywhere in the transcript
    Regex(Regex),
}

impl RulePattern {
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RulePattern::Keywords(
            keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        )
    }

    pub fn regex(pattern: &str) -> VoiceResult<Self> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(RulePattern::Regex)
            .map_err(|source| VoiceError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// `lowered` must be the lowercased transcript; regexes run on the original.
    fn is_match(&self, transcript: &str, lowered: &str) -> bool {
        match self {
            RulePattern::Keywords(keywords) => keywords.iter().any(|k| lowered.contains(k.as_str())),
            RulePattern::Regex(regex) => regex.is_match(transcript),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RulePattern::Keywords(keywords) => keywords.join("|"),
            RulePattern::Regex(regex) => format!("/{}/i", regex.as_str()),
        }
    }
}

/// One row of the routing table
#[derive(Debug, Clone)]
pub struct CommandRule {
    pub pattern: RulePattern,
    pub intent: Intent,
}

impl CommandRule {
    pub fn new(pattern: RulePattern, intent: Intent) -> Self {
        Self { pattern, intent }
    }
}

/// Ordered, first-match-wins keyword router.
///
/// Rule order is the tie-break: "please show and help" resolves to
/// `ShowProcedure` because that rule precedes `Help`.
#[derive(Debug, Clone)]
pub struct CommandRouter {
    rules: Vec<CommandRule>,
}

impl CommandRouter {
    pub fn new(rules: Vec<CommandRule>) -> Self {
        Self { rules }
    }

    /// The six built-in field commands, in priority order
    pub fn standard() -> VoiceResult<Self> {
        Ok(Self::new(vec![
            CommandRule::new(RulePattern::regex("show|open|display")?, Intent::ShowProcedure),
            CommandRule::new(RulePattern::regex("translate")?, Intent::Translate),
            CommandRule::new(RulePattern::regex("document|record")?, Intent::Document),
            CommandRule::new(RulePattern::regex("alert|warning")?, Intent::Alert),
            CommandRule::new(RulePattern::regex("check|vitals")?, Intent::CheckVitals),
            CommandRule::new(RulePattern::regex("help|assist")?, Intent::Help),
        ]))
    }

    /// Intent of the first rule whose pattern matches, else `Unrecognized`.
    ///
    /// Blank transcripts never match.
    pub fn match_transcript(&self, transcript: &str) -> Intent {
        if transcript.trim().is_empty() {
            return Intent::Unrecognized;
        }
        let lowered = transcript.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(transcript, &lowered))
            .map_or(Intent::Unrecognized, |rule| rule.intent)
    }

    pub fn rules(&self) -> &[CommandRule] {
        &self.rules
    }
}

//! Field translation phrasebook
//!
//! Canned patient-interview questions with their translations. Lookups are
//! exact phrase matches after normalisation, not machine translation.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages most often needed on EMS calls
pub static LANGUAGES: &[Language] = &[
    Language { code: "es", name: "Spanish" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "fr", name: "French" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
];

pub const DEFAULT_LANGUAGE: &str = "es";

static SPANISH: &[(&str, &str)] = &[
    ("What is your name?", "¿Cómo te llamas?"),
    ("Where does it hurt?", "¿Dónde te duele?"),
    ("Are you allergic to any medications?", "¿Eres alérgico a algún medicamento?"),
    ("Can you breathe?", "¿Puedes respirar?"),
    ("Rate your pain from 1 to 10", "Califica tu dolor del 1 al 10"),
    ("When did this start?", "¿Cuándo empezó esto?"),
    ("Do you have any medical conditions?", "¿Tienes alguna condición médica?"),
    ("Are you taking any medications?", "¿Estás tomando algún medicamento?"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhraseEntry {
    pub source: &'static str,
    pub translation: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Phrasebook;

impl Phrasebook {
    pub fn new() -> Self {
        Self
    }

    pub fn languages(&self) -> &'static [Language] {
        LANGUAGES
    }

    pub fn language(&self, code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
    }

    /// Phrases available for a language; only Spanish is stocked so far
    pub fn phrases(&self, code: &str) -> Vec<PhraseEntry> {
        Self::table(code)
            .iter()
            .map(|&(source, translation)| PhraseEntry { source, translation })
            .collect()
    }

    /// Translate a phrase; case, surrounding whitespace and trailing
    /// punctuation are ignored, so a spoken "where does it hurt" finds
    /// "Where does it hurt?".
    pub fn translate(&self, phrase: &str, code: &str) -> Option<&'static str> {
        let wanted = normalize(phrase);
        if wanted.is_empty() {
            return None;
        }
        Self::table(code)
            .iter()
            .find(|(source, _)| normalize(source) == wanted)
            .map(|(_, translation)| *translation)
    }

    fn table(code: &str) -> &'static [(&'static str, &'static str)] {
        if code.eq_ignore_ascii_case("es") {
            SPANISH
        } else {
            &[]
        }
    }
}

fn normalize(phrase: &str) -> String {
    phrase
        .trim()
        .trim_end_matches(|c: char| c == '?' || c == '.' || c == '!')
        .trim()
        .to_lowercase()
}

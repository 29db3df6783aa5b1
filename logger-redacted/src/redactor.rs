use regex::Regex;
use lazy_static::lazy_static;
use sha2::{Sha256, Digest};
use base64::{Engine as _, engine::general_purpose};

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"(?:\+1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap();
    static ref SSN_REGEX: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    static ref DATE_REGEX: Regex = Regex::new(r"\b(?:\d{1,2}/\d{1,2}/\d{2,4}|\d{4}-\d{2}-\d{2})\b").unwrap();
    static ref MRN_REGEX: Regex = Regex::new(r"(?i)\bMRN[-\s]?(\d+)\b").unwrap();
    static ref NAME_REGEX: Regex = Regex::new(r"(?i)\b(name is|named)\s+[a-z'-]+").unwrap();
}

/// Redaction switches for transcript text
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_phones: bool,
    pub redact_ssn: bool,
    pub redact_dates: bool,
    pub redact_record_numbers: bool,
    pub redact_names: bool,
    pub hash_for_correlation: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_phones: true,
            redact_ssn: true,
            redact_dates: true,
            redact_record_numbers: true,
            redact_names: true,
            hash_for_correlation: false,
        }
    }
}

/// Strips PHI-like fragments from transcripts before they are logged.
///
/// SSNs are redacted ahead of phone numbers so `123-45-6789` is never
/// half-consumed by the phone pattern.
#[derive(Debug, Clone, Default)]
pub struct TranscriptRedactor {
    config: RedactionConfig,
}

impl TranscriptRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    /// Redactor that leaves text untouched, for when redaction is turned off
    pub fn disabled() -> Self {
        Self::new(RedactionConfig {
            redact_phones: false,
            redact_ssn: false,
            redact_dates: false,
            redact_record_numbers: false,
            redact_names: false,
            hash_for_correlation: false,
        })
    }

    pub fn with_hash_correlation(mut self, enabled: bool) -> Self {
        self.config.hash_for_correlation = enabled;
        self
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_ssn {
            result = self.redact_ssn(&result);
        }

        if self.config.redact_phones {
            result = self.redact_phones(&result);
        }

        if self.config.redact_dates {
            result = self.redact_dates(&result);
        }

        if self.config.redact_record_numbers {
            result = self.redact_record_numbers(&result);
        }

        if self.config.redact_names {
            result = NAME_REGEX.replace_all(&result, "$1 [NAME]").to_string();
        }

        result
    }

    fn redact_phones(&self, text: &str) -> String {
        PHONE_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("PHONE[{}]", self.hash_value(&caps[0]))
            } else {
                "(***) ***-****".to_string()
            }
        }).to_string()
    }

    fn redact_ssn(&self, text: &str) -> String {
        SSN_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("SSN[{}]", self.hash_value(&caps[0]))
            } else {
                "***-**-****".to_string()
            }
        }).to_string()
    }

    fn redact_dates(&self, text: &str) -> String {
        DATE_REGEX.replace_all(text, |caps: &regex::Captures| {
            caps[0]
                .chars()
                .map(|c| if c.is_ascii_digit() { '*' } else { c })
                .collect::<String>()
        }).to_string()
    }

    fn redact_record_numbers(&self, text: &str) -> String {
        MRN_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("MRN[{}]", self.hash_value(&caps[1]))
            } else {
                format!("MRN{}", "*".repeat(caps[1].len()))
            }
        }).to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        general_purpose::STANDARD.encode(&result[..8]) // Use first 8 bytes for shorter hash
    }
}

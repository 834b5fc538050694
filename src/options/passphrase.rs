//! Passphrase options: normalization and validation.
//!
//! Unlike passwords, an out-of-range word count is rejected by the
//! generator rather than clamped. [`normalize`] still clamps so that
//! stored settings always load into something displayable.

use super::validation::{check_whole_in_range, round_and_clamp, ValidationOutcome};
use serde::{Deserialize, Serialize};

/// Fewest words in a passphrase.
pub const MIN_WORDS: usize = 3;
/// Most words in a passphrase.
pub const MAX_WORDS: usize = 10;
/// Word count used when none is given.
pub const DEFAULT_WORDS: usize = 5;
/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = "-";

/// How words are capitalized.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Capitalization {
    /// All words stay lowercase.
    #[default]
    None,
    /// Upper-case the first letter of every word.
    FirstOfEach,
    /// Upper-case the first letter of one randomly chosen word.
    OneRandom,
}

impl Capitalization {
    /// Parses the kebab-case name used in settings files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Capitalization::None),
            "first-of-each" => Some(Capitalization::FirstOfEach),
            "one-random" => Some(Capitalization::OneRandom),
            _ => None,
        }
    }
}

/// Caller-supplied passphrase options, any field of which may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PassphraseOptions {
    /// Requested number of words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<f64>,
    /// Joins the words; may be empty or several characters long.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Capitalization mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capitalization: Option<Capitalization>,
    /// Append two digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_digits: Option<bool>,
    /// Append one symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_symbol: Option<bool>,
}

impl PassphraseOptions {
    /// Options with only the word count set.
    pub fn with_words(word_count: usize) -> Self {
        Self {
            word_count: Some(word_count as f64),
            ..Default::default()
        }
    }
}

/// Fully resolved passphrase configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassphraseConfig {
    /// Number of words, within `[MIN_WORDS, MAX_WORDS]`.
    pub word_count: usize,
    /// Joins the words.
    pub separator: String,
    /// Capitalization mode.
    pub capitalization: Capitalization,
    /// Append two digits.
    pub append_digits: bool,
    /// Append one symbol.
    pub append_symbol: bool,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        normalize(&PassphraseOptions::default())
    }
}

impl From<PassphraseConfig> for PassphraseOptions {
    fn from(config: PassphraseConfig) -> Self {
        Self {
            word_count: Some(config.word_count as f64),
            separator: Some(config.separator),
            capitalization: Some(config.capitalization),
            append_digits: Some(config.append_digits),
            append_symbol: Some(config.append_symbol),
        }
    }
}

/// Resolves defaults and clamps the word count. Never fails.
pub fn normalize(options: &PassphraseOptions) -> PassphraseConfig {
    let word_count = options
        .word_count
        .map(|w| round_and_clamp(w, MIN_WORDS, MAX_WORDS, DEFAULT_WORDS))
        .unwrap_or(DEFAULT_WORDS);

    PassphraseConfig {
        word_count,
        separator: options
            .separator
            .clone()
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
        capitalization: options.capitalization.unwrap_or_default(),
        append_digits: options.append_digits.unwrap_or(false),
        append_symbol: options.append_symbol.unwrap_or(false),
    }
}

/// Reports every rule the raw options break.
pub fn validate(options: &PassphraseOptions) -> ValidationOutcome {
    let mut errors = Vec::new();
    let word_count = options.word_count.unwrap_or(DEFAULT_WORDS as f64);

    check_whole_in_range(&mut errors, "word count", word_count, MIN_WORDS, MAX_WORDS);

    ValidationOutcome::from_errors(errors)
}

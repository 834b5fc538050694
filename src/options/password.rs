//! Password options: normalization and validation.
//!
//! Password input is never rejected. [`normalize`] resolves every
//! missing field to its default and clamps the length, so malformed
//! input degrades to the nearest usable configuration. [`validate`]
//! reports what was wrong with the raw input for callers that want to
//! show feedback before normalizing.

use super::validation::{check_whole_in_range, round_and_clamp, ValidationOutcome};
use crate::charset::CharacterClasses;
use serde::{Deserialize, Serialize};

/// Shortest password length.
pub const MIN_LENGTH: usize = 8;
/// Longest password length.
pub const MAX_LENGTH: usize = 128;
/// Length used when none is given.
pub const DEFAULT_LENGTH: usize = 16;

/// Partial class selection; each unset flag takes its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassOptions {
    /// Include `a-z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<bool>,
    /// Include `A-Z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase: Option<bool>,
    /// Include `0-9`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<bool>,
    /// Include punctuation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<bool>,
}

impl ClassOptions {
    /// Resolves unset flags against the default selection.
    pub fn resolve(&self) -> CharacterClasses {
        let defaults = CharacterClasses::default();
        CharacterClasses {
            lowercase: self.lowercase.unwrap_or(defaults.lowercase),
            uppercase: self.uppercase.unwrap_or(defaults.uppercase),
            digits: self.digits.unwrap_or(defaults.digits),
            symbols: self.symbols.unwrap_or(defaults.symbols),
        }
    }
}

impl From<CharacterClasses> for ClassOptions {
    fn from(classes: CharacterClasses) -> Self {
        Self {
            lowercase: Some(classes.lowercase),
            uppercase: Some(classes.uppercase),
            digits: Some(classes.digits),
            symbols: Some(classes.symbols),
        }
    }
}

/// Caller-supplied password options, any field of which may be absent.
///
/// `length` is kept as a float so fractional or out-of-range input
/// reaches validation intact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    /// Requested length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Drop look-alike characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_ambiguous: Option<bool>,
    /// Guarantee one character from each enabled class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_each_class: Option<bool>,
    /// Class toggles.
    pub classes: ClassOptions,
}

impl PasswordOptions {
    /// Options with only the length set.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: Some(length as f64),
            ..Default::default()
        }
    }
}

/// Fully resolved password configuration.
///
/// `length` is always within `[MIN_LENGTH, MAX_LENGTH]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Number of characters to produce.
    pub length: usize,
    /// Drop look-alike characters.
    pub exclude_ambiguous: bool,
    /// Guarantee one character from each enabled class.
    pub require_each_class: bool,
    /// Enabled classes.
    pub classes: CharacterClasses,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        normalize(&PasswordOptions::default())
    }
}

impl From<PasswordConfig> for PasswordOptions {
    fn from(config: PasswordConfig) -> Self {
        Self {
            length: Some(config.length as f64),
            classes: config.classes.into(),
            exclude_ambiguous: Some(config.exclude_ambiguous),
            require_each_class: Some(config.require_each_class),
        }
    }
}

/// Resolves defaults and clamps the length. Never fails.
///
/// The result may still select zero classes; check with [`validate`].
pub fn normalize(options: &PasswordOptions) -> PasswordConfig {
    let length = options
        .length
        .map(|l| round_and_clamp(l, MIN_LENGTH, MAX_LENGTH, DEFAULT_LENGTH))
        .unwrap_or(DEFAULT_LENGTH);

    PasswordConfig {
        length,
        classes: options.classes.resolve(),
        exclude_ambiguous: options.exclude_ambiguous.unwrap_or(true),
        require_each_class: options.require_each_class.unwrap_or(true),
    }
}

/// Reports every rule the raw options break.
pub fn validate(options: &PasswordOptions) -> ValidationOutcome {
    let mut errors = Vec::new();
    let length = options.length.unwrap_or(DEFAULT_LENGTH as f64);
    let classes = options.classes.resolve();

    check_whole_in_range(&mut errors, "length", length, MIN_LENGTH, MAX_LENGTH);

    if !classes.any() {
        errors.push("at least one character class must be enabled".to_string());
    }

    let require_each = options.require_each_class.unwrap_or(true);
    let class_count = classes.count();
    if require_each && length < class_count as f64 {
        errors.push(format!(
            "length must be at least {class_count} to include every enabled class"
        ));
    }

    ValidationOutcome::from_errors(errors)
}

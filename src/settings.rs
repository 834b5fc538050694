//! Settings file persistence.
//!
//! Only configuration is ever stored, never a generated secret. Loading
//! is lenient: each known field is read on its own, and a field with
//! the wrong type or an unknown value falls back to its default instead
//! of failing the whole file. Loaded options are normalized before they
//! are returned.
//!
//! ```toml
//! [password]
//! length = 20
//! exclude_ambiguous = true
//! require_each_class = true
//!
//! [password.classes]
//! symbols = true
//!
//! [passphrase]
//! word_count = 6
//! separator = "."
//! capitalization = "one-random"
//! ```

use crate::options::passphrase::{self, Capitalization};
use crate::options::password;
use crate::options::{
    ClassOptions, PassphraseConfig, PassphraseOptions, PasswordConfig, PasswordOptions,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use toml::{Table, Value};

/// Settings file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    /// Serialization or writing failed.
    #[error("failed to write config file: {0}")]
    WriteError(String),
}

/// Stored generator settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Password settings.
    pub password: PasswordConfig,
    /// Passphrase settings.
    pub passphrase: PassphraseConfig,
}

impl SettingsFile {
    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from TOML text.
    ///
    /// Only text that is not TOML at all is an error.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table = content
            .parse::<Table>()
            .map_err(|e: toml::de::Error| ConfigError::ParseError(e.to_string()))?;

        let password_options = section(&table, "password")
            .map(password_options_from_table)
            .unwrap_or_default();
        let passphrase_options = section(&table, "passphrase")
            .map(passphrase_options_from_table)
            .unwrap_or_default();

        Ok(Self {
            password: password::normalize(&password_options),
            passphrase: passphrase::normalize(&passphrase_options),
        })
    }

    /// Serializes settings to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Writes settings to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        tracing::info!(path = %path.as_ref().display(), "Settings saved");
        Ok(())
    }
}

/// Reads password options from a TOML table, skipping bad fields.
pub fn password_options_from_table(table: &Table) -> PasswordOptions {
    let classes = section(table, "classes")
        .map(|classes| ClassOptions {
            lowercase: bool_field(classes, "lowercase"),
            uppercase: bool_field(classes, "uppercase"),
            digits: bool_field(classes, "digits"),
            symbols: bool_field(classes, "symbols"),
        })
        .unwrap_or_default();

    PasswordOptions {
        length: number_field(table, "length"),
        exclude_ambiguous: bool_field(table, "exclude_ambiguous"),
        require_each_class: bool_field(table, "require_each_class"),
        classes,
    }
}

/// Reads passphrase options from a TOML table, skipping bad fields.
pub fn passphrase_options_from_table(table: &Table) -> PassphraseOptions {
    let capitalization = string_field(table, "capitalization").and_then(|name| {
        let parsed = Capitalization::from_name(&name);
        if parsed.is_none() {
            tracing::debug!(value = %name, "Unknown capitalization, using default");
        }
        parsed
    });

    PassphraseOptions {
        word_count: number_field(table, "word_count"),
        separator: string_field(table, "separator"),
        capitalization,
        append_digits: bool_field(table, "append_digits"),
        append_symbol: bool_field(table, "append_symbol"),
    }
}

fn section<'a>(table: &'a Table, key: &str) -> Option<&'a Table> {
    match table.get(key)? {
        Value::Table(inner) => Some(inner),
        other => {
            ignored(key, other);
            None
        }
    }
}

fn number_field(table: &Table, key: &str) -> Option<f64> {
    match table.get(key)? {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        other => {
            ignored(key, other);
            None
        }
    }
}

fn bool_field(table: &Table, key: &str) -> Option<bool> {
    match table.get(key)? {
        Value::Boolean(b) => Some(*b),
        other => {
            ignored(key, other);
            None
        }
    }
}

fn string_field(table: &Table, key: &str) -> Option<String> {
    match table.get(key)? {
        Value::String(s) => Some(s.clone()),
        other => {
            ignored(key, other);
            None
        }
    }
}

fn ignored(key: &str, value: &Value) {
    tracing::debug!(
        field = key,
        found = value.type_str(),
        "Ignoring settings field with unexpected type"
    );
}

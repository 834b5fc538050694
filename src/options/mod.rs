//! Option resolution and validation.
//!
//! Options are the caller-facing, partially filled shape of a request.
//! Configs are what the engines consume: every field resolved, every
//! number inside its bounds. Nothing here touches randomness.

pub mod passphrase;
pub mod password;
mod validation;

pub use passphrase::{Capitalization, PassphraseConfig, PassphraseOptions};
pub use password::{ClassOptions, PasswordConfig, PasswordOptions};
pub use validation::ValidationOutcome;

/// Resolves password options into a config. Never fails.
pub fn normalize_password_options(options: &PasswordOptions) -> PasswordConfig {
    password::normalize(options)
}

/// Validates raw password options.
pub fn validate_password_options(options: &PasswordOptions) -> ValidationOutcome {
    password::validate(options)
}

/// Resolves passphrase options into a config. Never fails.
pub fn normalize_passphrase_options(options: &PassphraseOptions) -> PassphraseConfig {
    passphrase::normalize(options)
}

/// Validates raw passphrase options.
pub fn validate_passphrase_options(options: &PassphraseOptions) -> ValidationOutcome {
    passphrase::validate(options)
}

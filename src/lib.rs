//! Secret Forge Library
//!
//! Generates passwords and passphrases from a declarative configuration,
//! drawing only on a caller-supplied source of uniform random bytes.
//!
//! # Architecture
//!
//! ```text
//! options → normalize/validate → engine → output
//!                                  ↓
//!              charset / word list, sampling (rejection + shuffle)
//!                                  ↓
//!                            RandomSource
//! ```
//!
//! # Design Principles
//!
//! - **No modulo bias**: every choice goes through rejection sampling
//! - **Injectable randomness**: the OS CSPRNG is only a default binding
//! - **Degrade, don't fail**: password options are clamped, never rejected
//! - **Nothing persists**: configs and alphabets live for a single call
//!
//! # Example
//!
//! ```
//! use secret_forge::{
//!     estimate_entropy, generate_passphrase_with, generate_password_with,
//!     PassphraseOptions, PasswordOptions, SeededSource,
//! };
//!
//! let mut random = SeededSource::from_label("docs");
//!
//! let options = PasswordOptions::with_length(20);
//! let password = generate_password_with(&options, &mut random).unwrap();
//! assert_eq!(password.chars().count(), 20);
//! assert!(estimate_entropy(&options) > 100.0);
//!
//! let passphrase = generate_passphrase_with(&PassphraseOptions::with_words(4), &mut random).unwrap();
//! assert_eq!(passphrase.split('-').count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod engine;
mod error;
pub mod options;
pub mod random;
pub mod sampling;
pub mod settings;

// Re-export commonly used types at crate root
pub use charset::{build_alphabet, Alphabet, CharacterClass, CharacterClasses};
pub use engine::WordList;
pub use error::{Error, Result};
pub use options::{
    normalize_passphrase_options, normalize_password_options, validate_passphrase_options,
    validate_password_options, Capitalization, ClassOptions, PassphraseConfig, PassphraseOptions,
    PasswordConfig, PasswordOptions, ValidationOutcome,
};
pub use random::{OsRandom, RandomSource, ReplaySource, RngSource, SeededSource};
pub use settings::{ConfigError, SettingsFile};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generates a password using the OS CSPRNG.
pub fn generate_password(options: &PasswordOptions) -> Result<String> {
    generate_password_with(options, &mut OsRandom)
}

/// Generates a password from the given random source.
pub fn generate_password_with<S>(options: &PasswordOptions, random: &mut S) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    engine::password::generate(options, random)
}

/// Generates a passphrase using the OS CSPRNG.
pub fn generate_passphrase(options: &PassphraseOptions) -> Result<String> {
    generate_passphrase_with(options, &mut OsRandom)
}

/// Generates a passphrase from the given random source.
pub fn generate_passphrase_with<S>(options: &PassphraseOptions, random: &mut S) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    engine::passphrase::generate(options, random)
}

/// Password entropy in bits. Deterministic, never negative.
pub fn estimate_entropy(options: &PasswordOptions) -> f64 {
    engine::password::estimate_entropy(options)
}

/// Passphrase entropy in bits.
///
/// Fails like [`generate_passphrase`] on an invalid word count.
pub fn estimate_passphrase_entropy(options: &PassphraseOptions) -> Result<f64> {
    engine::passphrase::estimate_entropy(options)
}

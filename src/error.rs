//! Error types for secret generation.

use thiserror::Error;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the generation engines.
#[derive(Debug, Error)]
pub enum Error {
    /// The sampler was asked for an index in an empty range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The composed alphabet has no characters left after filtering.
    #[error("no characters available for the selected options")]
    NoCharactersAvailable,

    /// Every enabled class filtered down to nothing.
    #[error("no character classes available to satisfy require-each-class")]
    NoClassesAvailable,

    /// The passphrase configuration was rejected before generation.
    #[error("invalid configuration: {}", .0.join("; "))]
    InvalidConfiguration(Vec<String>),

    /// The underlying byte source failed.
    #[error("random source failure: {0}")]
    RandomSource(String),
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        Error::RandomSource(err.to_string())
    }
}

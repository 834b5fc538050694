//! Random byte sources.
//!
//! The engines never reach for a global RNG. Every call takes a
//! [`RandomSource`], with [`OsRandom`] as the default binding.

mod seeded;
mod source;

pub use seeded::SeededSource;
pub use source::{OsRandom, RandomSource, ReplaySource, RngSource};

//! Unbiased sampling primitives.
//!
//! Everything that turns random bytes into a choice goes through
//! [`sample_index`], including the shuffle.

mod shuffle;
mod uniform;

pub use shuffle::shuffle;
pub use uniform::{pick, sample_index};

//! Fisher-Yates shuffle over the uniform sampler.

use super::uniform::sample_index;
use crate::error::Result;
use crate::random::RandomSource;

/// Permutes `items` in place.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen position at or below it. Slices of length 0 or 1
/// are left untouched and consume no randomness.
pub fn shuffle<T, S>(items: &mut [T], random: &mut S) -> Result<()>
where
    S: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = sample_index(random, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

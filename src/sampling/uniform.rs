//! Unbiased index sampling by rejection.
//!
//! Draws are taken in whole bytes. For a range of size `n` the sampler
//! reads the fewest bytes `k` with `256^k >= n`, treats them as a
//! big-endian integer, and only accepts values below the largest
//! multiple of `n` that fits in `256^k`. Accepted values are reduced
//! modulo `n`, so every index owns exactly the same number of raw values.
//!
//! # Latency
//!
//! Rejection is bounded in expectation (fewer than two attempts on
//! average for any `n`) but has no hard cap. A source that only ever
//! emits rejected values keeps the sampler spinning; this is a latency
//! concern, never a correctness one.

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Largest number of bytes combined into one draw.
const MAX_DRAW_BYTES: usize = std::mem::size_of::<usize>();

/// Attempts after which a run of rejections is reported.
const REJECTION_WARN_THRESHOLD: u32 = 64;

/// Returns an index in `[0, n)` with every value equally likely.
///
/// `n == 1` returns 0 without touching the source.
pub fn sample_index<S>(random: &mut S, n: usize) -> Result<usize>
where
    S: RandomSource + ?Sized,
{
    if n == 0 {
        return Err(Error::InvalidArgument("sample range must be non-empty"));
    }
    if n == 1 {
        return Ok(0);
    }

    let width = draw_width(n);
    let space = 1u128 << (8 * width);
    let mut buf = [0u8; MAX_DRAW_BYTES];
    let mut attempts = 0u32;

    loop {
        random.fill_bytes(&mut buf[..width])?;
        let value = buf[..width]
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b));

        if let Some(index) = accept(value, space, n) {
            return Ok(index);
        }

        attempts += 1;
        if attempts == REJECTION_WARN_THRESHOLD {
            tracing::warn!(
                range = n,
                attempts,
                "Random source keeps producing rejected draws"
            );
        }
    }
}

/// Picks one element of `items` uniformly.
pub fn pick<'a, T, S>(random: &mut S, items: &'a [T]) -> Result<&'a T>
where
    S: RandomSource + ?Sized,
{
    let index = sample_index(random, items.len())?;
    Ok(&items[index])
}

/// Number of bytes needed so that `256^k >= n`.
fn draw_width(n: usize) -> usize {
    let mut width = 1;
    let mut space: u128 = 256;
    while space < n as u128 {
        width += 1;
        space <<= 8;
    }
    width
}

/// Maps a raw draw in `[0, space)` to an index, or rejects it.
///
/// When `n` divides `space` every value is accepted.
fn accept(value: u128, space: u128, n: usize) -> Option<usize> {
    let n = n as u128;
    let limit = if space % n == 0 { space } else { (space / n) * n };
    (value < limit).then(|| (value % n) as usize)
}

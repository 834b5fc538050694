//! Byte source abstraction.
//!
//! Every sampling operation in the crate draws from a [`RandomSource`].
//! Production callers use [`OsRandom`]; tests inject a deterministic
//! source instead.

use crate::error::Result;
use rand_core::{OsRng, RngCore};

/// A supplier of uniformly distributed random bytes.
///
/// Sources are borrowed mutably for the duration of a generation call,
/// so one source can never be shared between concurrent calls.
pub trait RandomSource {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Returns `len` fresh random bytes.
    fn bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}

/// The operating system CSPRNG.
///
/// This is the default source for all generation entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Adapts any [`RngCore`] generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    inner: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wraps a generator.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.inner.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Replays a fixed byte pattern forever.
///
/// Not random in any sense; it exists so callers can pin the exact
/// bytes a generation call consumes.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    pattern: Vec<u8>,
    position: usize,
    consumed: u64,
}

impl ReplaySource {
    /// Creates a source cycling through `pattern`.
    ///
    /// An empty pattern replays the byte 0.
    pub fn new(pattern: Vec<u8>) -> Self {
        let pattern = if pattern.is_empty() { vec![0] } else { pattern };
        Self {
            pattern,
            position: 0,
            consumed: 0,
        }
    }

    /// Creates a source that always yields `byte`.
    pub fn constant(byte: u8) -> Self {
        Self::new(vec![byte])
    }

    /// Total bytes handed out so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

impl RandomSource for ReplaySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        for byte in dest.iter_mut() {
            *byte = self.pattern[self.position];
            self.position = (self.position + 1) % self.pattern.len();
        }
        self.consumed += dest.len() as u64;
        Ok(())
    }
}

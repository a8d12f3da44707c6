//! Injectable randomness.
//!
//! Every generation call takes a [`RandomSource`] instead of reaching for
//! ambient entropy, so a fixed sequence reproduces a palette exactly.
//! Production callers use [`ThreadSource`] (OS entropy) or [`SeededSource`]
//! (reproducible); tests use [`FixedSequence`].

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A uniform random source over [0, 1).
pub trait RandomSource {
    /// Next uniform value in [0, 1).
    fn next_unit(&mut self) -> f64;

    /// Random integer in [0, n) — the `floor(random() * n)` idiom.
    fn index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "index() needs a non-empty range");
        ((self.next_unit() * n as f64) as usize).min(n - 1)
    }

    /// Random float in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        (hi - lo).mul_add(self.next_unit(), lo)
    }

    /// Pick a random element from a non-empty slice.
    fn pick<'a, T>(&mut self, slice: &'a [T]) -> &'a T {
        &slice[self.index(slice.len())]
    }
}

// ─── Production sources ──────────────────────────────────────────────────────

/// Thread-local OS entropy.
#[derive(Debug, Clone)]
pub struct ThreadSource(ThreadRng);

impl ThreadSource {
    #[must_use]
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for ThreadSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadSource {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Deterministic source seeded from a `u64` — the same seed always yields
/// the same palette sequence.
#[derive(Debug, Clone)]
pub struct SeededSource(StdRng);

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

// ─── Test source ─────────────────────────────────────────────────────────────

/// Replays a fixed sequence of unit values, cycling when exhausted.
///
/// Lets a test pin every draw a strategy makes.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    pos: usize,
}

impl FixedSequence {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "FixedSequence needs at least one value");
        Self { values, pos: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// src/utils/random.rs
//! # Random Source
//!
//! Every random decision made during generation goes through [`RandomSource::next`],
//! which draws from an *inclusive* range. Index selection is written against
//! `len - 1`, so the upper bound has to be reachable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer generator over an inclusive range.
pub trait RandomSource {
    /// Returns a value uniformly distributed over `lo..=hi`.
    ///
    /// A degenerate range (`hi <= lo`) always yields `lo`.
    fn next(&mut self, lo: i32, hi: i32) -> i32;

    /// Picks an index into a collection of `len` elements.
    fn index(&mut self, len: usize) -> usize {
        let hi = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
        usize::try_from(self.next(0, hi)).unwrap_or(0)
    }
}

/// `StdRng`-backed source. Seeding it makes a whole level reproducible.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

/// Replays a fixed list of draws, clamped into the requested range.
/// Falls back to `lo` once the script runs out.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedRandom {
    draws: std::collections::VecDeque<i32>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(draws: impl IntoIterator<Item = i32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next(&mut self, lo: i32, hi: i32) -> i32 {
        match self.draws.pop_front() {
            Some(value) => value.clamp(lo, hi.max(lo)),
            None => lo,
        }
    }
}

//! Injectable random source for the sampling combinator.
//!
//! There is no process-wide generator: callers construct a [`Randomizer`]
//! (or their own [`RandomSource`]) and hand it to [`crate::shuffle`] behind an
//! `Arc`. Every draw takes the lock for exactly one value, so concurrent
//! traversals never interleave inside a draw.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Thread-safe source of uniform integers.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[0, maximum)`. `maximum` is always at least 1.
    fn next_below(&self, maximum: usize) -> usize;
}

/// Configuration for [`Randomizer::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomizerConfig {
    /// Fixed seed for reproducible draws; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl RandomizerConfig {
    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Lock-guarded [`StdRng`].
#[derive(Debug)]
pub struct Randomizer {
    rng: Mutex<StdRng>,
}

impl Randomizer {
    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for tests and reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Build from configuration.
    pub fn from_config(config: &RandomizerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl RandomSource for Randomizer {
    fn next_below(&self, maximum: usize) -> usize {
        self.rng.lock().gen_range(0..maximum)
    }
}

//! Deterministic random number generation for trial draws.
//!
//! Implements PCG (Permuted Congruential Generator) seeding so that a
//! scenario run is reproducible: given the same seed, all draw sequences
//! are bitwise-identical across runs and platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Deterministic, reproducible random number generator for simulation draws.
#[derive(Debug, Clone)]
pub struct TrialRng {
    /// Seed this generator was created from.
    seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl TrialRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Get the seed this generator was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate a random f64 in the given range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_range_f64(&mut self, min: f64, max: f64) -> f64 {
        assert!(min <= max, "Invalid range: min > max");
        min + (max - min) * self.gen_f64()
    }

    /// Generate n random f64 samples in [0, 1).
    #[must_use]
    pub fn sample_n(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.gen_f64()).collect()
    }
}

//! Uniform random draws for the simulation.
//!
//! One draw per hot-cell propagation step and (in random-seed mode) one per
//! seed-row cell at reseed time. Wraps [`StdRng`] so a session can be pinned
//! to a fixed seed for reproducible runs and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable uniform `[0, 1)` generator.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed for deterministic runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next uniform sample in `[0, 1)`.
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Next index in `[0, bound)`, mapped as `floor(u * bound)`.
    #[inline]
    pub fn next_index(&mut self, bound: u16) -> u16 {
        (self.next_unit() * f64::from(bound)).floor() as u16
    }
}

//! Tie breaker backed by a seedable random number generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::contributor::ports::TieBreaker;

/// Uniform tie breaker drawing from a [`StdRng`].
#[derive(Debug)]
pub struct RandomTieBreaker {
    rng: Mutex<StdRng>,
}

impl RandomTieBreaker {
    /// Creates a tie breaker seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic tie breaker for reproducible elections.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a tie breaker drawing from `rng`.
    #[must_use]
    pub const fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl TieBreaker for RandomTieBreaker {
    fn pick(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable generator.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

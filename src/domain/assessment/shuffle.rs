//! Presentation shuffle strategies.
//!
//! Item order shown to the user is randomized once per group at sitting
//! start. The strategy is injected so tests can supply a fixed seed or the
//! identity permutation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Produces the presentation permutation for one group.
pub trait ShuffleStrategy {
    /// Returns a permutation of `0..len` (catalog positions in
    /// presentation order).
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

/// Random presentation order from a seedable generator.
#[derive(Debug)]
pub struct SeededShuffle {
    rng: StdRng,
}

impl SeededShuffle {
    /// Creates a shuffle with an explicit seed (reproducible).
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a shuffle seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl ShuffleStrategy for SeededShuffle {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// No-op strategy: items are presented in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffle;

impl ShuffleStrategy for IdentityShuffle {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

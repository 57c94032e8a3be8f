use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws the level for each newly inserted node.
///
/// Starting from 1, a fair coin is flipped and the level grows while the coin
/// says continue, so the result follows `min(Geometric(1/2), max_level)`:
/// a node reaches level `i` with probability `2^-(i-1)`, which is what gives
/// the list its expected O(log n) height.
#[derive(Debug)]
pub struct LevelGenerator {
    max_level: usize,
    rng: StdRng,
}

impl LevelGenerator {
    /// Creates a generator capped at `max_level`, seeded from the OS.
    pub fn new(max_level: usize) -> Self {
        Self::with_seed(max_level, rand::random())
    }

    /// Creates a generator with an explicit seed, so that the level sequence
    /// (and hence the list shape) is reproducible.
    pub fn with_seed(max_level: usize, seed: u64) -> Self {
        LevelGenerator {
            max_level,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Upper bound on generated levels.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Draws the next level, always in `[1, max_level]`.
    pub fn generate(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.random_bool(0.5) {
            level += 1;
        }
        level
    }
}

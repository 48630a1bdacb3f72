use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator owned by a single game.
///
/// Every trial of a session gets its own generator derived from the session's
/// base seed, so a batch is reproducible whether it runs sequentially or on
/// the rayon pool.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new GameRng with an optional seed.
    /// If seed is None, a seed is drawn from the thread rng.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        GameRng {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator for trial `index` of a batch started from `base_seed`
    pub fn for_trial(base_seed: u64, index: usize) -> Self {
        Self::new(Some(base_seed.wrapping_add(index as u64)))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Fisher-Yates shuffle, uniform over all permutations
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.random_range(i + 1);
            items.swap(i, j);
        }
    }
}

/// Injectable randomness seam so rounds are reproducible under test.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The two random decisions the engine makes: which catalog entry starts
/// a round, and which safe letters the tier-2 hint burns.
pub trait RandomSource: Send {
    /// Uniform index into `0..len`. `len` is never zero (the catalog is
    /// validated non-empty at construction).
    fn pick_index(&mut self, len: usize) -> usize;

    fn shuffle_letters(&mut self, letters: &mut [char]);
}

/// Production source backed by the thread-local rng.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn shuffle_letters(&mut self, letters: &mut [char]) {
        letters.shuffle(&mut rand::rng());
    }
}

/// Fixed-seed source for `--seed` runs and tests.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn shuffle_letters(&mut self, letters: &mut [char]) {
        letters.shuffle(&mut self.rng);
    }
}

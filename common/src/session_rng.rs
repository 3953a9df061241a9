use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send {
    // n must be non-zero.
    fn uniform_index(&mut self, n: usize) -> usize;

    fn shuffle_in_place<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.uniform_index(i + 1);
            items.swap(i, j);
        }
    }
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn uniform_index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

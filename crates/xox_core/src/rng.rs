//! Seed-carrying RNG for reproducible bot play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random number generator that remembers its seed.
///
/// Bot games replay identically when rebuilt from the same seed.
#[derive(Debug)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Creates a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator with a seed drawn from the thread RNG.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// Returns the seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Samples a value uniformly from the given range.
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::from_random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        for _ in 0..16 {
            assert_eq!(
                a.random_range(0..9_usize),
                b.random_range(0..9_usize)
            );
        }
    }
}

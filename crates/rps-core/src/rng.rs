//! Random number generation
//!
//! Uses a seeded ChaCha RNG so a run can be replayed with `--seed`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            assert!(rng.rn2(3) < 3);
        }
        assert_eq!(rng.rn2(0), 0);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
        }
        assert_eq!(rng1.seed(), 42);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(7);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());

        let items = [1, 2, 3];
        for _ in 0..100 {
            let picked = rng.choose(&items).copied();
            assert!(matches!(picked, Some(1..=3)));
        }
    }
}

use rand::RngExt as _;

use crate::domain::repository::RandomSource;

/// Production randomness: thread-local RNG, uniform over the candidate set.
#[derive(Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

//! Display-order shuffling.
//!
//! The merged set is shuffled once before first display. The random source
//! is always injected so a batch can be replayed from a seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Returns a uniformly shuffled copy of `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Shuffles with a generator seeded from `seed`.
pub fn shuffled_seeded<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    shuffled(items, &mut StdRng::seed_from_u64(seed))
}

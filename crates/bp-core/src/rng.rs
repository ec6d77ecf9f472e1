//! Deterministic session RNG.
//!
//! # Determinism strategy
//!
//! A generation run has one root seed.  Episode `i` draws from
//! `SessionRng::child(seed, i)`, so every episode is reproducible on its
//! own and adding episodes at the end of a run never disturbs the earlier
//! ones.  Sampling is single-threaded; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Session-level RNG used by the puzzle sampler.
pub struct SessionRng(SmallRng);

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        SessionRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive the RNG for episode `offset` of a run rooted at `seed`.
    ///
    /// Pure function of `(seed, offset)`: episodes can be regenerated
    /// individually.
    pub fn child(seed: u64, offset: u64) -> SessionRng {
        let child_seed = seed ^ offset.wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        SessionRng(SmallRng::seed_from_u64(child_seed))
    }

    /// `amount` distinct indices drawn uniformly from `0..len`, in draw order.
    ///
    /// Returns `None` if `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Option<Vec<usize>> {
        if amount > len {
            return None;
        }
        Some(rand::seq::index::sample(&mut self.0, len, amount).into_vec())
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}

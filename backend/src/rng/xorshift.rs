//! xorshift64* random number generator
//!
//! Fast, seedable PRNG used wherever an assignment run has to be
//! reproducible (tests, replaying a reported run from its seed).
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence → same shuffles → same groups.

use serde::{Deserialize, Serialize};

use super::Shuffler;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use group_assigner_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let index = rng.next_index(10); // [0, 10)
/// assert!(index < 10);
/// # let _ = value;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1 (xorshift has an all-zero fixed point).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a uniform index in `[0, upper)`
    ///
    /// Rejection sampling removes the modulo bias a plain `next() % upper`
    /// would introduce.
    ///
    /// # Panics
    /// Panics if `upper == 0`
    pub fn next_index(&mut self, upper: usize) -> usize {
        assert!(upper > 0, "upper bound must be positive");

        let bound = upper as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next();
            if value < zone {
                return (value % bound) as usize;
            }
        }
    }

    /// Get current RNG state
    ///
    /// `RngManager::new(rng.get_state())` continues the same sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl Shuffler for RngManager {
    /// Fisher-Yates shuffle driven by `next_index`.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

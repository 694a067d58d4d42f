//! Random sources for group assignment
//!
//! The partitioner never touches a process-global generator. Every call that
//! needs randomness takes a `Shuffler`, so callers decide between a seeded,
//! reproducible source (`RngManager`) and a freshly seeded one per run
//! (`EntropyShuffler`).

mod entropy;
mod xorshift;

pub use entropy::EntropyShuffler;
pub use xorshift::RngManager;

/// Uniform random permutation of a slice.
///
/// Implementations must produce every ordering with equal probability.
///
/// # Example
/// ```
/// use group_assigner_core_rs::rng::{RngManager, Shuffler};
///
/// let mut rng = RngManager::new(7);
/// let mut names = vec!["Ana", "Budi", "Citra"];
/// rng.shuffle(&mut names);
/// assert_eq!(names.len(), 3);
/// ```
pub trait Shuffler {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

//! OS-seeded shuffler for production runs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Shuffler;

/// Shuffler reseeded from OS entropy on construction.
///
/// Build one per assignment run; two runs over the same roster are not
/// expected to agree.
#[derive(Debug, Clone)]
pub struct EntropyShuffler {
    rng: StdRng,
}

impl EntropyShuffler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for EntropyShuffler {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

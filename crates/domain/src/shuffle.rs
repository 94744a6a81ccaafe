use rand::{
    Rng, SeedableRng,
    rngs::{StdRng, ThreadRng},
    seq::SliceRandom,
};

/// Source of randomness for exercise selection.
///
/// Everything else in the engine is deterministic, so this is the only seam
/// tests need to replace to make plans reproducible.
pub trait Shuffle {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Uniform shuffle backed by a random number generator.
pub struct Random<R>(R);

impl Random<ThreadRng> {
    #[must_use]
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl Random<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffle for Random<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }
}

/// Keeps catalog order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unshuffled;

impl Shuffle for Unshuffled {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};
use crate::sampling::reservoir::Reservoir;

/// A builder for configuring a [`Reservoir`] before any item is sampled.
///
/// Example:
/// ```rust
/// use reservoir::ReservoirBuilder;
///
/// let mut reservoir = ReservoirBuilder::new(5).seed(42).build().unwrap();
/// reservoir.sample("the quick brown fox jumps over the lazy dog".split(' '), None);
/// assert_eq!(reservoir.samples().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ReservoirBuilder {
    /// `None` when the requested capacity did not fit in a `usize` (e.g. negative).
    capacity: Option<usize>,
    seed: Option<u64>,
}

impl ReservoirBuilder {
    /// Starts a builder for a reservoir holding at most `capacity` items.
    /// Validation is deferred to [`build`](Self::build).
    pub fn new<C>(capacity: C) -> Self
    where
        C: TryInto<usize>,
    {
        Self {
            capacity: capacity.try_into().ok(),
            seed: None,
        }
    }

    /// Sets an explicit seed for the random generator.
    /// If not called, the generator is seeded from the OS on its first draw.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the reservoir.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the capacity is not a strictly
    /// positive integer.
    pub fn build<T>(self) -> Result<Reservoir<T>> {
        let capacity = match self.capacity {
            Some(capacity) if capacity > 0 => capacity,
            _ => {
                return Err(Error::invalid_argument(
                    "capacity must be a strictly positive integer",
                ))
            }
        };
        let rng = self.seed.map(ChaCha20Rng::seed_from_u64);
        Ok(Reservoir::from_parts(capacity, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_validates_capacity() {
        assert!(ReservoirBuilder::new(0).build::<u8>().is_err());
        assert!(ReservoirBuilder::new(-1i64).build::<u8>().is_err());
        assert!(ReservoirBuilder::new(i32::MIN).seed(3).build::<u8>().is_err());

        let reservoir = ReservoirBuilder::new(3u8).build::<u8>().unwrap();
        assert_eq!(reservoir.capacity(), 3);
    }

    #[test]
    fn test_seeded_builds_agree() {
        let mut a = ReservoirBuilder::new(4).seed(17).build().unwrap();
        let mut b = ReservoirBuilder::new(4).seed(17).build().unwrap();
        a.sample(0..1_000u64, None);
        b.sample(0..1_000u64, None);
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn test_error_message() {
        let err = ReservoirBuilder::new(0).build::<()>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument("capacity must be a strictly positive integer".into())
        );
    }
}

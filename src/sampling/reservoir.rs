use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::Result;
use crate::sampling::builder::ReservoirBuilder;

/// A fixed-size uniform random sample over a stream of unknown length.
///
/// Sampling follows Algorithm R: the first `capacity` items fill the buffer, and
/// every later item replaces a random slot with probability `capacity / seen`.
/// The item counter and the random generator are carried across calls, so a
/// stream may be fed in any number of chunks and the result is the same as if
/// it had been fed in one go.
///
/// # Examples
/// ```
/// use reservoir::Reservoir;
///
/// let mut reservoir = Reservoir::new(10).unwrap();
/// reservoir.sample(0..10_000, Some(0));
/// assert_eq!(reservoir.seen(), 10_000);
/// assert_eq!(reservoir.samples().len(), 10);
///
/// // Keep going with the same random sequence.
/// reservoir.sample(10_000..15_000, None);
/// assert_eq!(reservoir.seen(), 15_000);
/// assert_eq!(reservoir.samples().len(), 10);
///
/// reservoir.reset();
/// assert!(reservoir.samples().is_empty());
/// assert_eq!(reservoir.size(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    capacity: usize,
    buffer: Vec<T>,
    seen: u64,
    /// Created on first use unless a seed was supplied earlier.
    rng: Option<ChaCha20Rng>,
}

impl<T> Reservoir<T> {
    /// Creates an empty reservoir holding at most `capacity` items.
    ///
    /// The random generator is left uninitialized; it is seeded from entropy on
    /// the first draw unless a seed is supplied before that.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
    /// `capacity` is zero or negative.
    pub fn new<C>(capacity: C) -> Result<Self>
    where
        C: TryInto<usize>,
    {
        ReservoirBuilder::new(capacity).build()
    }

    /// Creates an empty reservoir whose generator is seeded with `seed`.
    pub fn with_seed<C>(capacity: C, seed: u64) -> Result<Self>
    where
        C: TryInto<usize>,
    {
        ReservoirBuilder::new(capacity).seed(seed).build()
    }

    pub(crate) fn from_parts(capacity: usize, rng: Option<ChaCha20Rng>) -> Self {
        debug!(
            "created reservoir with capacity {} (seeded: {})",
            capacity,
            rng.is_some()
        );
        Self {
            capacity,
            // Grows during the fill phase.
            buffer: Vec::new(),
            seen: 0,
            rng,
        }
    }

    /// Consumes `items` once, in order, updating the sample.
    ///
    /// When `seed` is given the generator is re-seeded before the first item is
    /// read. The current sample and counter are kept either way, so a seed only
    /// affects the draws that follow.
    ///
    /// # Arguments
    /// * `items` - Any one-pass sequence. Infinite iterators must be bounded by
    ///   the caller, e.g. with [`Iterator::take`].
    /// * `seed` - Optional seed for reproducible draws.
    pub fn sample<I>(&mut self, items: I, seed: Option<u64>)
    where
        I: IntoIterator<Item = T>,
    {
        if let Some(seed) = seed {
            self.reseed(seed);
        }

        let start = self.seen;
        for item in items {
            self.add(item);
        }
        debug!(
            "sampled {} items ({} seen in total)",
            self.seen - start,
            self.seen
        );
    }

    /// Like [`sample`](Self::sample), for streams whose items can fail.
    ///
    /// Consumption stops at the first `Err`, which is returned as is. Every
    /// item read before it has already been applied to the sample.
    pub fn try_sample<I, E>(
        &mut self,
        items: I,
        seed: Option<u64>,
    ) -> std::result::Result<(), E>
    where
        I: IntoIterator<Item = std::result::Result<T, E>>,
    {
        if let Some(seed) = seed {
            self.reseed(seed);
        }

        let start = self.seen;
        for item in items {
            match item {
                Ok(item) => self.add(item),
                Err(err) => {
                    debug!(
                        "stream failed after {} items ({} seen in total)",
                        self.seen - start,
                        self.seen
                    );
                    return Err(err);
                }
            }
        }
        debug!(
            "sampled {} items ({} seen in total)",
            self.seen - start,
            self.seen
        );
        Ok(())
    }

    /// Feeds a single item through Algorithm R.
    pub fn add(&mut self, item: T) {
        self.seen += 1;

        // Fill phase
        if self.buffer.len() < self.capacity {
            self.buffer.push(item);
            return;
        }

        // j is uniform in [1, seen]; the item lands in slot j-1 when j <= capacity.
        let seen = self.seen;
        let j = self.rng().gen_range(1..=seen);
        if j <= self.capacity as u64 {
            let slot = (j - 1) as usize;
            trace!("item {} replaces slot {}", seen, slot);
            self.buffer[slot] = item;
        }
    }

    /// Re-seeds the generator without touching the sample or the counter.
    pub fn reseed(&mut self, seed: u64) {
        debug!("reseeding reservoir rng with {}", seed);
        self.rng = Some(ChaCha20Rng::seed_from_u64(seed));
    }

    /// Clears the sample and the counter.
    ///
    /// Capacity is unchanged and the generator keeps its state, so a later
    /// unseeded call continues the same pseudo-random sequence.
    pub fn reset(&mut self) {
        debug!("resetting reservoir after {} items", self.seen);
        self.buffer.clear();
        self.seen = 0;
    }

    /// The current sample. Order reflects replacement history, not stream order.
    pub fn samples(&self) -> &[T] {
        &self.buffer
    }

    /// Total items consumed since construction or the last reset.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// The fixed sample size.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Alias for [`capacity`](Self::capacity).
    pub fn size(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` once `capacity` items have been seen.
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Probability that any given item seen so far is in the sample.
    pub fn sampling_probability(&self) -> f64 {
        if self.seen == 0 {
            0.0
        } else {
            (self.capacity as f64 / self.seen as f64).min(1.0)
        }
    }

    /// Consumes the reservoir and returns the sample buffer.
    pub fn into_samples(self) -> Vec<T> {
        self.buffer
    }

    fn rng(&mut self) -> &mut ChaCha20Rng {
        self.rng.get_or_insert_with(|| {
            debug!("seeding reservoir rng from entropy");
            ChaCha20Rng::from_entropy()
        })
    }
}

impl<T> Extend<T> for Reservoir<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

//! Stream sampling.
//!
//! A [`Reservoir`] keeps a uniform random sample of fixed size from a stream
//! whose length is not known in advance, without buffering the stream itself.
//! The stream can arrive in several chunks; the counter of seen items and the
//! random generator carry over from one call to the next.
//!
//! # Examples
//!
//! ```rust
//! use reservoir::sampling::Reservoir;
//!
//! let mut reservoir = Reservoir::with_seed(3, 7).unwrap();
//! reservoir.sample((0..).take(1_000), None);
//! assert_eq!(reservoir.samples().len(), 3);
//! assert_eq!(reservoir.seen(), 1_000);
//! ```

pub mod builder;
pub mod reservoir;

pub use builder::ReservoirBuilder;
pub use reservoir::Reservoir;

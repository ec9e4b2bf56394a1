//! Reservoir sampling over streams of unknown length.
//!
//! See [`Reservoir`] for the sampler and [`ReservoirBuilder`] for configuring one.

pub mod error;
pub mod sampling;

pub use error::{Error, Result};
pub use sampling::{Reservoir, ReservoirBuilder};

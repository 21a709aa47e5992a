//! Integration with `rand` (v0.10) crate.

#![cfg(feature = "rand010")]

use super::{MonotonicGenerator, RandSource};
use crate::Error;
use rand_core010::Rng;

/// An adapter that implements [`RandSource`] for [`Rng`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`Rng`] type. */ pub T);

impl<T: Rng> RandSource for Adapter<T> {
    fn fill_exact(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}

impl<T: Rng> MonotonicGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements [`Rng`]
    /// from `rand` (v0.10) crate.
    pub const fn with_rand010(rng: T) -> Self {
        Self::with_rand_source(Adapter(rng))
    }
}

//! Integration with `rand` (v0.8) crate.

#![cfg(feature = "rand08")]

use super::{MonotonicGenerator, RandSource};
use crate::Error;
use rand_core06::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// A failed [`RngCore::try_fill_bytes`] is reported as [`ErrorKind::Io`](crate::ErrorKind::Io).
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_exact(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|_| Error::entropy_unavailable())
    }
}

impl<T: RngCore> MonotonicGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate. The specified random number generator should be
    /// cryptographically strong and securely seeded.
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_rand_source(Adapter(rng))
    }
}

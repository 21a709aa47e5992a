//! Integration with `rand` (v0.9) crate.

#![cfg(feature = "rand09")]

use super::{MonotonicGenerator, RandSource};
use crate::Error;
use rand_core09::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_exact(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}

impl<T: RngCore> MonotonicGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.9) crate. The specified random number generator should be
    /// cryptographically strong and securely seeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "default_rng")]
    /// # {
    /// # use rand09 as rand;
    /// use monoulid::MonotonicGenerator;
    ///
    /// let mut g = MonotonicGenerator::with_rand09(rand::rng());
    /// println!("{}", g.generate()?);
    /// # }
    /// # Ok::<(), monoulid::Error>(())
    /// ```
    pub const fn with_rand09(rng: T) -> Self {
        Self::with_rand_source(Adapter(rng))
    }
}

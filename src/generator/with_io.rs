//! Integration with [`std::io::Read`] byte streams.

use std::io;

use super::{MonotonicGenerator, RandSource};
use crate::Error;

/// An adapter that implements [`RandSource`] for [`io::Read`] types.
///
/// Each fill is a [`read_exact`](io::Read::read_exact); a short read is reported as
/// [`ErrorKind::Io`](crate::ErrorKind::Io) with the underlying [`io::Error`] as its source.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct IoReader<T>(/** The wrapped [`io::Read`] type. */ pub T);

impl<T: io::Read> RandSource for IoReader<T> {
    fn fill_exact(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.read_exact(dest).map_err(Error::from)
    }
}

impl<T: io::Read> MonotonicGenerator<IoReader<T>> {
    /// Creates a generator object that reads entropy from a byte stream such as a handle to
    /// `/dev/urandom`. The stream must yield uniformly random bytes indefinitely.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use monoulid::MonotonicGenerator;
    ///
    /// let urandom = std::fs::File::open("/dev/urandom")?;
    /// let mut g = MonotonicGenerator::with_reader(std::io::BufReader::new(urandom));
    /// println!("{}", g.generate()?);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub const fn with_reader(reader: T) -> Self {
        Self::with_rand_source(IoReader(reader))
    }
}

#[cfg(not(feature = "std"))]
use core as std;

use crate::{Error, RandSource};
use std::fmt;

/// Size in bytes of the entropy buffer.
pub(crate) const BUFFER_SIZE: usize = 1024;

/// Amortizes reads from a [`RandSource`] by pulling a whole buffer of random bytes at a time.
///
/// The buffer is refilled in full, discarding any leftover bytes, whenever a request asks for
/// more bytes than remain.
pub(crate) struct EntropySource<R> {
    buffer: [u8; BUFFER_SIZE],
    cursor: usize,
    rand_source: R,
}

impl<R> EntropySource<R> {
    /// Creates an instance with an empty buffer so that the first request triggers a fill.
    pub const fn new(rand_source: R) -> Self {
        Self {
            buffer: [0; BUFFER_SIZE],
            cursor: BUFFER_SIZE,
            rand_source,
        }
    }

    /// Returns the number of buffered bytes not yet handed out.
    pub const fn remaining(&self) -> usize {
        BUFFER_SIZE - self.cursor
    }

    #[cfg(test)]
    pub const fn rand_source(&self) -> &R {
        &self.rand_source
    }
}

impl<R: RandSource> EntropySource<R> {
    /// Guarantees that at least `min_required` bytes are buffered, performing one full read from
    /// the random source if fewer remain.
    ///
    /// On failure the buffer is marked empty so that no byte of a failed read is ever handed out.
    pub fn refill(&mut self, min_required: usize) -> Result<(), Error> {
        debug_assert!(min_required <= BUFFER_SIZE);
        if self.remaining() >= min_required {
            return Ok(());
        }

        if let Err(err) = self.rand_source.fill_exact(&mut self.buffer) {
            #[cfg(feature = "log")]
            log::debug!("monoulid: entropy refill failed: {}", err);
            self.cursor = BUFFER_SIZE;
            return Err(err);
        }

        #[cfg(feature = "log")]
        log::trace!("monoulid: refilled {} bytes of entropy", BUFFER_SIZE);
        self.cursor = 0;
        Ok(())
    }

    /// Hands out the next `N` buffered bytes.
    fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        self.refill(N)?;
        let mut dst = [0u8; N];
        dst.copy_from_slice(&self.buffer[self.cursor..self.cursor + N]);
        self.cursor += N;
        Ok(dst)
    }

    /// Returns a fresh 80-bit block of random bytes.
    pub fn next_80_bits(&mut self) -> Result<[u8; 10], Error> {
        self.take()
    }

    /// Returns a random increment in the range `1..=2^32`, decoded from four little-endian bytes.
    pub fn next_increment(&mut self) -> Result<u64, Error> {
        self.take().map(|bytes| 1 + u32::from_le_bytes(bytes) as u64)
    }
}

impl<R: fmt::Debug> fmt::Debug for EntropySource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntropySource")
            .field("remaining", &self.remaining())
            .field("rand_source", &self.rand_source)
            .finish_non_exhaustive()
    }
}

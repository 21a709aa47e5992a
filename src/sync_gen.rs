#![cfg(feature = "std")]

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::generator::{DefaultRng, MonotonicGenerator, RandSource, StdSystemTime};
use crate::{Error, Ulid};

/// A thread-safe wrapper of [`MonotonicGenerator`] that serializes every call through a mutex.
///
/// Calls from multiple threads are applied one at a time, so the monotonic order guaranteed by
/// the wrapped generator holds across threads. Share it through an [`Arc`](std::sync::Arc) or a
/// `static`.
///
/// # Examples
///
/// ```rust
/// use monoulid::{MonotonicGenerator, SyncGenerator};
/// use std::sync::Arc;
///
/// let g = Arc::new(SyncGenerator::new(MonotonicGenerator::with_reader(std::io::repeat(0x42))));
/// let handles: Vec<_> = (0..2)
///     .map(|_| {
///         let g = Arc::clone(&g);
///         std::thread::spawn(move || g.next(0x0123_4567_89ab))
///     })
///     .collect();
/// for h in handles {
///     assert_eq!(h.join().unwrap()?.timestamp(), 0x0123_4567_89ab);
/// }
/// # Ok::<(), monoulid::Error>(())
/// ```
#[derive(Debug)]
pub struct SyncGenerator<R = DefaultRng, T = StdSystemTime> {
    inner: Mutex<MonotonicGenerator<R, T>>,
}

impl<R, T> SyncGenerator<R, T> {
    /// Wraps a generator.
    pub const fn new(generator: MonotonicGenerator<R, T>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> MonotonicGenerator<R, T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// A panic while holding the lock cannot leave the state half-updated, so poisoning is
    /// ignored.
    fn lock(&self) -> MutexGuard<'_, MonotonicGenerator<R, T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: RandSource, T> SyncGenerator<R, T> {
    /// Calls [`MonotonicGenerator::next`] under the lock.
    pub fn next(&self, unix_ts_ms: u64) -> Result<Ulid, Error> {
        self.lock().next(unix_ts_ms)
    }

    /// Calls [`MonotonicGenerator::next_reverse`] under the lock.
    pub fn next_reverse(&self, unix_ts_ms: u64) -> Result<Ulid, Error> {
        self.lock().next_reverse(unix_ts_ms)
    }
}

impl<R: RandSource, T: crate::TimeSource> SyncGenerator<R, T> {
    /// Calls [`MonotonicGenerator::generate`] under the lock.
    ///
    /// The clock is read while the lock is held, so the timestamps seen by the generator never go
    /// backward because of contention between threads.
    pub fn generate(&self) -> Result<Ulid, Error> {
        self.lock().generate()
    }

    /// Calls [`MonotonicGenerator::generate_reverse`] under the lock.
    pub fn generate_reverse(&self) -> Result<Ulid, Error> {
        self.lock().generate_reverse()
    }
}

impl<R, T> From<MonotonicGenerator<R, T>> for SyncGenerator<R, T> {
    fn from(generator: MonotonicGenerator<R, T>) -> Self {
        Self::new(generator)
    }
}

#[cfg(feature = "default_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_rng")))]
impl Default for SyncGenerator {
    /// Wraps a generator with the default random number generator.
    ///
    /// # Panics
    ///
    /// Panics in the highly unlikely event where [`DefaultRng`] could not be initialized.
    fn default() -> Self {
        Self::new(MonotonicGenerator::new())
    }
}

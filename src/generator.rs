//! ULID generator and related types.

use crate::entropy::EntropySource;
use crate::uint80::Uint80;
use crate::{Error, Ulid, MAX_TIME};

#[cfg(feature = "default_rng")]
mod default_rng;

#[cfg(feature = "std")]
mod with_io;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use with_io::IoReader;

#[cfg_attr(docsrs, doc(cfg(feature = "rand08")))]
pub mod with_rand08;
#[cfg_attr(docsrs, doc(cfg(feature = "rand09")))]
pub mod with_rand09;
#[cfg_attr(docsrs, doc(cfg(feature = "rand010")))]
pub mod with_rand010;


/// A trait that defines the byte-stream interface the generator draws entropy from.
pub trait RandSource {
    /// Fills the whole of `dest` with random bytes.
    ///
    /// A source that cannot fill `dest` completely must return an error (typically
    /// [`Error::entropy_unavailable`]) instead of a partially written buffer.
    fn fill_exact(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// A trait that defines the minimum system clock interface for [`MonotonicGenerator`].
pub trait TimeSource {
    /// Returns the current Unix time in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[non_exhaustive]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// The default random number generator used by [`MonotonicGenerator`].
///
/// Currently, `DefaultRng` uses [`ChaCha12Core`] that is initially seeded and subsequently
/// reseeded by [`OsRng`] every 64 kiB of random data using the [`ReseedingRng`] wrapper. It is
/// the same strategy as that employed by [`ThreadRng`]; see the docs of `rand` crate for a
/// detailed discussion on the strategy.
///
/// [`ChaCha12Core`]: https://docs.rs/rand_chacha/0.9/rand_chacha/struct.ChaCha12Core.html
/// [`OsRng`]: https://docs.rs/rand/0.9/rand/rngs/struct.OsRng.html
/// [`ReseedingRng`]: https://docs.rs/rand/0.9/rand/rngs/struct.ReseedingRng.html
/// [`ThreadRng`]: https://docs.rs/rand/0.9/rand/rngs/struct.ThreadRng.html
#[derive(Debug)]
pub struct DefaultRng {
    _private: (),
    #[cfg(feature = "default_rng")]
    inner: rand09::rngs::ReseedingRng<rand_chacha::ChaCha12Core, rand09::rngs::OsRng>,
}

/// Bookkeeping for one ordering mode: the most recently issued timestamp and entropy, and the
/// timestamp at which the entropy counter last overflowed.
///
/// Timestamps here are the values written to the ULID, which for the reverse mode are
/// `MAX_TIME - unix_ts_ms`.
#[derive(Clone, Eq, PartialEq, Debug)]
struct GeneratorState {
    timestamp: u64,
    entropy: Option<Uint80>,
    overflow_at: Option<u64>,
}

impl GeneratorState {
    /// Creates a state that has issued no ULID yet.
    const fn new() -> Self {
        Self {
            timestamp: 0,
            entropy: None,
            overflow_at: None,
        }
    }

    /// Derives the entropy for `timestamp`: an increment of the previous entropy if the
    /// timestamp is unchanged, a fresh random block otherwise.
    ///
    /// Nothing is committed to the state on failure except the overflow marker.
    fn advance<R: RandSource>(
        &mut self,
        timestamp: u64,
        entropy_source: &mut EntropySource<R>,
    ) -> Result<[u8; 10], Error> {
        match self.entropy {
            Some(prev) if timestamp == self.timestamp => {
                let increment = entropy_source.next_increment()?;
                let Some(entropy) = prev.checked_add(increment) else {
                    #[cfg(feature = "log")]
                    log::warn!(
                        "monoulid: entropy overflowed within timestamp {}; a later timestamp is required",
                        timestamp
                    );
                    self.overflow_at = Some(timestamp);
                    return Err(Error::monotonic_overflow());
                };
                self.entropy = Some(entropy);
                Ok(entropy.to_be_bytes())
            }
            _ => {
                // clear the top bit so that at least one increment always fits
                let entropy = Uint80::from_be_bytes(entropy_source.next_80_bits()?).clear_msb();
                self.timestamp = timestamp;
                self.entropy = Some(entropy);
                Ok(entropy.to_be_bytes())
            }
        }
    }
}

/// Represents a ULID generator that encapsulates a buffered random source and guarantees the
/// monotonic order of ULIDs generated within the same millisecond.
///
/// The generator keeps separate bookkeeping for the forward ([`next`]) and reverse
/// ([`next_reverse`]) orderings, so both can be used on one instance without interfering with
/// each other. A generator is not synchronized; wrap it in a
/// [`SyncGenerator`](crate::SyncGenerator) or a [`Mutex`](std::sync::Mutex) to share it between
/// threads.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "std")]
/// # {
/// use monoulid::MonotonicGenerator;
///
/// let mut g = MonotonicGenerator::with_reader(std::io::repeat(0x5a));
/// let x = g.next(0x0123_4567_89ab)?;
/// let y = g.next(0x0123_4567_89ab)?;
/// assert!(x < y);
/// assert_eq!(y.timestamp(), 0x0123_4567_89ab);
/// # }
/// # Ok::<(), monoulid::Error>(())
/// ```
///
/// # Generator functions
///
/// | Flavor                | Timestamp | Order of IDs          |
/// | --------------------- | --------- | --------------------- |
/// | [`next`]              | Argument  | Ascending by time     |
/// | [`next_reverse`]      | Argument  | Descending by time    |
/// | [`generate`]          | Now       | Ascending by time     |
/// | [`generate_reverse`]  | Now       | Descending by time    |
///
/// None of them retries on failure; upon [`ErrorKind::MonotonicOverflow`] the caller must supply
/// a later timestamp.
///
/// [`next`]: MonotonicGenerator::next
/// [`next_reverse`]: MonotonicGenerator::next_reverse
/// [`generate`]: MonotonicGenerator::generate
/// [`generate_reverse`]: MonotonicGenerator::generate_reverse
/// [`ErrorKind::MonotonicOverflow`]: crate::ErrorKind::MonotonicOverflow
#[derive(Debug)]
pub struct MonotonicGenerator<R = DefaultRng, T = StdSystemTime> {
    forward: GeneratorState,
    reverse: GeneratorState,
    entropy_source: EntropySource<R>,
    time_source: T,
}

#[cfg(feature = "default_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_rng")))]
impl MonotonicGenerator {
    /// Creates a generator object with the default random number generator.
    ///
    /// # Panics
    ///
    /// Panics in the highly unlikely event where [`DefaultRng`] could not be initialized.
    pub fn new() -> Self {
        Default::default()
    }
}

#[cfg(feature = "default_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_rng")))]
impl Default for MonotonicGenerator {
    /// Creates a generator object with the default random number generator.
    ///
    /// # Panics
    ///
    /// Panics in the highly unlikely event where [`DefaultRng`] could not be initialized.
    fn default() -> Self {
        Self::with_rand_source(DefaultRng::default())
    }
}

impl<R> MonotonicGenerator<R> {
    /// Creates a generator object with a specified random source. The random source should be
    /// cryptographically strong and securely seeded.
    pub const fn with_rand_source(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R, T> MonotonicGenerator<R, T> {
    /// Creates a generator object with specified random source and system clock.
    ///
    /// The clock is consulted only by [`generate`](MonotonicGenerator::generate) and
    /// [`generate_reverse`](MonotonicGenerator::generate_reverse).
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            forward: GeneratorState::new(),
            reverse: GeneratorState::new(),
            entropy_source: EntropySource::new(rand_source),
            time_source,
        }
    }
}

impl<R: RandSource, T> MonotonicGenerator<R, T> {
    /// Generates a new ULID object from the `unix_ts_ms` passed.
    ///
    /// The same `unix_ts_ms` as the previous call yields the previous entropy plus a random
    /// increment; a greater one yields fresh random entropy. Either way, the result sorts after
    /// every ULID previously returned by this method.
    ///
    /// # Errors
    ///
    /// - `NegativeTime` if `unix_ts_ms` is smaller than the previous one.
    /// - `TimeOverflow` if `unix_ts_ms` is not smaller than [`MAX_TIME`](crate::MAX_TIME).
    /// - `MonotonicOverflow` if the entropy cannot be incremented within `unix_ts_ms`. Every
    ///   subsequent call with the same `unix_ts_ms` fails the same way immediately.
    /// - `Io` if the random source failed.
    ///
    /// The generator state is left unchanged upon any error except that the overflow is
    /// remembered.
    pub fn next(&mut self, unix_ts_ms: u64) -> Result<Ulid, Error> {
        if unix_ts_ms < self.forward.timestamp {
            return Err(Error::negative_time());
        } else if unix_ts_ms >= MAX_TIME {
            return Err(Error::time_overflow());
        } else if self.forward.overflow_at == Some(unix_ts_ms) {
            return Err(Error::monotonic_overflow());
        }

        let entropy = self.forward.advance(unix_ts_ms, &mut self.entropy_source)?;
        Ok(Ulid::from_parts(unix_ts_ms, entropy))
    }

    /// Generates a new ULID object whose timestamp field holds `MAX_TIME - unix_ts_ms`, so that
    /// ULIDs for later times sort before those for earlier times.
    ///
    /// Timestamps may be passed in any order. ULIDs generated with the same `unix_ts_ms` in a row
    /// are monotonically increasing in the same way as [`next`](MonotonicGenerator::next).
    ///
    /// # Errors
    ///
    /// - `TimeOverflow` if `unix_ts_ms` is not smaller than [`MAX_TIME`](crate::MAX_TIME).
    /// - `MonotonicOverflow` if the entropy cannot be incremented within `unix_ts_ms`.
    /// - `Io` if the random source failed.
    pub fn next_reverse(&mut self, unix_ts_ms: u64) -> Result<Ulid, Error> {
        if unix_ts_ms >= MAX_TIME {
            return Err(Error::time_overflow());
        }

        let timestamp = MAX_TIME - unix_ts_ms;
        if self.reverse.overflow_at == Some(timestamp) {
            return Err(Error::monotonic_overflow());
        }

        let entropy = self.reverse.advance(timestamp, &mut self.entropy_source)?;
        Ok(Ulid::from_parts(timestamp, entropy))
    }
}

impl<R: RandSource, T: TimeSource> MonotonicGenerator<R, T> {
    /// Generates a new ULID object from the current timestamp.
    ///
    /// See [`next`](MonotonicGenerator::next) for the errors returned.
    pub fn generate(&mut self) -> Result<Ulid, Error> {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        self.next(unix_ts_ms)
    }

    /// Generates a new reverse-ordered ULID object from the current timestamp.
    ///
    /// See [`next_reverse`](MonotonicGenerator::next_reverse) for the errors returned.
    pub fn generate_reverse(&mut self) -> Result<Ulid, Error> {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        self.next_reverse(unix_ts_ms)
    }
}

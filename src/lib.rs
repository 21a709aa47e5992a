//! # monoulid: monotonic ULID generator
//!
//! A ULID is a 128-bit identifier made of a 48-bit Unix timestamp in milliseconds and 80 bits of
//! entropy, written as 26 Crockford Base32 digits. ULIDs sort by creation time both as bytes and
//! as strings.
//!
//! [`MonotonicGenerator`] makes every ULID it issues within the same millisecond greater than the
//! previous one by adding a random 32-bit increment to the previous entropy instead of drawing a
//! new one. A reverse mode writes `MAX_TIME - unix_ts_ms` to the timestamp field so that newer
//! ULIDs sort first.
//!
//! ```rust
//! # #[cfg(feature = "default_rng")]
//! # {
//! use monoulid::MonotonicGenerator;
//!
//! let mut g = MonotonicGenerator::new();
//! let x = g.generate()?;
//! let y = g.generate()?;
//! assert!(x < y);
//!
//! let parsed = x.to_string().parse::<monoulid::Ulid>()?;
//! assert_eq!(parsed, x);
//! # }
//! # Ok::<(), monoulid::Error>(())
//! ```
//!
//! Reverse-ordered ULIDs put the most recent first:
//!
//! ```rust
//! # #[cfg(feature = "default_rng")]
//! # {
//! use monoulid::{reverse_time, MonotonicGenerator};
//!
//! let mut g = MonotonicGenerator::new();
//! let older = g.next_reverse(1_700_000_000_000)?;
//! let newer = g.next_reverse(1_700_000_000_001)?;
//! assert!(newer < older);
//! assert_eq!(reverse_time(newer.timestamp()), 1_700_000_000_001);
//! # }
//! # Ok::<(), monoulid::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables [`SyncGenerator`], [`IoReader`] and the system clock.
//! - `default_rng` (implies `std`) enables [`MonotonicGenerator::new`] backed by [`DefaultRng`].
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Ulid`] via serde.
//! - `log` reports overflows and entropy refills through the `log` facade.
//! - `rand08`, `rand09` and `rand010` enable adapters for `rand_core` random number generators.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod entropy;
mod error;
pub mod generator;
mod id;
mod sync_gen;
mod uint80;

pub use error::{Error, ErrorKind};
pub use generator::{DefaultRng, MonotonicGenerator, RandSource, StdSystemTime, TimeSource};
pub use id::Ulid;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use generator::IoReader;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use sync_gen::SyncGenerator;

/// The maximum value of the 48-bit timestamp field.
///
/// Generators accept timestamps strictly below this value, so that the reverse mode never writes
/// a zero timestamp field.
pub const MAX_TIME: u64 = (1 << 48) - 1;

/// Converts between a Unix timestamp and the timestamp field of a reverse-ordered ULID.
///
/// The conversion is its own inverse for any value up to [`MAX_TIME`]; larger values saturate to
/// zero.
///
/// # Examples
///
/// ```rust
/// use monoulid::{reverse_time, MAX_TIME};
///
/// assert_eq!(reverse_time(0), MAX_TIME);
/// assert_eq!(reverse_time(reverse_time(1_700_000_000_000)), 1_700_000_000_000);
/// ```
pub const fn reverse_time(unix_ts_ms: u64) -> u64 {
    MAX_TIME.saturating_sub(unix_ts_ms)
}

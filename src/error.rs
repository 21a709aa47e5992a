#[cfg(not(feature = "std"))]
use core as std;

use std::{error, fmt, str};

/// The category of an [`Error`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The timestamp passed to a forward generator predates that of the previous ULID.
    NegativeTime,

    /// The timestamp is at or beyond the maximum representable by the 48-bit field.
    TimeOverflow,

    /// The 80-bit entropy counter cannot be incremented any further within the current
    /// millisecond. Retry with a later timestamp.
    MonotonicOverflow,

    /// A textual or binary representation has the wrong size.
    InvalidLength,

    /// A textual representation contains a character outside the Crockford Base32 alphabet, or
    /// ends with a character that carries non-zero padding bits.
    InvalidChar,

    /// The random source could not supply the requested bytes.
    Io,
}

/// An error reported by [`MonotonicGenerator`](crate::MonotonicGenerator) or by the [`Ulid`]
/// parsers.
///
/// [`Ulid`]: crate::Ulid
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    context: Context,
}

#[derive(Debug)]
enum Context {
    None,
    Length {
        actual: usize,
        expected: usize,
    },
    Char {
        /// Holds the invalid character as a UTF-8 byte array to work in the const context.
        utf8_char: [u8; 4],
        position: usize,
    },
    PaddingBits {
        last: u8,
    },
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl Error {
    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Creates an `Io` error for a random source that failed to fill the requested bytes.
    ///
    /// Custom [`RandSource`](crate::RandSource) implementations use this to report that they
    /// could not supply entropy.
    pub const fn entropy_unavailable() -> Self {
        Self::new(ErrorKind::Io, Context::None)
    }

    const fn new(kind: ErrorKind, context: Context) -> Self {
        Self { kind, context }
    }

    pub(crate) const fn negative_time() -> Self {
        Self::new(ErrorKind::NegativeTime, Context::None)
    }

    pub(crate) const fn time_overflow() -> Self {
        Self::new(ErrorKind::TimeOverflow, Context::None)
    }

    pub(crate) const fn monotonic_overflow() -> Self {
        Self::new(ErrorKind::MonotonicOverflow, Context::None)
    }

    pub(crate) const fn invalid_length(actual: usize, expected: usize) -> Self {
        Self::new(ErrorKind::InvalidLength, Context::Length { actual, expected })
    }

    /// Creates an `InvalidChar` error from the entire string and the position of the invalid
    /// character.
    pub(crate) const fn invalid_char(src: &str, position: usize) -> Self {
        const fn is_char_boundary(utf8_bytes: &[u8], index: usize) -> bool {
            match index {
                0 => true,
                i if i < utf8_bytes.len() => (utf8_bytes[i] as i8) >= -64,
                _ => index == utf8_bytes.len(),
            }
        }

        let bs = src.as_bytes();
        assert!(is_char_boundary(bs, position));
        let mut utf8_char = [bs[position], 0, 0, 0];

        let mut i = 1;
        while !is_char_boundary(bs, position + i) {
            utf8_char[i] = bs[position + i];
            i += 1;
        }

        Self::new(
            ErrorKind::InvalidChar,
            Context::Char {
                utf8_char,
                position,
            },
        )
    }

    /// Creates an `InvalidChar` error for a final digit whose two padding bits are not zero.
    pub(crate) const fn padding_bits(last: u8) -> Self {
        Self::new(ErrorKind::InvalidChar, Context::PaddingBits { last })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monoulid: ")?;
        match (&self.kind, &self.context) {
            (ErrorKind::InvalidLength, Context::Length { actual, expected }) => {
                write!(f, "invalid length: {} bytes (expected {})", actual, expected)
            }
            (
                ErrorKind::InvalidChar,
                Context::Char {
                    utf8_char,
                    position,
                },
            ) => {
                let chr = str::from_utf8(utf8_char)
                    .ok()
                    .and_then(|s| s.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                write!(f, "invalid character '{}' at {}", chr.escape_debug(), position)
            }
            (ErrorKind::InvalidChar, Context::PaddingBits { last }) => write!(
                f,
                "invalid last character '{}' (expected one of 0 4 8 C G M R W)",
                char::from(*last).escape_debug()
            ),
            (ErrorKind::NegativeTime, _) => write!(f, "timestamp predates previous"),
            (ErrorKind::TimeOverflow, _) => write!(f, "timestamp overflows max time"),
            (ErrorKind::MonotonicOverflow, _) => write!(f, "monotonic entropy overflow"),
            #[cfg(feature = "std")]
            (ErrorKind::Io, Context::Io(err)) => write!(f, "could not read entropy: {}", err),
            (ErrorKind::Io, _) => write!(f, "could not read entropy"),
            (ErrorKind::InvalidLength, _) => write!(f, "invalid length"),
            (ErrorKind::InvalidChar, _) => write!(f, "invalid character"),
        }
    }
}

impl error::Error for Error {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.context {
            Context::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, Context::Io(err))
    }
}

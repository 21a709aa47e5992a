#[cfg(not(feature = "std"))]
use core as std;

use crate::{Error, MAX_TIME};
use fstr::FStr;
use std::{fmt, str};

/// The largest value of the 80-bit `entropy` field.
const MAX_ENTROPY: u128 = (1 << 80) - 1;

/// Digit characters used in the Crockford Base32 notation.
const DIGITS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// An O(1) map from ASCII code points to Base32 digit values, accepting both letter cases.
const DECODE_MAP: [u8; 256] = {
    let mut map = [0xff; 256];
    let mut i = 0;
    while i < DIGITS.len() {
        map[DIGITS[i] as usize] = i as u8;
        map[DIGITS[i].to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    map
};

/// Represents a ULID and provides converters and comparison operators.
///
/// A ULID is a 16-byte big-endian value: a 48-bit Unix timestamp in milliseconds followed by 80
/// bits of entropy. Its canonical text form is 26 Crockford Base32 digits that read the 128 bits
/// from the most significant end in 5-bit groups, so the last digit carries 3 data bits and 2
/// zero padding bits. The text form sorts in the same order as the bytes.
///
/// # Examples
///
/// ```rust
/// use monoulid::Ulid;
///
/// let x = "0690YFKFB9Y0B4GSASQR5ZZPE8".parse::<Ulid>()?;
/// assert_eq!(x.to_string(), "0690YFKFB9Y0B4GSASQR5ZZPE8");
/// assert_eq!(x.timestamp(), 0x0192_0f3e_6f5a);
///
/// let y = Ulid::from(0x01920f3e6f5a7c059219566f82fff672u128);
/// assert_eq!(y, x);
/// # Ok::<(), monoulid::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Ulid([u8; 16]);

impl Ulid {
    /// The ULID with all bits set to zero.
    pub const NIL: Self = Self([0x00; 16]);

    /// The ULID with all bits set to one, which sorts after any other ULID.
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns the largest representable ULID, useful as an exclusive upper bound in range
    /// queries.
    pub const fn max() -> Self {
        Self::MAX
    }

    /// Creates an object from a 128-bit unsigned integer.
    pub const fn from_u128(int_value: u128) -> Self {
        Self(int_value.to_be_bytes())
    }

    /// Returns the 128-bit unsigned integer representation.
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Creates an object from a 16-byte big-endian byte array.
    pub const fn from_byte_array(array_value: [u8; 16]) -> Self {
        Self(array_value)
    }

    /// Creates an object from a big-endian byte slice.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLength` error if the slice is not exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monoulid::{ErrorKind, Ulid};
    ///
    /// let x = Ulid::from_bytes(&[0xff; 16])?;
    /// assert_eq!(x, Ulid::max());
    ///
    /// let err = Ulid::from_bytes(&[0xff; 15]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidLength);
    /// # Ok::<(), monoulid::Error>(())
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::invalid_length(bytes.len(), 16))
    }

    /// Returns the big-endian byte array representation.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns a reference to the big-endian byte array representation.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Copies the big-endian byte representation into `dst`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLength` error if `dst` is not exactly 16 bytes long.
    pub fn write_bytes(&self, dst: &mut [u8]) -> Result<(), Error> {
        if dst.len() != self.0.len() {
            return Err(Error::invalid_length(dst.len(), self.0.len()));
        }
        dst.copy_from_slice(&self.0);
        Ok(())
    }

    /// Creates an object from field values.
    ///
    /// # Panics
    ///
    /// Panics if any argument is out of the value range of the field.
    pub const fn from_fields(timestamp: u64, entropy: u128) -> Self {
        if timestamp > MAX_TIME || entropy > MAX_ENTROPY {
            panic!("invalid field value");
        } else {
            Self::from_u128(((timestamp as u128) << 80) | entropy)
        }
    }

    /// Assembles an object from a timestamp known to fit in 48 bits and the entropy bytes.
    pub(crate) const fn from_parts(timestamp: u64, entropy: [u8; 10]) -> Self {
        let ts = timestamp.to_be_bytes();
        Self([
            ts[2], ts[3], ts[4], ts[5], ts[6], ts[7], entropy[0], entropy[1], entropy[2],
            entropy[3], entropy[4], entropy[5], entropy[6], entropy[7], entropy[8], entropy[9],
        ])
    }

    /// Returns the 48-bit `timestamp` field value.
    ///
    /// For a ULID made by [`next_reverse`](crate::MonotonicGenerator::next_reverse), this is
    /// [`reverse_time`](crate::reverse_time) of the generation time, which
    /// `reverse_time` converts back.
    pub const fn timestamp(&self) -> u64 {
        (self.to_u128() >> 80) as u64
    }

    /// Returns the 80-bit `entropy` field value.
    pub const fn entropy(&self) -> u128 {
        self.to_u128() & MAX_ENTROPY
    }

    /// Creates an object from a 26-digit string representation.
    ///
    /// Letters are accepted in either case; `I`, `L`, `O` and `U` are not part of the alphabet.
    ///
    /// # Errors
    ///
    /// - `InvalidLength` if the string is not 26 bytes long.
    /// - `InvalidChar` if any digit is outside the alphabet, or if the last digit is not one of
    ///   `0 4 8 C G M R W` (the only digits whose two padding bits are zero).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monoulid::Ulid;
    ///
    /// let x = Ulid::try_from_str("01ARZ3NDEKTSV4RRFFQ69G5FAW")?;
    /// let y = "01arz3ndektsv4rrffq69g5faw".parse::<Ulid>()?;
    /// assert_eq!(x, y);
    /// # Ok::<(), monoulid::Error>(())
    /// ```
    pub const fn try_from_str(str_value: &str) -> Result<Self, Error> {
        const LAST: usize = 25;

        let bs = str_value.as_bytes();
        if bs.len() != LAST + 1 {
            return Err(Error::invalid_length(bs.len(), LAST + 1));
        }

        let mut int_value = 0u128;
        let mut i = 0;
        while i < LAST {
            let n = DECODE_MAP[bs[i] as usize];
            if n == 0xff {
                return Err(Error::invalid_char(str_value, i));
            }
            int_value = (int_value << 5) | n as u128;
            i += 1;
        }

        let n = DECODE_MAP[bs[LAST] as usize];
        if n == 0xff {
            return Err(Error::invalid_char(str_value, LAST));
        } else if n & 0b11 != 0 {
            return Err(Error::padding_bits(bs[LAST]));
        }
        Ok(Self::from_u128((int_value << 3) | (n >> 2) as u128))
    }

    /// Returns the 26-digit string representation stored in a stack-allocated string-like type
    /// that can be handled like [`String`] through common traits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monoulid::Ulid;
    ///
    /// let x = "01arz3ndektsv4rrffq69g5faw".parse::<Ulid>()?;
    /// let y = x.encode();
    /// assert_eq!(y, "01ARZ3NDEKTSV4RRFFQ69G5FAW");
    /// assert_eq!(format!("{}", y), "01ARZ3NDEKTSV4RRFFQ69G5FAW");
    /// # Ok::<(), monoulid::Error>(())
    /// ```
    pub const fn encode(&self) -> FStr<26> {
        let int_value = self.to_u128();
        let mut dst = [0u8; 26];
        let mut i = 0;
        while i < 25 {
            dst[i] = DIGITS[(int_value >> (123 - 5 * i as u32)) as usize & 0x1f];
            i += 1;
        }
        dst[25] = DIGITS[(int_value as usize & 0b111) << 2];

        // SAFETY: All bytes in `dst` are valid ASCII characters.
        unsafe { FStr::from_inner_unchecked(dst) }
    }
}

impl From<u128> for Ulid {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Ulid> for u128 {
    fn from(object: Ulid) -> Self {
        object.to_u128()
    }
}

impl From<[u8; 16]> for Ulid {
    /// Creates an object from a 16-byte big-endian byte array.
    fn from(value: [u8; 16]) -> Self {
        Self::from_byte_array(value)
    }
}

impl From<Ulid> for [u8; 16] {
    /// Returns the big-endian byte array representation.
    fn from(object: Ulid) -> Self {
        object.to_bytes()
    }
}

impl TryFrom<&[u8]> for Ulid {
    type Error = Error;

    /// Creates an object from a 16-byte big-endian byte slice.
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl AsRef<[u8]> for Ulid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl str::FromStr for Ulid {
    type Err = Error;

    /// Creates an object from a 26-digit string representation.
    fn from_str(str_value: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(str_value)
    }
}

impl TryFrom<&str> for Ulid {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from_str(value)
    }
}

impl fmt::Display for Ulid {
    /// Returns the 26-digit canonical string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monoulid::Ulid;
    ///
    /// let x = "0690YFKFB9Y0B4GSASQR5ZZPE8".parse::<Ulid>()?;
    /// assert_eq!(format!("{}", x), "0690YFKFB9Y0B4GSASQR5ZZPE8");
    /// assert_eq!(format!("{:32}", x), "0690YFKFB9Y0B4GSASQR5ZZPE8      ");
    /// assert_eq!(format!("{:->32}", x), "------0690YFKFB9Y0B4GSASQR5ZZPE8");
    /// assert_eq!(format!("{:.^7.5}", x), ".0690Y.");
    /// # Ok::<(), monoulid::Error>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.encode().as_str(), f)
    }
}

#[cfg(feature = "std")]
mod with_std {
    use super::{Error, Ulid};

    impl TryFrom<String> for Ulid {
        type Error = Error;

        fn try_from(value: String) -> Result<Self, Self::Error> {
            Self::try_from_str(&value)
        }
    }

    impl From<Ulid> for String {
        fn from(object: Ulid) -> Self {
            object.encode().into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{str, Ulid, DIGITS};
    use crate::{Error, ErrorKind, MonotonicGenerator, RandSource};

    const MAX_UINT48: u64 = (1 << 48) - 1;
    const MAX_UINT80: u128 = (1 << 80) - 1;

    /// A random source that yields the same byte forever.
    struct ConstSource(u8);

    impl RandSource for ConstSource {
        fn fill_exact(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            dest.fill(self.0);
            Ok(())
        }
    }

    /// Generates `N` ULIDs, ten per millisecond.
    fn generate<const N: usize>(byte: u8) -> [Ulid; N] {
        let mut g = MonotonicGenerator::with_rand_source(ConstSource(byte));
        let mut generated = [Ulid::NIL; N];
        for (i, e) in generated.iter_mut().enumerate() {
            *e = g.next(0x0123_4567_89ab + i as u64 / 10).unwrap();
        }
        generated
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        let cases: &[((u64, u128), &str)] = &[
            ((0, 0), "00000000000000000000000000"),
            ((MAX_UINT48, 0), "ZZZZZZZZZW0000000000000000"),
            ((MAX_UINT48, 0), "zzzzzzzzzw0000000000000000"),
            ((1, 0), "00000000040000000000000000"),
            ((0, MAX_UINT80), "0000000003ZZZZZZZZZZZZZZZW"),
            ((0, MAX_UINT80), "0000000003zzzzzzzzzzzzzzzw"),
            ((0, 1), "00000000000000000000000004"),
            ((MAX_UINT48, MAX_UINT80), "ZZZZZZZZZZZZZZZZZZZZZZZZZW"),
            (
                (0x0192_0f3e_6f5a, 0x7c05_9219_566f_82ff_f672),
                "0690YFKFB9Y0B4GSASQR5ZZPE8",
            ),
            (
                (0x0192_0f3e_6f5a, 0x7c05_9219_566f_82ff_f672),
                "0690yfkfb9y0b4gsasqr5zzpe8",
            ),
        ];

        for e in cases {
            let from_fields = Ulid::from_fields(e.0 .0, e.0 .1);
            let from_string = e.1.parse::<Ulid>().unwrap();

            assert_eq!(from_fields, from_string);
            assert_eq!(
                from_fields.to_u128(),
                ((e.0 .0 as u128) << 80) | e.0 .1
            );
            assert_eq!(
                from_string.to_bytes(),
                (((e.0 .0 as u128) << 80) | e.0 .1).to_be_bytes()
            );
            assert_eq!(
                (
                    (from_string.timestamp(), from_string.entropy()),
                    &from_string.encode() as &str
                ),
                (e.0, e.1.to_uppercase().as_str())
            );
            #[cfg(feature = "std")]
            assert_eq!(from_fields.to_string(), e.1.to_uppercase());
        }
    }

    /// Returns error if an invalid string representation is supplied
    #[test]
    fn returns_error_if_an_invalid_string_representation_is_supplied() {
        let cases = [
            ("", ErrorKind::InvalidLength),
            (" 01ARZ3NDEKTSV4RRFFQ69G5FAW", ErrorKind::InvalidLength),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAW ", ErrorKind::InvalidLength),
            ("01ARZ3NDEKTSV4RRFFQ69G5FA", ErrorKind::InvalidLength),
            ("01ARZ3NDEKTSV4RRFFQ69G5FA\u{e9}", ErrorKind::InvalidLength),
            ("01ARZ3NDEKTSV4RRFFQ69G5FA1", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAZ", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAz", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAU", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTSV4RRFFQ69G5FA-", ErrorKind::InvalidChar),
            ("+1ARZ3NDEKTSV4RRFFQ69G5FAW", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTSV4RRFFQ69G5F W", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTIV4RRFFQ69G5FAW", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTLV4RRFFQ69G5FAW", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTOV4RRFFQ69G5FAW", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTUV4RRFFQ69G5FAW", ErrorKind::InvalidChar),
            ("01ARZ3ND\tKTSV4RRFFQ69G5FAW", ErrorKind::InvalidChar),
            ("01ARZ3NDEK\u{6f22}V4RRFFQ69G5FA", ErrorKind::InvalidChar),
            ("\u{9808}ARZ3NDEKTSV4RRFFQ69G5FA", ErrorKind::InvalidChar),
            ("01ARZ3NDEKTSV4RRFFQ69G\u{5c3e}W", ErrorKind::InvalidChar),
            ("01ARZ3ND\u{1f923}TSV4RRFFQ69G5FAW", ErrorKind::InvalidLength),
        ];

        for (text, kind) in cases {
            let result = text.parse::<Ulid>();
            assert!(result.is_err(), "{:?}", text);
            assert_eq!(result.unwrap_err().kind(), kind, "{:?}", text);
        }

        // every legal last digit decodes; every other digit does not
        let mut buffer = *b"7ZZZZZZZZZZZZZZZZZZZZZZZZ0";
        for digit in DIGITS {
            buffer[25] = *digit;
            let text = str::from_utf8(&buffer).unwrap();
            assert_eq!(b"048CGMRW".contains(digit), text.parse::<Ulid>().is_ok());
        }
    }

    /// Returns error if a byte slice has the wrong length
    #[test]
    fn returns_error_if_a_byte_slice_has_the_wrong_length() {
        let bytes = [0xa5u8; 32];
        for len in [0, 1, 15, 17, 26, 32] {
            let err = Ulid::from_bytes(&bytes[..len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidLength);
            assert!(Ulid::try_from(&bytes[..len]).is_err());

            let mut dst = [0u8; 32];
            let err = Ulid::MAX.write_bytes(&mut dst[..len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidLength);
            assert!(dst.iter().all(|e| *e == 0));
        }

        let mut dst = [0u8; 16];
        Ulid::MAX.write_bytes(&mut dst).unwrap();
        assert_eq!(dst, [0xff; 16]);
    }

    /// Has symmetric converters from/to various values
    #[test]
    fn has_symmetric_converters_from_to_various_values() {
        let cases = [
            Ulid::NIL,
            Ulid::MAX,
            Ulid::from_fields(0, 0),
            Ulid::from_fields(MAX_UINT48, 0),
            Ulid::from_fields(0, MAX_UINT80),
            Ulid::from_fields(MAX_UINT48, MAX_UINT80),
        ];

        for e in cases.into_iter().chain(generate::<1000>(0x9b)) {
            assert_eq!(Ulid::try_from_str(&e.encode()).unwrap(), e);
            assert_eq!(e.encode().parse::<Ulid>().unwrap(), e);
            #[cfg(feature = "std")]
            assert_eq!(e.to_string().parse::<Ulid>().unwrap(), e);
            #[cfg(feature = "std")]
            assert_eq!(e.to_string().to_lowercase().parse::<Ulid>().unwrap(), e);
            #[cfg(feature = "std")]
            assert_eq!(Ulid::try_from(String::from(e)).unwrap(), e);
            assert_eq!(Ulid::from_u128(e.to_u128()), e);
            assert_eq!(Ulid::from(u128::from(e)), e);
            assert_eq!(Ulid::from_bytes(&e.to_bytes()).unwrap(), e);
            assert_eq!(Ulid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Ulid::from_byte_array(*e.as_bytes()), e);
            assert_eq!(Ulid::from_fields(e.timestamp(), e.entropy()), e);
        }
    }

    /// Returns Nil and Max ULIDs
    #[test]
    fn returns_nil_and_max_ulids() {
        assert_eq!(Ulid::max().to_bytes(), [0xff; 16]);
        assert_eq!(Ulid::max(), Ulid::MAX);
        assert_eq!(&Ulid::MAX.encode() as &str, "ZZZZZZZZZZZZZZZZZZZZZZZZZW");
        assert_eq!(Ulid::NIL.to_bytes(), [0x00; 16]);
        assert_eq!(Ulid::default(), Ulid::NIL);
        assert_eq!(&Ulid::NIL.encode() as &str, "00000000000000000000000000");
    }

    /// Supports comparison operators
    #[test]
    fn supports_comparison_operators() {
        #[cfg(feature = "std")]
        let hash = {
            use std::hash::BuildHasher as _;
            let s = std::collections::hash_map::RandomState::new();
            move |value: &Ulid| s.hash_one(value)
        };

        let ordered = [
            Ulid::from_fields(0, 0),
            Ulid::from_fields(0, 1),
            Ulid::from_fields(0, MAX_UINT80),
            Ulid::from_fields(1, 0),
            Ulid::from_fields(2, 0),
        ];
        let generated = generate::<1000>(0x17);
        let mut ordered = ordered.iter().chain(&generated).chain([&Ulid::MAX]);

        let mut prev = ordered.next().unwrap();
        for curr in ordered {
            assert_ne!(curr, prev);
            assert_ne!(prev, curr);
            #[cfg(feature = "std")]
            assert_ne!(hash(curr), hash(prev));
            assert!(curr > prev);
            assert!(curr >= prev);
            assert!(prev < curr);
            assert!(prev <= curr);
            assert!(curr.encode().as_str() > prev.encode().as_str());

            let clone = &curr.clone();
            assert_eq!(curr, clone);
            assert_eq!(clone, curr);
            #[cfg(feature = "std")]
            assert_eq!(hash(curr), hash(clone));
            assert!(curr >= clone);
            assert!(clone >= curr);
            assert!(curr <= clone);
            assert!(clone <= curr);

            prev = curr;
        }
    }
}

#[cfg(feature = "serde")]
mod with_serde {
    use super::{fmt, str, Ulid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Ulid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Ulid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = Ulid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a ULID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::Value::try_from_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            match <[u8; 16]>::try_from(value) {
                Ok(array_value) => Ok(Self::Value::from_byte_array(array_value)),
                Err(err) => match str::from_utf8(value) {
                    Ok(str_value) => self.visit_str(str_value),
                    _ => Err(de::Error::custom(err)),
                },
            }
        }

        fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
            Ok(Self::Value::from_u128(value))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Ulid;
        use serde_test::{Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000000000000000000000", &[0u8; 16]),
                (
                    "0690YFKFB9Y0B4GSASQR5ZZPE8",
                    &[
                        1, 146, 15, 62, 111, 90, 124, 5, 146, 25, 86, 111, 130, 255, 246, 114,
                    ],
                ),
                ("ZZZZZZZZZZZZZZZZZZZZZZZZZW", &[0xff; 16]),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Ulid>().unwrap();
                serde_test::assert_tokens(&e.readable(), &[Token::Str(text)]);
                serde_test::assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);

                // deserialize the other format regardless of human-readability configuration
                serde_test::assert_de_tokens(&e.readable(), &[Token::Bytes(bytes)]);
                serde_test::assert_de_tokens(&e.compact(), &[Token::Str(text)]);

                // deserialize textual representation even if passed as byte slice
                serde_test::assert_de_tokens(&e.readable(), &[Token::Bytes(text.as_bytes())]);
                serde_test::assert_de_tokens(&e.compact(), &[Token::Bytes(text.as_bytes())]);
            }

            // reject a malformed last digit
            serde_test::assert_de_tokens_error::<serde_test::Readable<Ulid>>(
                &[Token::Str("0690YFKFB9Y0B4GSASQR5ZZPE9")],
                "monoulid: invalid last character '9' (expected one of 0 4 8 C G M R W)",
            );
        }
    }
}

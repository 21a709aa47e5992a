/// An unsigned 80-bit integer held as a 16-bit high part and a 64-bit low part so that an
/// increment is a 64-bit addition with an explicit carry.
///
/// The field order makes the derived `Ord` agree with the numeric order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub(crate) struct Uint80 {
    hi: u16,
    lo: u64,
}

impl Uint80 {
    #[cfg(test)]
    pub const MAX: Self = Self {
        hi: u16::MAX,
        lo: u64::MAX,
    };

    /// Loads a value from a 10-byte big-endian array.
    pub const fn from_be_bytes(bytes: [u8; 10]) -> Self {
        let hi = (bytes[0] as u16) << 8 | bytes[1] as u16;
        let mut lo = 0u64;
        let mut i = 2;
        while i < 10 {
            lo = lo << 8 | bytes[i] as u64;
            i += 1;
        }
        Self { hi, lo }
    }

    /// Stores the value into a 10-byte big-endian array.
    pub const fn to_be_bytes(self) -> [u8; 10] {
        let hi = self.hi.to_be_bytes();
        let lo = self.lo.to_be_bytes();
        [
            hi[0], hi[1], lo[0], lo[1], lo[2], lo[3], lo[4], lo[5], lo[6], lo[7],
        ]
    }

    #[cfg(test)]
    pub const fn to_u128(self) -> u128 {
        (self.hi as u128) << 64 | self.lo as u128
    }

    /// Returns the value with the most significant bit (bit 79) cleared.
    pub const fn clear_msb(self) -> Self {
        Self {
            hi: self.hi & 0x7fff,
            lo: self.lo,
        }
    }

    /// Adds `increment`, returning `None` if the sum does not fit in 80 bits.
    pub const fn checked_add(self, increment: u64) -> Option<Self> {
        let (lo, carry) = self.lo.overflowing_add(increment);
        if !carry {
            return Some(Self { hi: self.hi, lo });
        }
        match self.hi.checked_add(1) {
            Some(hi) => Some(Self { hi, lo }),
            None => None,
        }
    }
}

//! Conversions between [`Uint128`] and the primitive numeric types
//!
//! Floating-point conversions are bit-exact: rather than rounding through
//! a native cast, the value is assembled from IEEE-754 bit patterns so the
//! result matches the hardware conversion of a true 128-bit integer.

use crate::uint128::Uint128;

const TWO_POW_128: f64 = 340282366920938463463374607431768211456.0;

// Bit patterns for 2^52, 2^76, 2^104 and 2^128 as f64
const TWO_POW_52_BITS: u64 = 0x4330000000000000;
const TWO_POW_76_BITS: u64 = 0x44B0000000000000;
const TWO_POW_104_BITS: u64 = 0x4670000000000000;
const TWO_POW_128_BITS: u64 = 0x47F0000000000000;

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Uint128 {
                fn from(value: $t) -> Self {
                    Uint128::new(0, value as u64)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Uint128 {
                fn from(value: $t) -> Self {
                    // Sign-extend to 128 bits
                    let lower = value as i64;
                    Uint128::new((lower >> 63) as u64, lower as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl Uint128 {
    /// Truncate to the low 64 bits
    pub const fn as_u64(self) -> u64 {
        self.lower()
    }

    /// Truncate to the low 32 bits
    pub const fn as_u32(self) -> u32 {
        self.lower() as u32
    }

    /// Truncate to the low 16 bits
    pub const fn as_u16(self) -> u16 {
        self.lower() as u16
    }

    /// Truncate to the low 8 bits
    pub const fn as_u8(self) -> u8 {
        self.lower() as u8
    }

    /// Truncate to the platform word size
    pub const fn as_usize(self) -> usize {
        self.lower() as usize
    }

    /// Convert from a double, truncating toward zero
    ///
    /// Negative values and NaN map to zero; values of 2^128 or more
    /// saturate to [`Uint128::MAX`].
    pub fn from_f64(value: f64) -> Uint128 {
        if !(value >= 0.0) {
            return Uint128::ZERO;
        }
        if value >= TWO_POW_128 {
            return Uint128::MAX;
        }
        if value >= 1.0 {
            // Place the implicit mantissa bit at the top of the upper word,
            // then shift down by the unbiased exponent distance from 2^127.
            let bits = value.to_bits();
            let result = Uint128::new((bits << 12) >> 1 | 0x8000_0000_0000_0000, 0);
            return result >> (1023 + 128 - 1 - (bits >> 52)) as u32;
        }
        Uint128::ZERO
    }

    /// Convert from a single-precision float, truncating toward zero
    pub fn from_f32(value: f32) -> Uint128 {
        Uint128::from_f64(value as f64)
    }

    /// Convert to the nearest double
    pub fn to_f64(self) -> f64 {
        if self.upper() == 0 {
            return self.lower() as f64;
        }
        if self.upper() >> 24 == 0 {
            // Fits in 88 bits: split as low 52 bits + remaining bits scaled
            // by 2^52, each manufactured as an exact double.
            let lo = f64::from_bits(TWO_POW_52_BITS | ((self.lower() << 12) >> 12))
                - f64::from_bits(TWO_POW_52_BITS);
            let hi = f64::from_bits(TWO_POW_104_BITS | (self >> 52u32).lower())
                - f64::from_bits(TWO_POW_104_BITS);
            return lo + hi;
        }
        // Full width: low 76 bits and high 52 bits, same construction.
        let lo = f64::from_bits(
            TWO_POW_76_BITS | ((self >> 12u32).lower() >> 12) | (self.lower() & 0xFFFFFF),
        ) - f64::from_bits(TWO_POW_76_BITS);
        let hi = f64::from_bits(TWO_POW_128_BITS | (self >> 76u32).lower())
            - f64::from_bits(TWO_POW_128_BITS);
        lo + hi
    }

    /// Convert to the nearest single-precision float
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Little-endian byte representation
    pub const fn to_le_bytes(self) -> [u8; 16] {
        let lo = self.lower().to_le_bytes();
        let hi = self.upper().to_le_bytes();
        [
            lo[0], lo[1], lo[2], lo[3], lo[4], lo[5], lo[6], lo[7], hi[0], hi[1], hi[2], hi[3],
            hi[4], hi[5], hi[6], hi[7],
        ]
    }

    /// Big-endian byte representation
    pub const fn to_be_bytes(self) -> [u8; 16] {
        let hi = self.upper().to_be_bytes();
        let lo = self.lower().to_be_bytes();
        [
            hi[0], hi[1], hi[2], hi[3], hi[4], hi[5], hi[6], hi[7], lo[0], lo[1], lo[2], lo[3],
            lo[4], lo[5], lo[6], lo[7],
        ]
    }

    /// Reconstruct from little-endian bytes
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Uint128 {
        let lower = u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let upper = u64::from_le_bytes([
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ]);
        Uint128::new(upper, lower)
    }

    /// Reconstruct from big-endian bytes
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Uint128 {
        let upper = u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let lower = u64::from_be_bytes([
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ]);
        Uint128::new(upper, lower)
    }
}

use crate::divmod;
use crate::error::ParseUintError;
use num_traits::{Bounded, Num, One, Zero};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/// An unsigned 128-bit integer stored as two 64-bit words
///
/// The value is `upper * 2^64 + lower`. All arithmetic wraps modulo 2^128,
/// matching native unsigned integer semantics. Division by zero yields zero
/// instead of panicking; use [`Uint128::checked_div`] when that policy is
/// not acceptable.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Uint128 {
    // upper is declared first so the derived ordering compares it first
    upper: u64,
    lower: u64,
}

impl Uint128 {
    pub const ZERO: Uint128 = Uint128 { upper: 0, lower: 0 };
    pub const ONE: Uint128 = Uint128 { upper: 0, lower: 1 };
    pub const MIN: Uint128 = Uint128::ZERO;
    pub const MAX: Uint128 = Uint128 {
        upper: u64::MAX,
        lower: u64::MAX,
    };

    /// Width of the type in bits
    pub const BITS: u32 = 128;

    /// Number of decimal digits representable without loss
    pub const DIGITS10: u32 = 38;

    /// Create a new value from upper and lower 64-bit words
    pub const fn new(upper: u64, lower: u64) -> Uint128 {
        Uint128 { upper, lower }
    }

    /// Get the upper 64 bits
    pub const fn upper(self) -> u64 {
        self.upper
    }

    /// Get the lower 64 bits
    pub const fn lower(self) -> u64 {
        self.lower
    }

    /// Count leading zero bits across both words
    pub const fn leading_zeros(self) -> u32 {
        if self.upper != 0 {
            self.upper.leading_zeros()
        } else {
            64 + self.lower.leading_zeros()
        }
    }

    /// Two's complement negation (bitwise NOT then increment)
    pub fn wrapping_neg(self) -> Uint128 {
        !self + Uint128::ONE
    }

    /// Quotient, or `None` when the divisor is zero
    pub fn checked_div(self, other: Uint128) -> Option<Uint128> {
        if other.is_zero() {
            None
        } else {
            Some(self / other)
        }
    }

    /// Remainder, or `None` when the divisor is zero
    pub fn checked_rem(self, other: Uint128) -> Option<Uint128> {
        if other.is_zero() {
            None
        } else {
            Some(self % other)
        }
    }

    /// Full 64x64 -> 128 multiply from four 32x32 partial products
    pub(crate) const fn big_mul(a: u64, b: u64) -> (u64, u64) {
        let al = a as u32 as u64;
        let ah = a >> 32;
        let bl = b as u32 as u64;
        let bh = b >> 32;
        let mull = al * bl;
        let t = ah * bl + (mull >> 32);
        let tl = al * bh + (t as u32 as u64);
        let lower = (tl << 32) | (mull as u32 as u64);
        let upper = ah * bh + (t >> 32) + (tl >> 32);
        (upper, lower)
    }
}

// Implement basic arithmetic operations
impl Add for Uint128 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let lower = self.lower.wrapping_add(other.lower);
        let carry = (lower < self.lower) as u64;
        Uint128::new(
            self.upper.wrapping_add(other.upper).wrapping_add(carry),
            lower,
        )
    }
}

impl Add<u64> for Uint128 {
    type Output = Self;

    fn add(self, other: u64) -> Self::Output {
        self + Uint128::from(other)
    }
}

impl Add<Uint128> for u64 {
    type Output = Uint128;

    fn add(self, other: Uint128) -> Self::Output {
        Uint128::from(self) + other
    }
}

impl Sub for Uint128 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let lower = self.lower.wrapping_sub(other.lower);
        let borrow = (lower > self.lower) as u64;
        Uint128::new(
            self.upper.wrapping_sub(other.upper).wrapping_sub(borrow),
            lower,
        )
    }
}

impl Sub<u64> for Uint128 {
    type Output = Self;

    fn sub(self, other: u64) -> Self::Output {
        self - Uint128::from(other)
    }
}

impl Sub<Uint128> for u64 {
    type Output = Uint128;

    fn sub(self, other: Uint128) -> Self::Output {
        Uint128::from(self) - other
    }
}

impl Mul for Uint128 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let (mut upper, lower) = Uint128::big_mul(self.lower, other.lower);
        upper = upper
            .wrapping_add(self.upper.wrapping_mul(other.lower))
            .wrapping_add(self.lower.wrapping_mul(other.upper));
        Uint128::new(upper, lower)
    }
}

impl Mul<u64> for Uint128 {
    type Output = Self;

    fn mul(self, other: u64) -> Self::Output {
        self * Uint128::from(other)
    }
}

impl Mul<Uint128> for u64 {
    type Output = Uint128;

    fn mul(self, other: Uint128) -> Self::Output {
        Uint128::from(self) * other
    }
}

impl Div for Uint128 {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        divmod::divide(self, other)
    }
}

impl Div<u64> for Uint128 {
    type Output = Self;

    fn div(self, other: u64) -> Self::Output {
        self / Uint128::from(other)
    }
}

impl Div<Uint128> for u64 {
    type Output = Uint128;

    fn div(self, other: Uint128) -> Self::Output {
        Uint128::from(self) / other
    }
}

impl Rem for Uint128 {
    type Output = Self;

    fn rem(self, other: Self) -> Self {
        let quotient = divmod::divide(self, other);
        self - quotient * other
    }
}

impl Rem<u64> for Uint128 {
    type Output = Self;

    fn rem(self, other: u64) -> Self::Output {
        self % Uint128::from(other)
    }
}

impl Rem<Uint128> for u64 {
    type Output = Uint128;

    fn rem(self, other: Uint128) -> Self::Output {
        Uint128::from(self) % other
    }
}

// Implement assignment operators
impl AddAssign for Uint128 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<u64> for Uint128 {
    fn add_assign(&mut self, other: u64) {
        *self = *self + other;
    }
}

impl SubAssign for Uint128 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<u64> for Uint128 {
    fn sub_assign(&mut self, other: u64) {
        *self = *self - other;
    }
}

impl MulAssign for Uint128 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<u64> for Uint128 {
    fn mul_assign(&mut self, other: u64) {
        *self = *self * other;
    }
}

impl DivAssign for Uint128 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl DivAssign<u64> for Uint128 {
    fn div_assign(&mut self, other: u64) {
        *self = *self / other;
    }
}

impl RemAssign for Uint128 {
    fn rem_assign(&mut self, other: Self) {
        *self = *self % other;
    }
}

impl RemAssign<u64> for Uint128 {
    fn rem_assign(&mut self, other: u64) {
        *self = *self % other;
    }
}

// Implement bitwise operations
impl Not for Uint128 {
    type Output = Self;

    fn not(self) -> Self {
        Uint128::new(!self.upper, !self.lower)
    }
}

impl BitAnd for Uint128 {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        Uint128::new(self.upper & other.upper, self.lower & other.lower)
    }
}

impl BitAnd<u64> for Uint128 {
    type Output = Self;

    fn bitand(self, other: u64) -> Self::Output {
        self & Uint128::from(other)
    }
}

impl BitAnd<Uint128> for u64 {
    type Output = Uint128;

    fn bitand(self, other: Uint128) -> Self::Output {
        Uint128::from(self) & other
    }
}

impl BitOr for Uint128 {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Uint128::new(self.upper | other.upper, self.lower | other.lower)
    }
}

impl BitOr<u64> for Uint128 {
    type Output = Self;

    fn bitor(self, other: u64) -> Self::Output {
        self | Uint128::from(other)
    }
}

impl BitOr<Uint128> for u64 {
    type Output = Uint128;

    fn bitor(self, other: Uint128) -> Self::Output {
        Uint128::from(self) | other
    }
}

impl BitXor for Uint128 {
    type Output = Self;

    fn bitxor(self, other: Self) -> Self {
        Uint128::new(self.upper ^ other.upper, self.lower ^ other.lower)
    }
}

impl BitXor<u64> for Uint128 {
    type Output = Self;

    fn bitxor(self, other: u64) -> Self::Output {
        self ^ Uint128::from(other)
    }
}

impl BitXor<Uint128> for u64 {
    type Output = Uint128;

    fn bitxor(self, other: Uint128) -> Self::Output {
        Uint128::from(self) ^ other
    }
}

impl BitAndAssign for Uint128 {
    fn bitand_assign(&mut self, other: Self) {
        *self = *self & other;
    }
}

impl BitOrAssign for Uint128 {
    fn bitor_assign(&mut self, other: Self) {
        *self = *self | other;
    }
}

impl BitXorAssign for Uint128 {
    fn bitxor_assign(&mut self, other: Self) {
        *self = *self ^ other;
    }
}

// Shifts are total over the whole shift domain: amounts of 128 or more
// clear the value, amounts below 64 carry bits across the word boundary.
impl Shl<u32> for Uint128 {
    type Output = Self;

    fn shl(self, shift: u32) -> Self {
        if shift == 0 {
            return self;
        }
        if shift >= 128 {
            return Uint128::ZERO;
        }
        if shift >= 64 {
            return Uint128::new(self.lower << (shift - 64), 0);
        }
        Uint128::new(
            (self.upper << shift) | (self.lower >> (64 - shift)),
            self.lower << shift,
        )
    }
}

impl Shl<usize> for Uint128 {
    type Output = Self;

    fn shl(self, shift: usize) -> Self {
        if shift >= 128 {
            return Uint128::ZERO;
        }
        self << shift as u32
    }
}

impl Shr<u32> for Uint128 {
    type Output = Self;

    fn shr(self, shift: u32) -> Self {
        if shift == 0 {
            return self;
        }
        if shift >= 128 {
            return Uint128::ZERO;
        }
        if shift >= 64 {
            return Uint128::new(0, self.upper >> (shift - 64));
        }
        Uint128::new(
            self.upper >> shift,
            (self.lower >> shift) | (self.upper << (64 - shift)),
        )
    }
}

impl Shr<usize> for Uint128 {
    type Output = Self;

    fn shr(self, shift: usize) -> Self {
        if shift >= 128 {
            return Uint128::ZERO;
        }
        self >> shift as u32
    }
}

impl ShlAssign<u32> for Uint128 {
    fn shl_assign(&mut self, shift: u32) {
        *self = *self << shift;
    }
}

impl ShlAssign<usize> for Uint128 {
    fn shl_assign(&mut self, shift: usize) {
        *self = *self << shift;
    }
}

impl ShrAssign<u32> for Uint128 {
    fn shr_assign(&mut self, shift: u32) {
        *self = *self >> shift;
    }
}

impl ShrAssign<usize> for Uint128 {
    fn shr_assign(&mut self, shift: usize) {
        *self = *self >> shift;
    }
}

// Combine both words so values differing only in one word still hash apart
impl Hash for Uint128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.upper ^ self.lower).hash(state);
    }
}

// Implement Zero trait
impl Zero for Uint128 {
    fn zero() -> Self {
        Uint128::ZERO
    }

    fn is_zero(&self) -> bool {
        self.upper == 0 && self.lower == 0
    }
}

// Implement One trait
impl One for Uint128 {
    fn one() -> Self {
        Uint128::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

// Implement Bounded trait
impl Bounded for Uint128 {
    fn min_value() -> Self {
        Uint128::MIN
    }

    fn max_value() -> Self {
        Uint128::MAX
    }
}

// Implement Num trait
/// Only radices 8, 10 and 16 are supported; any other radix returns
/// [`ParseUintError::UnsupportedRadix`].
impl Num for Uint128 {
    type FromStrRadixErr = ParseUintError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        match radix {
            8 | 10 | 16 => crate::format::parse_radix(str, radix),
            _ => Err(ParseUintError::UnsupportedRadix(radix)),
        }
    }
}

// Implement Sum and Product for iterator folds
impl Sum for Uint128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Uint128::ZERO, |acc, x| acc + x)
    }
}

impl Product for Uint128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Uint128::ONE, |acc, x| acc * x)
    }
}

// Implement Debug
impl fmt::Debug for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint128({}, {})", self.upper, self.lower)
    }
}

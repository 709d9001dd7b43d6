//! Long division for [`Uint128`]
//!
//! The slow path is Knuth's Algorithm D over 32-bit limbs: normalize the
//! divisor so its top limb has the high bit set, estimate each quotient
//! digit from the leading dividend limbs, then correct the estimate by at
//! most a few decrements before subtracting the scaled divisor in place.

use crate::uint128::Uint128;

/// Quotient of `lhs / rhs`. A zero divisor yields a zero quotient.
pub(crate) fn divide(lhs: Uint128, rhs: Uint128) -> Uint128 {
    if rhs == Uint128::ZERO {
        return Uint128::ZERO;
    }
    if lhs.upper() == 0 && rhs.upper() == 0 {
        return Uint128::new(0, lhs.lower() / rhs.lower());
    }
    if rhs >= lhs {
        return if rhs == lhs {
            Uint128::ONE
        } else {
            Uint128::ZERO
        };
    }
    divide_slow(lhs, rhs)
}

fn divide_slow(dividend: Uint128, divisor: Uint128) -> Uint128 {
    // Limbs are stored least significant first.
    let mut left = [
        dividend.lower() as u32,
        (dividend.lower() >> 32) as u32,
        dividend.upper() as u32,
        (dividend.upper() >> 32) as u32,
    ];
    let left_size = (4 - dividend.leading_zeros() / 32) as usize;

    let right = [
        divisor.lower() as u32,
        (divisor.lower() >> 32) as u32,
        divisor.upper() as u32,
        (divisor.upper() >> 32) as u32,
    ];
    let right_size = (4 - divisor.leading_zeros() / 32) as usize;

    let mut bits = [0u32; 4];
    let bits_size = left_size - right_size + 1;

    // Normalize so the divisor's top limb has its high bit set.
    let div_hi = right[right_size - 1];
    let div_lo = if right_size > 1 {
        right[right_size - 2]
    } else {
        0
    };
    let shift = div_hi.leading_zeros();
    let back_shift = 32 - shift;

    let (div_hi, div_lo) = if shift > 0 {
        let div_next = if right_size > 2 { right[right_size - 3] } else { 0 };
        (
            (div_hi << shift) | (div_lo >> back_shift),
            (div_lo << shift) | (div_next >> back_shift),
        )
    } else {
        (div_hi, div_lo)
    };

    let mut i = left_size;
    while i >= right_size {
        let n = i - right_size;
        let t = if i < left_size { left[i] as u64 } else { 0 };

        let mut value_hi = (t << 32) | left[i - 1] as u64;
        let mut value_lo = if i > 1 { left[i - 2] } else { 0 };

        if shift > 0 {
            let value_next = if i > 2 { left[i - 3] } else { 0 };
            value_hi = (value_hi << shift) | (value_lo >> back_shift) as u64;
            value_lo = (value_lo << shift) | (value_next >> back_shift);
        }

        // First digit estimate; can be at most two too large.
        let mut digit = value_hi / div_hi as u64;
        if digit > 0xFFFF_FFFF {
            digit = 0xFFFF_FFFF;
        }
        while divide_guess_too_big(digit, value_hi, value_lo, div_hi, div_lo) {
            digit -= 1;
        }

        if digit > 0 {
            let carry = subtract_divisor(&mut left[n..], &right, right_size, digit);
            if carry != t {
                debug_assert_eq!(carry, t.wrapping_add(1));
                // Estimate was still one too high; undo one subtraction.
                add_divisor(&mut left[n..], &right, right_size);
                digit -= 1;
            }
        }

        if n < bits_size {
            bits[n] = digit as u32;
        }
        if i < left_size {
            left[i] = 0;
        }
        i -= 1;
    }

    Uint128::new(
        ((bits[3] as u64) << 32) | bits[2] as u64,
        ((bits[1] as u64) << 32) | bits[0] as u64,
    )
}

fn divide_guess_too_big(q: u64, val_hi: u64, val_lo: u32, div_hi: u32, div_lo: u32) -> bool {
    let chk_hi = div_hi as u64 * q;
    let mut chk_lo = div_lo as u64 * q;
    let chk_hi = chk_hi + (chk_lo >> 32);
    chk_lo &= 0xFFFF_FFFF;
    if chk_hi < val_hi {
        return false;
    }
    if chk_hi > val_hi {
        return true;
    }
    chk_lo > val_lo as u64
}

fn subtract_divisor(left: &mut [u32], right: &[u32; 4], right_size: usize, q: u64) -> u64 {
    let mut carry = 0u64;
    for i in 0..right_size {
        carry += right[i] as u64 * q;
        let digit = carry as u32;
        carry >>= 32;
        let diff = left[i].wrapping_sub(digit);
        if diff > left[i] {
            carry += 1;
        }
        left[i] = diff;
    }
    carry
}

fn add_divisor(left: &mut [u32], right: &[u32; 4], right_size: usize) -> u64 {
    let mut carry = 0u64;
    for i in 0..right_size {
        let sum = left[i] as u64 + right[i] as u64 + carry;
        left[i] = sum as u32;
        carry = sum >> 32;
    }
    carry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_policy() {
        let a = Uint128::new(4, 5);
        assert_eq!(a / Uint128::ZERO, Uint128::ZERO);
        assert_eq!(Uint128::MAX / Uint128::ZERO, Uint128::ZERO);
        // Remainder is derived as a - (a/b)*b, so a % 0 == a.
        assert_eq!(a % Uint128::ZERO, a);
    }

    #[test]
    fn test_single_word_fast_path() {
        assert_eq!(
            Uint128::new(0, 1000) / Uint128::new(0, 2000),
            Uint128::ZERO
        );
        assert_eq!(Uint128::new(0, 1000) / Uint128::new(0, 1000), Uint128::ONE);
        assert_eq!(
            Uint128::new(0, 1000) / Uint128::new(0, 3),
            Uint128::new(0, 333)
        );
        assert_eq!(Uint128::new(0, 1000) % Uint128::new(0, 3), Uint128::ONE);
    }

    #[test]
    fn test_divisor_not_smaller_than_dividend() {
        let a = Uint128::new(4, 5);
        assert_eq!(a / a, Uint128::ONE);
        assert_eq!(a % a, Uint128::ZERO);
        assert_eq!(a / Uint128::new(4, 0xFFFFFFFFFFFFFFFD), Uint128::ZERO);
        assert_eq!(a / Uint128::MAX, Uint128::ZERO);
        assert_eq!(a % Uint128::MAX, a);
    }

    #[test]
    fn test_slow_path_small_divisors() {
        // MAX = 3 * 0x5555...55 exactly
        assert_eq!(
            Uint128::MAX / Uint128::new(0, 3),
            Uint128::new(0x5555555555555555, 0x5555555555555555)
        );
        assert_eq!(Uint128::MAX % Uint128::new(0, 3), Uint128::ZERO);

        assert_eq!(
            Uint128::MAX / Uint128::new(0, 10),
            Uint128::new(0x1999999999999999, 0x9999999999999999)
        );
        assert_eq!(Uint128::MAX % Uint128::new(0, 10), Uint128::new(0, 5));
    }

    #[test]
    fn test_slow_path_large_divisors() {
        // MAX / 2^64 = 2^64 - 1
        assert_eq!(
            Uint128::MAX / Uint128::new(1, 0),
            Uint128::new(0, u64::MAX)
        );
        assert_eq!(
            Uint128::MAX % Uint128::new(1, 0),
            Uint128::new(0, u64::MAX)
        );

        // 2^127 / (2^63 + 1): exercises the estimate-correction loop
        let dividend = Uint128::new(1 << 63, 0);
        let divisor = Uint128::new(0, (1 << 63) + 1);
        assert_eq!(
            dividend / divisor,
            Uint128::new(0, 0xFFFF_FFFF_FFFF_FFFE)
        );
        assert_eq!(dividend % divisor, Uint128::new(0, 2));
    }

    #[test]
    fn test_division_identity() {
        let cases = [
            (Uint128::new(4, 5), Uint128::new(0, 3)),
            (Uint128::new(u64::MAX, 0), Uint128::new(0, u64::MAX)),
            (Uint128::MAX, Uint128::new(0x1234, 0x5678)),
            (Uint128::new(0xDEADBEEF, 0xCAFEBABE), Uint128::new(0, 7)),
            (Uint128::new(1, 1), Uint128::new(0, (1 << 32) + 3)),
        ];
        for (a, b) in cases {
            let q = a / b;
            let r = a % b;
            assert_eq!(q * b + r, a, "identity failed for {:?} / {:?}", a, b);
            assert!(r < b, "remainder not reduced for {:?} / {:?}", a, b);
        }
    }

    #[test]
    fn test_shift_mul_div_chain() {
        let chained = ((Uint128::new(1, 0) << 2u32) >> 1u32) * 4u64 / Uint128::new(0, 3);
        assert_eq!(chained.upper(), 2);
        assert_eq!(chained.lower(), 0xAAAAAAAAAAAAAAAA);

        let other = ((Uint128::new(4, 5) << 2u32) >> 1u32) * 4u64;
        assert_eq!(other, Uint128::new(32, 40));
        assert_eq!(
            other / 3u64,
            Uint128::new(10, 0xAAAAAAAAAAAAAAB8)
        );
    }
}

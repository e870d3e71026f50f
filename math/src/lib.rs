//! Wide integer helpers shared by the reward, deposit and difficulty rules.
//!
//! Every consensus computation that multiplies two 64-bit quantities goes through
//! these helpers so the full 128-bit product is kept and overflow is detected
//! instead of being silently truncated.

/// Multiplies two `u64` values, returning the full product as `(low, high)` words.
#[inline]
pub const fn mul128(multiplier: u64, multiplicand: u64) -> (u64, u64) {
    let product = multiplier as u128 * multiplicand as u128;
    (product as u64, (product >> 64) as u64)
}

/// Divides the 128-bit value `dividend_hi:dividend_lo` by a 32-bit divisor.
///
/// Returns `(quotient_hi, quotient_lo, remainder)`. The divisor must be nonzero.
#[inline]
pub const fn div128_32(dividend_hi: u64, dividend_lo: u64, divisor: u32) -> (u64, u64, u32) {
    let dividend = ((dividend_hi as u128) << 64) | dividend_lo as u128;
    let quotient = dividend / divisor as u128;
    let remainder = (dividend % divisor as u128) as u32;
    ((quotient >> 64) as u64, quotient as u64, remainder)
}

/// Computes `ceil(a * b / divisor)` with the reference overflow rule: the product must
/// fit in 64 bits and adding `divisor - 1` to it must not wrap. Returns `None` otherwise.
#[inline]
pub fn mul_div_ceil(a: u64, b: u64, divisor: u64) -> Option<u64> {
    if divisor == 0 {
        return None;
    }
    let (low, high) = mul128(a, b);
    if high != 0 {
        return None;
    }
    let rounded = low.checked_add(divisor - 1)?;
    Some(rounded / divisor)
}

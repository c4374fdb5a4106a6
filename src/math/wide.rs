//! 256-bit helpers for reserve products.
//!
//! Reserves are capped at 112 bits, so a product of two reserves needs up
//! to 224 bits, and the fee-scaled products of the swap check need a few
//! more. Everything here widens `u128` operands to [`U256`] before
//! multiplying and narrows back with an explicit overflow check.

use ethnum::U256;

use crate::error::AmmError;

/// Widens a `u128` to 256 bits.
#[inline]
#[must_use]
pub fn widen(value: u128) -> U256 {
    U256::from(value)
}

/// Narrows a 256-bit value back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the value needs more
/// than 128 bits.
#[inline]
pub fn narrow(value: U256, context: &'static str) -> Result<u128, AmmError> {
    let (hi, lo) = value.into_words();
    if hi != 0 {
        return Err(AmmError::Overflow(context));
    }
    Ok(lo)
}

/// `floor(a × b / d)` with a 256-bit intermediate product.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use hydra_dex::math::mul_div;
///
/// // u128::MAX * 4 / 8 does not fit in 128 bits mid-way, but the result does.
/// assert_eq!(mul_div(u128::MAX, 4, 8, "test"), Ok(u128::MAX / 2));
/// ```
pub fn mul_div(a: u128, b: u128, d: u128, context: &'static str) -> Result<u128, AmmError> {
    if d == 0 {
        return Err(AmmError::DivisionByZero);
    }
    narrow(widen(a) * widen(b) / widen(d), context)
}

/// Integer square root (floor) via Newton's method.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n <= U256::ONE {
        return n;
    }
    let mut x = n;
    // ceil(n / 2) without the `n + 1` overflow
    let mut y = (n >> 1u32) + (n & U256::ONE);
    while y < x {
        x = y;
        y = (x + n / x) >> 1u32;
    }
    x
}

/// `floor(√(a × b))`, the geometric mean of two amounts.
///
/// # Errors
///
/// Never fails for `u128` inputs in practice; the narrowing is checked anyway.
///
/// # Examples
///
/// ```
/// use hydra_dex::math::sqrt_product;
///
/// assert_eq!(sqrt_product(100, 100), Ok(100));
/// assert_eq!(sqrt_product(2, 3), Ok(2));
/// ```
pub fn sqrt_product(a: u128, b: u128) -> Result<u128, AmmError> {
    narrow(isqrt(widen(a) * widen(b)), "geometric mean overflow")
}

//! Stateless pricing against a pair of reserves.
//!
//! All three functions are integer-only and floor their results, except
//! [`quote_input`], which rounds up by one so the input it names is always
//! enough. Fees are applied on a 10 000 basis-point scale; at the default
//! 30 bps the results equal the classic `997 / 1000` formulas.

use ethnum::U256;

use crate::domain::{Amount, FeeTier, BPS_DENOMINATOR};
use crate::error::AmmError;
use crate::math::{mul_div, narrow, widen};

/// Output a swap of `amount_in` buys:
/// `⌊in × (10⁴ − fee) × R_out / (R_in × 10⁴ + in × (10⁴ − fee))⌋`.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] for inputs too large for 256-bit arithmetic.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Amount, FeeTier};
/// use hydra_dex::router::quote_output;
///
/// let out = quote_output(
///     Amount::new(1_000),
///     Amount::new(100_000),
///     Amount::new(100_000),
///     FeeTier::STANDARD,
/// );
/// assert_eq!(out, Ok(Amount::new(987)));
/// ```
pub fn quote_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let in_with_fee = widen(amount_in.get()) * widen(fee.complement());
    let numerator = in_with_fee
        .checked_mul(widen(reserve_out.get()))
        .ok_or(AmmError::Overflow("quote numerator"))?;
    let denominator = widen(reserve_in.get())
        .checked_mul(widen(BPS_DENOMINATOR))
        .and_then(|d| d.checked_add(in_with_fee))
        .ok_or(AmmError::Overflow("quote denominator"))?;
    Ok(Amount::new(narrow(numerator / denominator, "quote output")?))
}

/// Smallest input that buys `amount_out`:
/// `⌊R_in × out × 10⁴ / ((R_out − out) × (10⁴ − fee))⌋ + 1`.
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out` would take the whole output reserve.
/// - [`AmmError::DivisionByZero`] for a 100% fee.
/// - [`AmmError::Overflow`] if the input does not fit an [`Amount`].
pub fn quote_input(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    let numerator = widen(reserve_in.get())
        .checked_mul(widen(amount_out.get()))
        .and_then(|n| n.checked_mul(widen(BPS_DENOMINATOR)))
        .ok_or(AmmError::Overflow("quote numerator"))?;
    let denominator =
        widen(reserve_out.get() - amount_out.get()) * widen(fee.complement());
    if denominator == U256::ZERO {
        return Err(AmmError::DivisionByZero);
    }
    let amount_in = narrow(numerator / denominator, "quote input")?;
    amount_in
        .checked_add(1)
        .map(Amount::new)
        .ok_or(AmmError::Overflow("quote input"))
}

/// Amount of the other asset worth `amount_a` at the reserve ratio:
/// `⌊a × R_b / R_a⌋`.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_a` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, AmmError> {
    if amount_a.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(amount_a.get(), reserve_b.get(), reserve_a.get(), "quote").map(Amount::new)
}

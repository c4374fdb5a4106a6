//! Swap fee expressed in basis points.

use core::fmt;

/// Basis-point denominator (10 000 = 100%).
pub const BPS_DENOMINATOR: u128 = 10_000;

/// The swap fee retained by a pool, in basis points of the input.
///
/// The fee is applied on the 10 000 scale: an input `x` counts as
/// `x × (10 000 − bps)` against `reserve × 10 000`. At 30 bps this matches
/// the classic `997 / 1000` formulas exactly, because both sides carry the
/// same factor of ten.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::FeeTier;
///
/// let fee = FeeTier::default();
/// assert_eq!(fee.bps(), 30);
/// assert_eq!(fee.complement(), 9_970);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeTier(u16);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(0);

    /// 0.30%, the standard constant-product fee.
    pub const STANDARD: Self = Self(30);

    /// 1.00%.
    pub const HIGH: Self = Self(100);

    /// Creates a fee tier from basis points.
    #[must_use]
    pub const fn new(bps: u16) -> Self {
        Self(bps)
    }

    /// Fee in basis points.
    #[must_use]
    pub const fn bps(&self) -> u128 {
        self.0 as u128
    }

    /// The share of the input that prices the trade: `10 000 − bps`.
    ///
    /// Saturates at zero for nonsensical tiers above 100%; such tiers are
    /// rejected by [`PoolConfig::validate`](crate::config::PoolConfig::validate).
    #[must_use]
    pub const fn complement(&self) -> u128 {
        BPS_DENOMINATOR.saturating_sub(self.0 as u128)
    }

    /// Returns `true` if the fee is strictly below 100%.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        (self.0 as u128) < BPS_DENOMINATOR
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_matches_three_per_mille() {
        // 997/1000 scaled by 10
        assert_eq!(FeeTier::STANDARD.complement(), 997 * 10);
        assert_eq!(FeeTier::STANDARD.bps(), 3 * 10);
    }

    #[test]
    fn validity() {
        assert!(FeeTier::ZERO.is_valid());
        assert!(FeeTier::new(9_999).is_valid());
        assert!(!FeeTier::new(10_000).is_valid());
        assert_eq!(FeeTier::new(20_000).complement(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::HIGH.to_string(), "100bp");
    }
}

//! Configuration shared by every pool a registry creates.

use crate::domain::{FeeTier, Shares};
use crate::error::AmmError;

/// Shares burned to the sink account on a pool's first deposit.
pub const MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

/// Immutable parameters of a constant-product pool.
///
/// # Defaults
///
/// - Fee: [`FeeTier::STANDARD`] (0.30%).
/// - Minimum liquidity: [`MINIMUM_LIQUIDITY`] (1 000 shares).
///
/// # Validation
///
/// - The fee must be strictly below 100%.
/// - The minimum liquidity must be non-zero; it is what keeps the share
///   price of an emptied pool from collapsing to zero.
///
/// # Examples
///
/// ```
/// use hydra_dex::config::PoolConfig;
/// use hydra_dex::domain::{FeeTier, Shares};
///
/// let cfg = PoolConfig::default();
/// assert_eq!(cfg.fee_tier(), FeeTier::STANDARD);
/// assert_eq!(cfg.minimum_liquidity(), Shares::new(1_000));
///
/// assert!(PoolConfig::new(FeeTier::new(10_000), Shares::new(1_000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    fee_tier: FeeTier,
    minimum_liquidity: Shares,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out of
    /// range (see [`validate`](Self::validate)).
    pub fn new(fee_tier: FeeTier, minimum_liquidity: Shares) -> Result<Self, AmmError> {
        let config = Self {
            fee_tier,
            minimum_liquidity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configs bypass [`new`](Self::new), so callers loading
    /// one from disk should validate it before use.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the fee is 100% or more
    /// or the minimum liquidity is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.fee_tier.is_valid() {
            return Err(AmmError::InvalidConfiguration(
                "fee tier must be below 10000 bps",
            ));
        }
        if self.minimum_liquidity.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "minimum liquidity must be non-zero",
            ));
        }
        Ok(())
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the minimum liquidity locked on first deposit.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Shares {
        self.minimum_liquidity
    }
}

#[cfg(test)]
impl PoolConfig {
    /// Builds a config without validation, as deserialization would.
    pub(crate) const fn unchecked(fee_tier: FeeTier, minimum_liquidity: Shares) -> Self {
        Self {
            fee_tier,
            minimum_liquidity,
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fee_tier: FeeTier::STANDARD,
            minimum_liquidity: MINIMUM_LIQUIDITY,
        }
    }
}

//! Checked arithmetic trait for the domain quantity types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning checked operations on
//! [`Amount`] and [`Shares`] into `Result<Self, AmmError>`, so engine code
//! can chain them with `?`.
//!
//! # Examples
//!
//! ```
//! use hydra_dex::domain::Amount;
//! use hydra_dex::error::AmmError;
//! use hydra_dex::math::CheckedArithmetic;
//!
//! assert_eq!(Amount::new(2).safe_add(&Amount::new(3)), Ok(Amount::new(5)));
//! assert!(matches!(
//!     Amount::new(2).safe_sub(&Amount::new(3)),
//!     Err(AmmError::Underflow(_))
//! ));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain quantity types.
///
/// - **No panics**: every failure is an `Err`.
/// - **No saturation**: overflow is reported, never clamped.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn amount_add_overflow() {
        let Err(AmmError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn amount_sub_ok() {
        assert_eq!(
            Amount::new(300).safe_sub(&Amount::new(100)),
            Ok(Amount::new(200))
        );
    }

    #[test]
    fn shares_sub_underflow() {
        let Err(AmmError::Underflow(_)) = Shares::new(1).safe_sub(&Shares::new(2)) else {
            panic!("expected Underflow");
        };
    }

    #[test]
    fn shares_add_ok() {
        assert_eq!(
            Shares::new(1_000).safe_add(&Shares::new(1)),
            Ok(Shares::new(1_001))
        );
    }
}

//! Raw asset amount with checked arithmetic.

use core::fmt;

/// Largest value a pool reserve may hold (`2^112 − 1`).
///
/// Keeping reserves to 112 bits lets every reserve product, including the
/// fee-scaled products of the swap check, fit in 256-bit arithmetic.
pub const MAX_RESERVE: u128 = (1u128 << 112) - 1;

/// An asset amount in the asset's own smallest unit.
///
/// `Amount` never converts between units. Every `u128` is a valid amount;
/// only pool reserves are additionally bounded by [`MAX_RESERVE`].
///
/// Arithmetic methods are checked and return `None` instead of panicking.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(250);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(350)));
/// assert_eq!(a.checked_sub(&b), None);
/// assert_eq!(a.saturating_sub(&b), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128`.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount can be stored as a pool reserve.
    #[must_use]
    pub const fn fits_reserve(&self) -> bool {
        self.0 <= MAX_RESERVE
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Subtraction clamped at zero.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Addition clamped at [`Amount::MAX`].
    pub const fn saturating_add(&self, other: &Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
        assert_eq!(Amount::from(7u128), Amount::new(7));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn reserve_bound() {
        assert!(Amount::new(MAX_RESERVE).fits_reserve());
        assert!(!Amount::new(MAX_RESERVE + 1).fits_reserve());
        assert!(!Amount::MAX.fits_reserve());
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(
            Amount::new(1).checked_add(&Amount::new(2)),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
        assert_eq!(Amount::new(5).checked_sub(&Amount::new(5)), Some(Amount::ZERO));
    }

    #[test]
    fn saturating_sub_clamps() {
        assert_eq!(Amount::new(3).saturating_sub(&Amount::new(10)), Amount::ZERO);
        assert_eq!(Amount::new(10).saturating_sub(&Amount::new(3)), Amount::new(7));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }
}

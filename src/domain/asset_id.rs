//! Chain-agnostic asset and account identifiers.

use core::fmt;

/// Identifier of a fungible asset (the ledger it lives on).
///
/// Wraps a fixed `[u8; 32]`. Identifiers are totally ordered by their bytes
/// (lexicographically), which is the order used to canonicalize pairs. The
/// all-zero identifier is the null asset and is rejected wherever a real
/// asset is required.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// assert!(!usdc.is_zero());
/// assert!(AssetId::zero() < usdc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The null asset identifier.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the null identifier.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short_hex(f, &self.0)
    }
}

/// A holder of balances on a ledger: a user, the router, or a pool.
///
/// [`AccountId::SINK`] is reserved: it receives the minimum liquidity burned
/// on a pool's first deposit, and its shares can never be moved.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::AccountId;
///
/// let alice = AccountId::from_bytes([7u8; 32]);
/// assert!(!alice.is_sink());
/// assert!(AccountId::SINK.is_sink());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Unspendable account holding permanently locked shares.
    pub const SINK: Self = Self([0u8; 32]);

    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns `true` for [`AccountId::SINK`].
    #[must_use]
    pub fn is_sink(&self) -> bool {
        *self == Self::SINK
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short_hex(f, &self.0)
    }
}

/// Writes `0x` plus the first four bytes in hex, enough to tell ids apart in logs.
pub(crate) fn write_short_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8; 32]) -> fmt::Result {
    f.write_str("0x")?;
    for b in &bytes[..4] {
        write!(f, "{b:02x}")?;
    }
    f.write_str("…")
}

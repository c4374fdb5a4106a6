//! Canonically ordered pair of distinct assets, and the pool id derived from it.

use core::fmt;

use super::{AccountId, AssetId};
use crate::error::AmmError;

/// Domain separator mixed into every pool id hash.
const POOL_ID_DOMAIN: &[u8] = b"HYDRA_DEX_POOL_V1";

/// An unordered pair of distinct, non-null assets stored in canonical order.
///
/// The canonical order guarantees `first() < second()`, so `(A, B)` and
/// `(B, A)` build the same value and address the same pool.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// assert_eq!(pair, AssetPair::new(a, b).expect("distinct assets"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    first: AssetId,
    second: AssetId,
}

impl AssetPair {
    /// Creates a canonically ordered pair.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both ids are equal.
    /// - [`AmmError::ZeroAsset`] if either id is the null asset.
    pub fn new(x: AssetId, y: AssetId) -> Result<Self, AmmError> {
        if x == y {
            return Err(AmmError::IdenticalAssets);
        }
        if x.is_zero() || y.is_zero() {
            return Err(AmmError::ZeroAsset);
        }
        let (first, second) = if x < y { (x, y) } else { (y, x) };
        Ok(Self { first, second })
    }

    /// Builds a pair from ids the caller has already put in canonical order.
    pub(crate) const fn from_ordered(first: AssetId, second: AssetId) -> Self {
        Self { first, second }
    }

    /// The lower asset id.
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.first
    }

    /// The higher asset id.
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.second
    }

    /// Returns `true` if `asset` is one side of the pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.first == *asset || self.second == *asset
    }

    /// Deterministic id of the pool trading this pair.
    #[must_use]
    pub fn pool_id(&self) -> PoolId {
        let mut hasher = blake3::Hasher::new();
        hasher.update(POOL_ID_DOMAIN);
        hasher.update(self.first.as_bytes());
        hasher.update(self.second.as_bytes());
        PoolId(*hasher.finalize().as_bytes())
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}

/// Stable identifier of a pool, derived from its canonical pair.
///
/// `PoolId = blake3(domain || first || second)`, so anyone can compute a
/// pool's id off-path without asking the registry.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{AssetId, PoolId};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// assert_eq!(PoolId::derive(a, b).ok(), PoolId::derive(b, a).ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolId([u8; 32]);

impl PoolId {
    /// Derives the pool id for an unordered pair of assets.
    ///
    /// # Errors
    ///
    /// Same as [`AssetPair::new`].
    pub fn derive(x: AssetId, y: AssetId) -> Result<Self, AmmError> {
        Ok(AssetPair::new(x, y)?.pool_id())
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The ledger account a pool holds its balances under.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        AccountId::from_bytes(self.0)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::asset_id::write_short_hex(f, &self.0)
    }
}

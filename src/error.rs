//! Unified error types for the Hydra DEX engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, so a caller can match a single enum regardless of whether a
//! failure came from the pool engine, the registry, or the router.
//!
//! Every failure is synchronous and aborts only the call that raised it.
//! Nothing in the crate retries internally.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Broad classification of an [`AmmError`].
///
/// # Examples
///
/// ```
/// use hydra_dex::error::{AmmError, ErrorKind};
///
/// assert_eq!(AmmError::Expired.kind(), ErrorKind::Policy);
/// assert_eq!(AmmError::Reentrant.kind(), ErrorKind::Integrity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structurally invalid or inconsistent arguments.
    Configuration,
    /// Economic preconditions not met against current reserves.
    Liquidity,
    /// Caller-supplied policy (deadline) violated.
    Policy,
    /// The call was malformed or manipulated.
    Integrity,
    /// Checked arithmetic failed.
    Arithmetic,
}

/// Unified error enum for every operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    // -- configuration ------------------------------------------------------
    /// The pool's asset identifiers were already set.
    #[error("pool is already initialized")]
    AlreadyInitialized,

    /// The pool has not been initialized with its asset pair.
    #[error("pool is not initialized")]
    NotInitialized,

    /// Both sides of a pair name the same asset.
    #[error("identical assets")]
    IdenticalAssets,

    /// One side of a pair is the null asset identifier.
    #[error("zero asset identifier")]
    ZeroAsset,

    /// A pool already exists for the canonical pair.
    #[error("pair already exists")]
    PairExists,

    /// No pool exists for the requested pair.
    #[error("pair not found")]
    PairNotFound,

    /// A swap path has fewer than two assets.
    #[error("invalid path: at least two assets are required")]
    InvalidPath,

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    // -- liquidity / amounts ------------------------------------------------
    /// Reserves cannot satisfy the request.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A deposit would mint zero (or negative) shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A withdrawal would return zero of either asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// No input was supplied, or more input is required than allowed.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// No output was requested, or the output is below the caller's bound.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// The first asset's amount fell below the caller's minimum.
    #[error("insufficient A amount")]
    InsufficientAAmount,

    /// The second asset's amount fell below the caller's minimum.
    #[error("insufficient B amount")]
    InsufficientBAmount,

    /// An account tried to move more shares than it holds or is allowed.
    #[error("insufficient shares")]
    InsufficientShares,

    /// Shares held by the sink account can never be moved.
    #[error("shares held by the sink account are locked")]
    LockedShares,

    // -- policy -------------------------------------------------------------
    /// The caller's deadline has passed.
    #[error("deadline expired")]
    Expired,

    // -- integrity ----------------------------------------------------------
    /// The fee-adjusted constant product decreased.
    #[error("constant-product invariant violated")]
    KInvariantViolated,

    /// A mutating call arrived while the pool was locked.
    #[error("reentrant call")]
    Reentrant,

    // -- arithmetic ---------------------------------------------------------
    /// A value exceeded its representable range.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction went below zero.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl AmmError {
    /// Returns the broad category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyInitialized
            | Self::NotInitialized
            | Self::IdenticalAssets
            | Self::ZeroAsset
            | Self::PairExists
            | Self::PairNotFound
            | Self::InvalidPath
            | Self::InvalidConfiguration(_) => ErrorKind::Configuration,
            Self::InsufficientLiquidity
            | Self::InsufficientLiquidityMinted
            | Self::InsufficientLiquidityBurned
            | Self::InsufficientInputAmount
            | Self::InsufficientOutputAmount
            | Self::InsufficientAAmount
            | Self::InsufficientBAmount
            | Self::InsufficientShares
            | Self::LockedShares => ErrorKind::Liquidity,
            Self::Expired => ErrorKind::Policy,
            Self::KInvariantViolated | Self::Reentrant => ErrorKind::Integrity,
            Self::Overflow(_) | Self::Underflow(_) | Self::DivisionByZero => ErrorKind::Arithmetic,
        }
    }
}

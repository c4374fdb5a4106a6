//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_dex::prelude::*;
//! ```
//!
//! Brings the domain types, the host traits, the pool, registry and
//! router, and the error types into scope in one import.

pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, Deadline, FeeTier, PoolId, Shares,
};

pub use crate::traits::{Clock, FixedClock, Ledger, SystemClock};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{PoolConfig, MINIMUM_LIQUIDITY};

pub use crate::error::{AmmError, Result};

pub use crate::factory::PoolRegistry;

pub use crate::pools::{Pool, SwapReceipt};

pub use crate::router::{AddLiquidity, ExactInput, ExactOutput, RemoveLiquidity, Router};

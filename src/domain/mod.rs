//! Fundamental domain value types used throughout the engine.
//!
//! Identifiers, amounts, shares, fees, and deadlines. Every type is a
//! newtype so that an asset id can never be passed where an account id is
//! expected, and an asset amount never where a share count is.

mod amount;
mod asset_id;
mod asset_pair;
mod deadline;
mod fee_tier;
mod shares;

pub use amount::{Amount, MAX_RESERVE};
pub use asset_id::{AccountId, AssetId};
pub use asset_pair::{AssetPair, PoolId};
pub use deadline::Deadline;
pub use fee_tier::{FeeTier, BPS_DENOMINATOR};
pub use shares::Shares;

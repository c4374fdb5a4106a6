//! Parameter sets for router calls.
//!
//! Each request carries the caller's slippage bounds, recipient and
//! deadline alongside the amounts, the way a transaction would.

use crate::domain::{AccountId, Amount, AssetId, Deadline, Shares};

/// Deposit into the `asset_a`/`asset_b` pool, creating it if needed.
///
/// Amounts are in the caller's asset order, not the pool's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLiquidity {
    pub asset_a: AssetId,
    pub asset_b: AssetId,
    pub amount_a_desired: Amount,
    pub amount_b_desired: Amount,
    pub amount_a_min: Amount,
    pub amount_b_min: Amount,
    /// Receives the minted shares.
    pub to: AccountId,
    pub deadline: Deadline,
}

/// Redeem `shares` of the `asset_a`/`asset_b` pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveLiquidity {
    pub asset_a: AssetId,
    pub asset_b: AssetId,
    pub shares: Shares,
    pub amount_a_min: Amount,
    pub amount_b_min: Amount,
    /// Receives both assets.
    pub to: AccountId,
    pub deadline: Deadline,
}

/// Sell exactly `amount_in` of `path[0]` for at least `amount_out_min` of
/// the last asset in `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactInput {
    pub amount_in: Amount,
    pub amount_out_min: Amount,
    pub path: Vec<AssetId>,
    pub to: AccountId,
    pub deadline: Deadline,
}

/// Buy exactly `amount_out` of the last asset in `path` for at most
/// `amount_in_max` of `path[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOutput {
    pub amount_out: Amount,
    pub amount_in_max: Amount,
    pub path: Vec<AssetId>,
    pub to: AccountId,
    pub deadline: Deadline,
}

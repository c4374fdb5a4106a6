//! The fungible-asset ledger the engine moves balances through.
//!
//! The engine never stores asset balances itself. Pools keep *reserves*,
//! their belief about what they hold, and reconcile them against
//! [`Ledger::balance_of`] after every external movement.
//!
//! # Trust Model
//!
//! The core trusts an implementation to honor standard semantics: a
//! successful transfer moves exactly `amount`, balances never change
//! behind the engine's back except through these calls. Boolean results
//! are reported but never used to abort; a ledger that fails silently only
//! shows up as a short balance delta on the next pool read.
//!
//! Calls are in-process, so the acting account is explicit: `from` for a
//! direct transfer, `spender` for an allowance-based one.

use crate::domain::{AccountId, Amount, AssetId};

/// Balance book for any number of fungible assets.
pub trait Ledger {
    /// Balance of `account` in `asset`. Unknown accounts hold zero.
    #[must_use]
    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// Returns `false` (and moves nothing) if `from` is short.
    fn transfer(&mut self, asset: &AssetId, from: &AccountId, to: &AccountId, amount: Amount)
        -> bool;

    /// Moves `amount` of `asset` from `from` to `to`, spending the allowance
    /// `from` granted `spender`.
    ///
    /// Returns `false` (and moves nothing) if the balance or allowance is short.
    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> bool;

    /// Sets the allowance `owner` grants `spender` over `asset`.
    fn approve(
        &mut self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> bool;
}

impl<L: Ledger + ?Sized> Ledger for &mut L {
    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        (**self).balance_of(asset, account)
    }

    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> bool {
        (**self).transfer(asset, from, to, amount)
    }

    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> bool {
        (**self).transfer_from(asset, spender, from, to, amount)
    }

    fn approve(
        &mut self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> bool {
        (**self).approve(asset, owner, spender, amount)
    }
}

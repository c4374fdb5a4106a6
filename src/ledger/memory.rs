//! In-memory multi-asset ledger.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{AccountId, Amount, AssetId};
use crate::traits::Ledger;

/// Hash-map backed ledger with standard balance and allowance semantics.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{AccountId, Amount, AssetId};
/// use hydra_dex::ledger::MemoryLedger;
/// use hydra_dex::traits::Ledger;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let bob = AccountId::from_bytes([0xb0; 32]);
///
/// let mut ledger = MemoryLedger::new();
/// ledger.mint(&usdc, &alice, Amount::new(100));
/// assert!(ledger.transfer(&usdc, &alice, &bob, Amount::new(40)));
/// assert!(!ledger.transfer(&usdc, &alice, &bob, Amount::new(61)));
/// assert_eq!(ledger.balance_of(&usdc, &bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    balances: HashMap<(AssetId, AccountId), Amount>,
    allowances: HashMap<(AssetId, AccountId, AccountId), Amount>,
    supply: HashMap<AssetId, Amount>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` of `asset` out of thin air and credits it to `to`.
    ///
    /// Returns `false` (and mints nothing) if the supply would overflow.
    pub fn mint(&mut self, asset: &AssetId, to: &AccountId, amount: Amount) -> bool {
        let supply = self.total_supply(asset);
        let Some(new_supply) = supply.checked_add(&amount) else {
            return false;
        };
        // supply bounds every balance, so the credit cannot overflow
        let balance = self.balance_of(asset, to).saturating_add(&amount);
        self.supply.insert(*asset, new_supply);
        self.balances.insert((*asset, *to), balance);
        trace!(%asset, %to, %amount, "mint");
        true
    }

    /// Total amount of `asset` ever minted.
    pub fn total_supply(&self, asset: &AssetId) -> Amount {
        self.supply.get(asset).copied().unwrap_or(Amount::ZERO)
    }

    /// Remaining allowance `owner` granted `spender` over `asset`.
    pub fn allowance(&self, asset: &AssetId, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*asset, *owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn debit_credit(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> bool {
        let Some(from_after) = self.balance_of(asset, from).checked_sub(&amount) else {
            return false;
        };
        self.balances.insert((*asset, *from), from_after);
        let to_after = self.balance_of(asset, to).saturating_add(&amount);
        self.balances.insert((*asset, *to), to_after);
        true
    }
}

impl Ledger for MemoryLedger {
    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        self.balances
            .get(&(*asset, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> bool {
        let ok = self.debit_credit(asset, from, to, amount);
        trace!(%asset, %from, %to, %amount, ok, "transfer");
        ok
    }

    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> bool {
        let allowed = self.allowance(asset, from, spender);
        let Some(remaining) = allowed.checked_sub(&amount) else {
            trace!(%asset, %spender, %from, %amount, %allowed, "allowance short");
            return false;
        };
        if !self.debit_credit(asset, from, to, amount) {
            return false;
        }
        if allowed != Amount::MAX {
            self.allowances.insert((*asset, *from, *spender), remaining);
        }
        trace!(%asset, %spender, %from, %to, %amount, "transfer_from");
        true
    }

    fn approve(
        &mut self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> bool {
        self.allowances.insert((*asset, *owner, *spender), amount);
        true
    }
}

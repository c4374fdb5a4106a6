//! Constant-product pool engine (Uniswap V2 style).
//!
//! A [`Pool`] holds two assets on an external [`Ledger`] and keeps
//! *reserves*: its record of those balances as of its last state change.
//! Every mutating operation is a two-phase exchange with the ledger:
//! read balances, compare them to the reserves, then settle and resync.
//!
//! # Deposit
//!
//! The depositor transfers both assets to [`Pool::account`] first, then
//! calls [`Pool::deposit`]. The amounts are the balance deltas:
//!
//! - first deposit: `shares = ⌊√(a × b)⌋ − minimum_liquidity`, the minimum
//!   is minted to [`AccountId::SINK`] and can never move again
//! - later deposits: `shares = min(a × T / Ra, b × T / Rb)`
//!
//! # Swap
//!
//! The caller names the outputs it wants and pays by transferring inputs
//! in beforehand. With `B` the pool balance after outputs leave and `in`
//! the inferred input, the swap must satisfy
//!
//! ```text
//! (Ba × 10 000 − in_a × fee) × (Bb × 10 000 − in_b × fee) ≥ Ra × Rb × 10 000²
//! ```
//!
//! so the fee stays in the pool and `Ra × Rb` never decreases.
//!
//! # Locking
//!
//! `deposit`, `withdraw`, `swap`, `skim` and `sync` hold the pool's
//! [`ReentrancyLock`] for their whole duration. A ledger that calls back
//! into one of them gets [`AmmError::Reentrant`]. Plain reads stay
//! available, and the state mutex is never held across a ledger call.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, warn};

use super::lock::ReentrancyLock;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, AssetPair, PoolId, Shares, BPS_DENOMINATOR};
use crate::error::AmmError;
use crate::math::{mul_div, sqrt_product, widen, CheckedArithmetic};
use crate::traits::Ledger;

/// Amounts that flowed through one [`Pool::swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct SwapReceipt {
    amount_a_in: Amount,
    amount_b_in: Amount,
    amount_a_out: Amount,
    amount_b_out: Amount,
}

impl SwapReceipt {
    /// Inferred input of the pool's first asset.
    pub const fn amount_a_in(&self) -> Amount {
        self.amount_a_in
    }

    /// Inferred input of the pool's second asset.
    pub const fn amount_b_in(&self) -> Amount {
        self.amount_b_in
    }

    /// Output of the pool's first asset.
    pub const fn amount_a_out(&self) -> Amount {
        self.amount_a_out
    }

    /// Output of the pool's second asset.
    pub const fn amount_b_out(&self) -> Amount {
        self.amount_b_out
    }
}

#[derive(Debug, Default)]
struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    balances: HashMap<AccountId, Shares>,
    allowances: HashMap<(AccountId, AccountId), Shares>,
}

impl PoolState {
    fn balance(&self, account: &AccountId) -> Shares {
        self.balances.get(account).copied().unwrap_or(Shares::ZERO)
    }

    fn set_balance(&mut self, account: AccountId, amount: Shares) {
        if amount.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, amount);
        }
    }

    fn credit(&mut self, account: AccountId, amount: Shares) -> Result<(), AmmError> {
        let after = self.balance(&account).safe_add(&amount)?;
        self.set_balance(account, after);
        Ok(())
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Shares {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    fn move_shares(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Shares,
    ) -> Result<(), AmmError> {
        if from.is_sink() {
            return Err(AmmError::LockedShares);
        }
        let from_after = self
            .balance(from)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientShares)?;
        if from == to {
            return Ok(());
        }
        let to_after = self.balance(to).safe_add(&amount)?;
        self.set_balance(*from, from_after);
        self.set_balance(*to, to_after);
        Ok(())
    }
}

/// One constant-product pool for a canonical [`AssetPair`].
///
/// A pool is shared behind an `Arc` and mutated through `&self`. It is
/// created empty, initialized once with its assets, and lives forever.
///
/// # Example
///
/// ```rust
/// use hydra_dex::config::PoolConfig;
/// use hydra_dex::domain::{AccountId, Amount, AssetId, AssetPair, Shares};
/// use hydra_dex::ledger::MemoryLedger;
/// use hydra_dex::pools::Pool;
///
/// let pair = AssetPair::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]))
///     .expect("distinct assets");
/// let pool = Pool::new(pair.pool_id(), PoolConfig::default());
/// pool.initialize(pair.first(), pair.second()).expect("first init");
///
/// let lp = AccountId::from_bytes([7; 32]);
/// let mut ledger = MemoryLedger::new();
/// ledger.mint(&pair.first(), &pool.account(), Amount::new(10_000));
/// ledger.mint(&pair.second(), &pool.account(), Amount::new(40_000));
///
/// let minted = pool.deposit(&ledger, &lp).expect("deposit ok");
/// assert_eq!(minted, Shares::new(19_000));
/// assert_eq!(pool.get_reserves(), (Amount::new(10_000), Amount::new(40_000)));
/// ```
#[derive(Debug)]
pub struct Pool {
    id: PoolId,
    config: PoolConfig,
    assets: OnceLock<AssetPair>,
    lock: ReentrancyLock,
    state: Mutex<PoolState>,
}

impl Pool {
    /// Creates an uninitialized, empty pool.
    #[must_use]
    pub fn new(id: PoolId, config: PoolConfig) -> Self {
        Self {
            id,
            config,
            assets: OnceLock::new(),
            lock: ReentrancyLock::new(),
            state: Mutex::new(PoolState::default()),
        }
    }

    /// Sets the pool's two assets. `asset_a` and `asset_b` must already be
    /// in canonical order; the pool does not re-sort them.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AlreadyInitialized`] on any call after the first.
    pub fn initialize(&self, asset_a: AssetId, asset_b: AssetId) -> Result<(), AmmError> {
        self.assets
            .set(AssetPair::from_ordered(asset_a, asset_b))
            .map_err(|_| AmmError::AlreadyInitialized)
    }

    /// The pool's identifier.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// The ledger account the pool's balances live under.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.id.account()
    }

    /// Fee and minimum-liquidity settings.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The pool's assets in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NotInitialized`] before [`Pool::initialize`].
    pub fn assets(&self) -> Result<AssetPair, AmmError> {
        self.assets.get().copied().ok_or(AmmError::NotInitialized)
    }

    /// Current `(reserve_a, reserve_b)`.
    #[must_use]
    pub fn get_reserves(&self) -> (Amount, Amount) {
        let state = self.state();
        (state.reserve_a, state.reserve_b)
    }

    /// Outstanding shares, including the locked minimum.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.state().total_shares
    }

    /// Shares held by `account`.
    #[must_use]
    pub fn share_balance(&self, account: &AccountId) -> Shares {
        self.state().balance(account)
    }

    /// Shares `spender` may still move out of `owner`'s balance.
    #[must_use]
    pub fn share_allowance(&self, owner: &AccountId, spender: &AccountId) -> Shares {
        self.state().allowance(owner, spender)
    }

    /// Moves shares between accounts.
    ///
    /// # Errors
    ///
    /// - [`AmmError::LockedShares`] if `from` is the sink account.
    /// - [`AmmError::InsufficientShares`] if `from` holds fewer than `amount`.
    pub fn transfer_shares(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.state().move_shares(from, to, amount)
    }

    /// Lets `spender` move up to `amount` of `owner`'s shares.
    pub fn approve_shares(&self, owner: &AccountId, spender: &AccountId, amount: Shares) {
        let mut state = self.state();
        if amount.is_zero() {
            state.allowances.remove(&(*owner, *spender));
        } else {
            state.allowances.insert((*owner, *spender), amount);
        }
    }

    /// Moves `from`'s shares on behalf of `spender`, spending allowance.
    ///
    /// # Errors
    ///
    /// - [`AmmError::LockedShares`] if `from` is the sink account.
    /// - [`AmmError::InsufficientShares`] if the allowance or balance is short.
    pub fn transfer_shares_from(
        &self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Shares,
    ) -> Result<(), AmmError> {
        let mut state = self.state();
        if from.is_sink() {
            return Err(AmmError::LockedShares);
        }
        let remaining = state
            .allowance(from, spender)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientShares)?;
        state.move_shares(from, to, amount)?;
        if remaining.is_zero() {
            state.allowances.remove(&(*from, *spender));
        } else {
            state.allowances.insert((*from, *spender), remaining);
        }
        Ok(())
    }

    /// Shares a deposit of exactly `amount_a`/`amount_b` would mint to the
    /// depositor against the current reserves.
    ///
    /// Ledger balance already sitting unsynced in the pool is not counted.
    ///
    /// # Errors
    ///
    /// Same as [`Pool::deposit`].
    pub fn preview_deposit(&self, amount_a: Amount, amount_b: Amount) -> Result<Shares, AmmError> {
        let state = self.state();
        let reserve_a = state.reserve_a.safe_add(&amount_a)?;
        let reserve_b = state.reserve_b.safe_add(&amount_b)?;
        ensure_reserve(reserve_a)?;
        ensure_reserve(reserve_b)?;
        let (minted, _) = self.shares_for(&state, amount_a, amount_b)?;
        Ok(minted)
    }

    /// Shares a seed deposit of `amount_a`/`amount_b` would mint in a pool
    /// that does not exist yet and would be created with `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if an amount exceeds
    ///   [`MAX_RESERVE`](crate::domain::MAX_RESERVE).
    /// - [`AmmError::InsufficientLiquidityMinted`] if `⌊√(a·b)⌋` does not
    ///   exceed the minimum liquidity.
    pub fn preview_first_deposit(
        config: &PoolConfig,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Shares, AmmError> {
        ensure_reserve(amount_a)?;
        ensure_reserve(amount_b)?;
        let (minted, _) = first_mint(config, amount_a, amount_b)?;
        Ok(minted)
    }

    /// Amounts [`Pool::withdraw`] would pay out once `shares` more land in
    /// the pool's own share balance.
    ///
    /// # Errors
    ///
    /// Same as [`Pool::withdraw`].
    pub fn preview_withdraw<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        shares: Shares,
    ) -> Result<(Amount, Amount), AmmError> {
        let pair = self.assets()?;
        let me = self.account();
        let balance_a = ledger.balance_of(&pair.first(), &me);
        let balance_b = ledger.balance_of(&pair.second(), &me);
        let state = self.state();
        let liquidity = state.balance(&me).safe_add(&shares)?;
        redeem(liquidity, state.total_shares, balance_a, balance_b)
    }

    /// Mints shares for whatever the caller transferred in since the last
    /// sync and credits them to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Reentrant`] while another mutating call is running.
    /// - [`AmmError::NotInitialized`] before [`Pool::initialize`].
    /// - [`AmmError::Overflow`] if a reserve would exceed
    ///   [`MAX_RESERVE`](crate::domain::MAX_RESERVE).
    /// - [`AmmError::InsufficientLiquidityMinted`] if no shares would be minted.
    pub fn deposit<L: Ledger + ?Sized>(&self, ledger: &L, to: &AccountId) -> Result<Shares, AmmError> {
        let _guard = self.lock.acquire()?;
        let pair = self.assets()?;
        let me = self.account();
        let balance_a = ledger.balance_of(&pair.first(), &me);
        let balance_b = ledger.balance_of(&pair.second(), &me);
        ensure_reserve(balance_a)?;
        ensure_reserve(balance_b)?;

        let mut state = self.state();
        let amount_a = balance_a.safe_sub(&state.reserve_a)?;
        let amount_b = balance_b.safe_sub(&state.reserve_b)?;
        let (minted, locked) = self.shares_for(&state, amount_a, amount_b)?;
        let total = state.total_shares.safe_add(&minted)?.safe_add(&locked)?;

        // total bounds every balance, so the credits below cannot fail
        state.total_shares = total;
        if !locked.is_zero() {
            state.credit(AccountId::SINK, locked)?;
        }
        state.credit(*to, minted)?;
        state.reserve_a = balance_a;
        state.reserve_b = balance_b;

        debug!(
            pool = %self.id,
            %to,
            %amount_a,
            %amount_b,
            shares = %minted,
            reserve_a = %balance_a,
            reserve_b = %balance_b,
            "deposit"
        );
        Ok(minted)
    }

    /// Burns every share held by the pool itself and pays the pro-rata
    /// assets to `to`.
    ///
    /// Shares are burned first, assets leave next, and reserves are
    /// resynced from the ledger last.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Reentrant`] while another mutating call is running.
    /// - [`AmmError::NotInitialized`] before [`Pool::initialize`].
    /// - [`AmmError::InsufficientLiquidityBurned`] if either payout rounds
    ///   to zero.
    /// - [`AmmError::Overflow`] if a reserve left after the payout would
    ///   exceed [`MAX_RESERVE`](crate::domain::MAX_RESERVE); nothing is
    ///   burned or paid in that case.
    pub fn withdraw<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        to: &AccountId,
    ) -> Result<(Amount, Amount), AmmError> {
        let _guard = self.lock.acquire()?;
        let pair = self.assets()?;
        let me = self.account();
        let balance_a = ledger.balance_of(&pair.first(), &me);
        let balance_b = ledger.balance_of(&pair.second(), &me);

        let (liquidity, amount_a, amount_b) = {
            let mut state = self.state();
            let liquidity = state.balance(&me);
            let (amount_a, amount_b) = redeem(liquidity, state.total_shares, balance_a, balance_b)?;
            // the resync after payout must not be able to fail once shares burn
            ensure_reserve(balance_a.safe_sub(&amount_a)?)?;
            ensure_reserve(balance_b.safe_sub(&amount_b)?)?;
            state.total_shares = state.total_shares.safe_sub(&liquidity)?;
            state.set_balance(me, Shares::ZERO);
            (liquidity, amount_a, amount_b)
        };

        self.pay_out(ledger, &pair.first(), to, amount_a);
        self.pay_out(ledger, &pair.second(), to, amount_b);
        let (reserve_a, reserve_b) = self.sync_from(ledger, &pair)?;

        debug!(
            pool = %self.id,
            %to,
            shares = %liquidity,
            %amount_a,
            %amount_b,
            %reserve_a,
            %reserve_b,
            "withdraw"
        );
        Ok((amount_a, amount_b))
    }

    /// Releases the requested outputs to `to`, charging whatever input the
    /// caller transferred in beforehand.
    ///
    /// The invariant check runs against the balances the pool will hold
    /// once the outputs leave, so a rejected swap moves nothing.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Reentrant`] while another mutating call is running.
    /// - [`AmmError::InsufficientOutputAmount`] if both outputs are zero.
    /// - [`AmmError::InsufficientLiquidity`] if an output reaches its reserve.
    /// - [`AmmError::InsufficientInputAmount`] if nothing was paid in.
    /// - [`AmmError::KInvariantViolated`] if the input does not cover the
    ///   outputs plus the fee.
    /// - [`AmmError::Overflow`] if a reserve would exceed
    ///   [`MAX_RESERVE`](crate::domain::MAX_RESERVE).
    pub fn swap<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        amount_a_out: Amount,
        amount_b_out: Amount,
        to: &AccountId,
    ) -> Result<SwapReceipt, AmmError> {
        let _guard = self.lock.acquire()?;
        if amount_a_out.is_zero() && amount_b_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        let pair = self.assets()?;
        let (reserve_a, reserve_b) = self.get_reserves();
        if amount_a_out >= reserve_a || amount_b_out >= reserve_b {
            return Err(AmmError::InsufficientLiquidity);
        }

        let me = self.account();
        let after_a = ledger
            .balance_of(&pair.first(), &me)
            .checked_sub(&amount_a_out)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let after_b = ledger
            .balance_of(&pair.second(), &me)
            .checked_sub(&amount_b_out)
            .ok_or(AmmError::InsufficientLiquidity)?;
        ensure_reserve(after_a)?;
        ensure_reserve(after_b)?;

        let amount_a_in = after_a.saturating_sub(&reserve_a.saturating_sub(&amount_a_out));
        let amount_b_in = after_b.saturating_sub(&reserve_b.saturating_sub(&amount_b_out));
        if amount_a_in.is_zero() && amount_b_in.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        self.check_invariant((reserve_a, reserve_b), (after_a, after_b), (amount_a_in, amount_b_in))?;

        if !amount_a_out.is_zero() {
            self.pay_out(ledger, &pair.first(), to, amount_a_out);
        }
        if !amount_b_out.is_zero() {
            self.pay_out(ledger, &pair.second(), to, amount_b_out);
        }
        let (new_a, new_b) = self.sync_from(ledger, &pair)?;

        debug!(
            pool = %self.id,
            %to,
            %amount_a_in,
            %amount_b_in,
            %amount_a_out,
            %amount_b_out,
            reserve_a = %new_a,
            reserve_b = %new_b,
            "swap"
        );
        Ok(SwapReceipt {
            amount_a_in,
            amount_b_in,
            amount_a_out,
            amount_b_out,
        })
    }

    /// Sends ledger balance in excess of the reserves to `to`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Reentrant`] or [`AmmError::NotInitialized`].
    pub fn skim<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        to: &AccountId,
    ) -> Result<(Amount, Amount), AmmError> {
        let _guard = self.lock.acquire()?;
        let pair = self.assets()?;
        let me = self.account();
        let (reserve_a, reserve_b) = self.get_reserves();
        let excess_a = ledger
            .balance_of(&pair.first(), &me)
            .saturating_sub(&reserve_a);
        let excess_b = ledger
            .balance_of(&pair.second(), &me)
            .saturating_sub(&reserve_b);
        if !excess_a.is_zero() {
            self.pay_out(ledger, &pair.first(), to, excess_a);
        }
        if !excess_b.is_zero() {
            self.pay_out(ledger, &pair.second(), to, excess_b);
        }
        debug!(pool = %self.id, %to, %excess_a, %excess_b, "skim");
        Ok((excess_a, excess_b))
    }

    /// Forces the reserves to the pool's current ledger balances.
    ///
    /// # Errors
    ///
    /// [`AmmError::Reentrant`], [`AmmError::NotInitialized`], or
    /// [`AmmError::Overflow`] if a balance exceeds
    /// [`MAX_RESERVE`](crate::domain::MAX_RESERVE).
    pub fn sync<L: Ledger + ?Sized>(&self, ledger: &L) -> Result<(Amount, Amount), AmmError> {
        let _guard = self.lock.acquire()?;
        let pair = self.assets()?;
        self.sync_from(ledger, &pair)
    }

    // -- internals ----------------------------------------------------------

    fn state(&self) -> MutexGuard<'_, PoolState> {
        // every write is a commit of precomputed values, so a panicking
        // holder cannot leave the state half-updated
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `(to depositor, to sink)` for a deposit of `amount_a`/`amount_b`.
    fn shares_for(
        &self,
        state: &PoolState,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(Shares, Shares), AmmError> {
        if state.total_shares.is_zero() {
            return first_mint(&self.config, amount_a, amount_b);
        }

        let total = state.total_shares.get();
        let by_a = mul_div(
            amount_a.get(),
            total,
            state.reserve_a.get(),
            "deposit shares overflow",
        )?;
        let by_b = mul_div(
            amount_b.get(),
            total,
            state.reserve_b.get(),
            "deposit shares overflow",
        )?;
        let minted = by_a.min(by_b);
        if minted == 0 {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        Ok((Shares::new(minted), Shares::ZERO))
    }

    fn check_invariant(
        &self,
        (reserve_a, reserve_b): (Amount, Amount),
        (balance_a, balance_b): (Amount, Amount),
        (in_a, in_b): (Amount, Amount),
    ) -> Result<(), AmmError> {
        // balances ≤ 2^112 and scale < 2^14, so every product fits in 256
        // bits; only a fee at or above the scale can make a term negative
        let scale = widen(BPS_DENOMINATOR);
        let fee = widen(self.config.fee_tier().bps());
        let adjust = |balance: Amount, input: Amount| {
            (widen(balance.get()) * scale)
                .checked_sub(widen(input.get()) * fee)
                .ok_or(AmmError::Underflow("fee-adjusted balance"))
        };
        let k_after = adjust(balance_a, in_a)? * adjust(balance_b, in_b)?;
        let k_before = widen(reserve_a.get()) * widen(reserve_b.get()) * scale * scale;
        if k_after < k_before {
            return Err(AmmError::KInvariantViolated);
        }
        Ok(())
    }

    fn pay_out<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        asset: &AssetId,
        to: &AccountId,
        amount: Amount,
    ) {
        if !ledger.transfer(asset, &self.account(), to, amount) {
            warn!(pool = %self.id, %asset, %to, %amount, "ledger refused payout");
        }
    }

    fn sync_from<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        pair: &AssetPair,
    ) -> Result<(Amount, Amount), AmmError> {
        let me = self.account();
        let balance_a = ledger.balance_of(&pair.first(), &me);
        let balance_b = ledger.balance_of(&pair.second(), &me);
        ensure_reserve(balance_a)?;
        ensure_reserve(balance_b)?;
        let mut state = self.state();
        state.reserve_a = balance_a;
        state.reserve_b = balance_b;
        Ok((balance_a, balance_b))
    }
}

/// `(to depositor, to sink)` for the deposit that seeds an empty pool.
fn first_mint(
    config: &PoolConfig,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<(Shares, Shares), AmmError> {
    let minimum = config.minimum_liquidity();
    let root = sqrt_product(amount_a.get(), amount_b.get())?;
    if root <= minimum.get() {
        return Err(AmmError::InsufficientLiquidityMinted);
    }
    Ok((Shares::new(root - minimum.get()), minimum))
}

fn ensure_reserve(amount: Amount) -> Result<(), AmmError> {
    if amount.fits_reserve() {
        Ok(())
    } else {
        Err(AmmError::Overflow("reserve exceeds 112 bits"))
    }
}

/// Pro-rata payout for burning `liquidity` of `total` shares.
fn redeem(
    liquidity: Shares,
    total: Shares,
    balance_a: Amount,
    balance_b: Amount,
) -> Result<(Amount, Amount), AmmError> {
    if total.is_zero() {
        return Err(AmmError::InsufficientLiquidityBurned);
    }
    let amount_a = mul_div(
        liquidity.get(),
        balance_a.get(),
        total.get(),
        "withdraw amount overflow",
    )?;
    let amount_b = mul_div(
        liquidity.get(),
        balance_b.get(),
        total.get(),
        "withdraw amount overflow",
    )?;
    if amount_a == 0 || amount_b == 0 {
        return Err(AmmError::InsufficientLiquidityBurned);
    }
    Ok((Amount::new(amount_a), Amount::new(amount_b)))
}

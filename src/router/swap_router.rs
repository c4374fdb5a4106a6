//! The router: deadline and slippage policy over the registry's pools.

use std::sync::Arc;

use tracing::{debug, warn};

use super::quote::{quote, quote_input, quote_output};
use super::request::{AddLiquidity, ExactInput, ExactOutput, RemoveLiquidity};
use crate::domain::{AccountId, Amount, AssetId, AssetPair, Deadline, Shares};
use crate::error::AmmError;
use crate::factory::PoolRegistry;
use crate::pools::Pool;
use crate::traits::{Clock, Ledger, SystemClock};

/// Stateless front end to a [`PoolRegistry`].
///
/// The router moves caller funds with [`Ledger::transfer_from`] using its
/// own [`account`](Router::account) as spender, so callers approve the
/// router on each asset beforehand, and approve it on a pool's shares
/// before [`remove_liquidity`](Router::remove_liquidity).
///
/// Every check that can be made against current reserves is made before
/// any funds move. Multi-hop swaps are not atomic: each hop commits on its
/// own, and a failing hop leaves the earlier ones in place.
#[derive(Debug)]
pub struct Router<C: Clock = SystemClock> {
    registry: Arc<PoolRegistry>,
    account: AccountId,
    clock: C,
}

impl Router<SystemClock> {
    /// Router checking deadlines against wall-clock time.
    #[must_use]
    pub fn with_system_clock(registry: Arc<PoolRegistry>, account: AccountId) -> Self {
        Self::new(registry, account, SystemClock)
    }
}

impl<C: Clock> Router<C> {
    /// Creates a router acting as `account` on the ledger.
    #[must_use]
    pub fn new(registry: Arc<PoolRegistry>, account: AccountId, clock: C) -> Self {
        Self {
            registry,
            account,
            clock,
        }
    }

    /// The registry pools are resolved through.
    #[must_use]
    pub fn registry(&self) -> &Arc<PoolRegistry> {
        &self.registry
    }

    /// The spender identity the router uses on the ledger.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Reserves of the `x`/`y` pool, ordered as `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PairNotFound`] if the pair has no pool.
    pub fn get_reserves(&self, x: AssetId, y: AssetId) -> Result<(Amount, Amount), AmmError> {
        let pool = self.registry.pool(x, y).ok_or(AmmError::PairNotFound)?;
        oriented_reserves(&pool, &x)
    }

    /// Amounts along `path` when selling `amount_in` of `path[0]`.
    ///
    /// The result has one entry per path element, starting with
    /// `amount_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if `path` has fewer than two assets.
    /// - [`AmmError::PairNotFound`] if a hop has no pool.
    /// - Any error from [`quote_output`].
    pub fn quote_path(&self, amount_in: Amount, path: &[AssetId]) -> Result<Vec<Amount>, AmmError> {
        let pools = self.route(path)?;
        let mut amounts = Vec::with_capacity(path.len());
        amounts.push(amount_in);
        let mut current = amount_in;
        for (pool, hop) in pools.iter().zip(path.windows(2)) {
            let (reserve_in, reserve_out) = oriented_reserves(pool, &hop[0])?;
            current = quote_output(current, reserve_in, reserve_out, pool.config().fee_tier())?;
            amounts.push(current);
        }
        Ok(amounts)
    }

    /// Amounts along `path` needed to buy `amount_out` of the last asset.
    ///
    /// # Errors
    ///
    /// Same as [`Router::quote_path`], with [`quote_input`] in place of
    /// [`quote_output`].
    pub fn quote_path_input(
        &self,
        amount_out: Amount,
        path: &[AssetId],
    ) -> Result<Vec<Amount>, AmmError> {
        let pools = self.route(path)?;
        let mut amounts = vec![Amount::ZERO; path.len()];
        let mut current = amount_out;
        amounts[path.len() - 1] = current;
        for (i, pool) in pools.iter().enumerate().rev() {
            let (reserve_in, reserve_out) = oriented_reserves(pool, &path[i])?;
            current = quote_input(current, reserve_in, reserve_out, pool.config().fee_tier())?;
            amounts[i] = current;
        }
        Ok(amounts)
    }

    /// Amounts a deposit into `x`/`y` would actually use.
    ///
    /// An absent or empty pool takes the desired amounts as given. Otherwise
    /// one side is used in full and the other is scaled to the reserve
    /// ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBAmount`] if scaled `b` is below `min_b`.
    /// - [`AmmError::InsufficientAAmount`] if scaled `a` is below `min_a`.
    pub fn compute_deposit_amounts(
        &self,
        x: AssetId,
        y: AssetId,
        desired: (Amount, Amount),
        min: (Amount, Amount),
    ) -> Result<(Amount, Amount), AmmError> {
        let Some(pool) = self.registry.pool(x, y) else {
            return Ok(desired);
        };
        let (reserve_a, reserve_b) = oriented_reserves(&pool, &x)?;
        if reserve_a.is_zero() && reserve_b.is_zero() {
            return Ok(desired);
        }

        let optimal_b = quote(desired.0, reserve_a, reserve_b)?;
        if optimal_b <= desired.1 {
            if optimal_b < min.1 {
                return Err(AmmError::InsufficientBAmount);
            }
            return Ok((desired.0, optimal_b));
        }
        let optimal_a = quote(desired.1, reserve_b, reserve_a)?;
        if optimal_a < min.0 {
            return Err(AmmError::InsufficientAAmount);
        }
        Ok((optimal_a, desired.1))
    }

    /// Moves a ratio-matched deposit from `caller` into the pool and mints
    /// shares to `request.to`. Returns `(amount_a, amount_b, shares)` in
    /// the request's asset order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - Anything from [`Router::compute_deposit_amounts`],
    ///   [`Pool::preview_first_deposit`], [`Pool::preview_deposit`] or
    ///   [`Pool::deposit`]. A new pair whose seed deposit fails is not
    ///   registered.
    pub fn add_liquidity<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        request: &AddLiquidity,
    ) -> Result<(Amount, Amount, Shares), AmmError> {
        self.ensure_live(request.deadline)?;
        let (amount_a, amount_b) = self.compute_deposit_amounts(
            request.asset_a,
            request.asset_b,
            (request.amount_a_desired, request.amount_b_desired),
            (request.amount_a_min, request.amount_b_min),
        )?;
        if self.registry.pool(request.asset_a, request.asset_b).is_none() {
            // a new pair is registered only once its seed deposit would mint
            AssetPair::new(request.asset_a, request.asset_b)?;
            Pool::preview_first_deposit(self.registry.config(), amount_a, amount_b)?;
        }
        let pool = self
            .registry
            .get_or_create(request.asset_a, request.asset_b)?;

        let (first, second) = if pool.assets()?.first() == request.asset_a {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        pool.preview_deposit(first, second)?;

        let target = pool.account();
        self.pull(ledger, &request.asset_a, caller, &target, amount_a);
        self.pull(ledger, &request.asset_b, caller, &target, amount_b);
        let shares = pool.deposit(&*ledger, &request.to)?;

        debug!(pool = %pool.id(), %caller, %amount_a, %amount_b, %shares, "add_liquidity");
        Ok((amount_a, amount_b, shares))
    }

    /// Redeems `request.shares` from `caller` and sends both assets to
    /// `request.to`. Returns the amounts in the request's asset order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::PairNotFound`] if the pair has no pool.
    /// - [`AmmError::InsufficientAAmount`] / [`AmmError::InsufficientBAmount`]
    ///   if a payout is below its minimum; nothing moves in that case.
    /// - Anything from [`Pool::transfer_shares_from`] or [`Pool::withdraw`].
    pub fn remove_liquidity<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        request: &RemoveLiquidity,
    ) -> Result<(Amount, Amount), AmmError> {
        self.ensure_live(request.deadline)?;
        let pool = self
            .registry
            .pool(request.asset_a, request.asset_b)
            .ok_or(AmmError::PairNotFound)?;
        let in_order = pool.assets()?.first() == request.asset_a;
        let orient = |(p, q): (Amount, Amount)| if in_order { (p, q) } else { (q, p) };

        let (amount_a, amount_b) = orient(pool.preview_withdraw(&*ledger, request.shares)?);
        if amount_a < request.amount_a_min {
            return Err(AmmError::InsufficientAAmount);
        }
        if amount_b < request.amount_b_min {
            return Err(AmmError::InsufficientBAmount);
        }

        pool.transfer_shares_from(&self.account, caller, &pool.account(), request.shares)?;
        let (amount_a, amount_b) = orient(pool.withdraw(ledger, &request.to)?);

        debug!(
            pool = %pool.id(),
            %caller,
            shares = %request.shares,
            %amount_a,
            %amount_b,
            "remove_liquidity"
        );
        Ok((amount_a, amount_b))
    }

    /// Sells exactly `request.amount_in` along `request.path`. Returns the
    /// amount at every step of the path.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::InsufficientOutputAmount`] if the final amount is
    ///   below `amount_out_min`; nothing moves in that case.
    /// - Anything from [`Router::quote_path`] or a hop's [`Pool::swap`].
    pub fn swap_exact_input<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        request: &ExactInput,
    ) -> Result<Vec<Amount>, AmmError> {
        self.ensure_live(request.deadline)?;
        let amounts = self.quote_path(request.amount_in, &request.path)?;
        let received = amounts.last().copied().unwrap_or(Amount::ZERO);
        if received < request.amount_out_min {
            return Err(AmmError::InsufficientOutputAmount);
        }
        self.execute(ledger, caller, &request.path, &amounts, &request.to)?;
        Ok(amounts)
    }

    /// Buys exactly `request.amount_out` along `request.path`. Returns the
    /// amount at every step of the path.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::InsufficientInputAmount`] if the required input exceeds
    ///   `amount_in_max`; nothing moves in that case.
    /// - Anything from [`Router::quote_path_input`] or a hop's [`Pool::swap`].
    pub fn swap_exact_output<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        request: &ExactOutput,
    ) -> Result<Vec<Amount>, AmmError> {
        self.ensure_live(request.deadline)?;
        let amounts = self.quote_path_input(request.amount_out, &request.path)?;
        let required = amounts.first().copied().unwrap_or(Amount::ZERO);
        if required > request.amount_in_max {
            return Err(AmmError::InsufficientInputAmount);
        }
        self.execute(ledger, caller, &request.path, &amounts, &request.to)?;
        Ok(amounts)
    }

    // -- internals ----------------------------------------------------------

    fn ensure_live(&self, deadline: Deadline) -> Result<(), AmmError> {
        if deadline.is_expired(self.clock.now()) {
            return Err(AmmError::Expired);
        }
        Ok(())
    }

    fn route(&self, path: &[AssetId]) -> Result<Vec<Arc<Pool>>, AmmError> {
        if path.len() < 2 {
            return Err(AmmError::InvalidPath);
        }
        path.windows(2)
            .map(|hop| self.registry.pool(hop[0], hop[1]).ok_or(AmmError::PairNotFound))
            .collect()
    }

    /// Pays `amounts[0]` into the first pool, then swaps hop by hop, each
    /// hop's output going straight to the next pool.
    fn execute<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        caller: &AccountId,
        path: &[AssetId],
        amounts: &[Amount],
        to: &AccountId,
    ) -> Result<(), AmmError> {
        let pools = self.route(path)?;
        let Some(first) = pools.first() else {
            return Err(AmmError::InvalidPath);
        };
        self.pull(ledger, &path[0], caller, &first.account(), amounts[0]);

        for (i, pool) in pools.iter().enumerate() {
            let out = amounts[i + 1];
            let (out_a, out_b) = if pool.assets()?.first() == path[i + 1] {
                (out, Amount::ZERO)
            } else {
                (Amount::ZERO, out)
            };
            let recipient = pools.get(i + 1).map_or(*to, |next| next.account());
            pool.swap(ledger, out_a, out_b, &recipient)?;
            debug!(
                hop = i,
                pool = %pool.id(),
                asset_in = %path[i],
                asset_out = %path[i + 1],
                amount_in = %amounts[i],
                amount_out = %out,
                "router hop"
            );
        }
        Ok(())
    }

    fn pull<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) {
        if !ledger.transfer_from(asset, &self.account, from, to, amount) {
            warn!(%asset, %from, %to, %amount, "ledger refused transfer_from");
        }
    }
}

/// `(reserve of x, reserve of the other asset)` for `pool`.
fn oriented_reserves(pool: &Pool, x: &AssetId) -> Result<(Amount, Amount), AmmError> {
    let pair = pool.assets()?;
    if !pair.contains(x) {
        return Err(AmmError::PairNotFound);
    }
    let (reserve_a, reserve_b) = pool.get_reserves();
    if pair.first() == *x {
        Ok((reserve_a, reserve_b))
    } else {
        Ok((reserve_b, reserve_a))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use crate::traits::FixedClock;

    // -- helpers --------------------------------------------------------------

    const NOW: u64 = 1_700_000_000;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([0xa1; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([0xb0; 32])
    }

    fn router_account() -> AccountId {
        AccountId::from_bytes([0xee; 32])
    }

    struct Fixture {
        router: Router<Arc<FixedClock>>,
        clock: Arc<FixedClock>,
        ledger: MemoryLedger,
    }

    fn fixture() -> Fixture {
        let registry = Arc::new(PoolRegistry::default());
        let clock = Arc::new(FixedClock::new(NOW));
        let router = Router::new(registry, router_account(), Arc::clone(&clock));
        let mut ledger = MemoryLedger::new();
        for b in 1..=3 {
            assert!(ledger.mint(&asset(b), &alice(), Amount::new(10_000_000)));
            assert!(ledger.approve(&asset(b), &alice(), &router_account(), Amount::MAX));
        }
        Fixture {
            router,
            clock,
            ledger,
        }
    }

    fn add(x: u8, y: u8, a: u128, b: u128) -> AddLiquidity {
        AddLiquidity {
            asset_a: asset(x),
            asset_b: asset(y),
            amount_a_desired: Amount::new(a),
            amount_b_desired: Amount::new(b),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to: alice(),
            deadline: Deadline::at(NOW + 60),
        }
    }

    fn seed(f: &mut Fixture, x: u8, y: u8, a: u128, b: u128) -> Shares {
        let Ok((_, _, shares)) = f.router.add_liquidity(&mut f.ledger, &alice(), &add(x, y, a, b))
        else {
            panic!("expected seed deposit to succeed");
        };
        shares
    }

    fn sell(path: &[u8], amount_in: u128, min_out: u128) -> ExactInput {
        ExactInput {
            amount_in: Amount::new(amount_in),
            amount_out_min: Amount::new(min_out),
            path: path.iter().map(|b| asset(*b)).collect(),
            to: bob(),
            deadline: Deadline::at(NOW),
        }
    }

    // -- add_liquidity --------------------------------------------------------

    #[test]
    fn first_add_creates_pool_and_mints() {
        let mut f = fixture();
        assert_eq!(seed(&mut f, 1, 2, 100_000, 100_000), Shares::new(99_000));
        assert_eq!(f.router.registry().pool_count(), 1);
        assert_eq!(
            f.router.get_reserves(asset(2), asset(1)),
            Ok((Amount::new(100_000), Amount::new(100_000)))
        );
        assert_eq!(
            f.ledger.balance_of(&asset(1), &alice()),
            Amount::new(9_900_000)
        );
    }

    #[test]
    fn tiny_first_add_moves_nothing() {
        let mut f = fixture();
        assert_eq!(
            f.router
                .add_liquidity(&mut f.ledger, &alice(), &add(1, 2, 100, 100)),
            Err(AmmError::InsufficientLiquidityMinted)
        );
        assert_eq!(
            f.ledger.balance_of(&asset(1), &alice()),
            Amount::new(10_000_000)
        );
        assert_eq!(f.router.registry().pool_count(), 0);
        assert!(f.router.registry().pool(asset(1), asset(2)).is_none());

        // the pair is still free for a deposit that clears the minimum
        assert_eq!(seed(&mut f, 1, 2, 100_000, 100_000), Shares::new(99_000));
        assert_eq!(f.router.registry().pool_count(), 1);
    }

    #[test]
    fn later_add_matches_reserve_ratio() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 10_000, 40_000);
        // caller order (2, 1): 8_000 of asset 2 needs 2_000 of asset 1
        let Ok((a, b, shares)) =
            f.router
                .add_liquidity(&mut f.ledger, &alice(), &add(2, 1, 8_000, 5_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!((a, b), (Amount::new(8_000), Amount::new(2_000)));
        assert_eq!(shares, Shares::new(4_000));
    }

    #[test]
    fn deposit_amounts_respect_minimums() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 100_000);
        let amt = Amount::new;
        let deposit = |desired: (u128, u128), min: (u128, u128)| {
            f.router.compute_deposit_amounts(
                asset(1),
                asset(2),
                (amt(desired.0), amt(desired.1)),
                (amt(min.0), amt(min.1)),
            )
        };
        assert_eq!(deposit((1_000, 2_000), (0, 0)), Ok((amt(1_000), amt(1_000))));
        assert_eq!(
            deposit((1_000, 2_000), (0, 1_001)),
            Err(AmmError::InsufficientBAmount)
        );
        assert_eq!(deposit((2_000, 1_000), (0, 0)), Ok((amt(1_000), amt(1_000))));
        assert_eq!(
            deposit((2_000, 1_000), (1_001, 0)),
            Err(AmmError::InsufficientAAmount)
        );
    }

    #[test]
    fn deposit_amounts_for_new_pair_are_desired() {
        let f = fixture();
        let want = (Amount::new(5), Amount::new(7));
        assert_eq!(
            f.router
                .compute_deposit_amounts(asset(1), asset(3), want, (Amount::ZERO, Amount::ZERO)),
            Ok(want)
        );
    }

    // -- remove_liquidity -----------------------------------------------------

    fn remove(x: u8, y: u8, shares: u128, min_a: u128, min_b: u128) -> RemoveLiquidity {
        RemoveLiquidity {
            asset_a: asset(x),
            asset_b: asset(y),
            shares: Shares::new(shares),
            amount_a_min: Amount::new(min_a),
            amount_b_min: Amount::new(min_b),
            to: bob(),
            deadline: Deadline::at(NOW),
        }
    }

    fn approve_shares(f: &Fixture, amount: u128) {
        let Some(pool) = f.router.registry().pool(asset(1), asset(2)) else {
            panic!("expected pool");
        };
        pool.approve_shares(&alice(), &router_account(), Shares::new(amount));
    }

    #[test]
    fn remove_returns_amounts_in_caller_order() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 400_000);
        approve_shares(&f, 20_000);
        assert_eq!(
            f.router
                .remove_liquidity(&mut f.ledger, &alice(), &remove(2, 1, 20_000, 0, 0)),
            Ok((Amount::new(40_000), Amount::new(10_000)))
        );
        assert_eq!(f.ledger.balance_of(&asset(2), &bob()), Amount::new(40_000));
    }

    #[test]
    fn remove_below_minimum_moves_nothing() {
        let mut f = fixture();
        let shares = seed(&mut f, 1, 2, 100_000, 400_000);
        approve_shares(&f, 20_000);
        assert_eq!(
            f.router
                .remove_liquidity(&mut f.ledger, &alice(), &remove(1, 2, 20_000, 10_001, 0)),
            Err(AmmError::InsufficientAAmount)
        );
        let Some(pool) = f.router.registry().pool(asset(1), asset(2)) else {
            panic!("expected pool");
        };
        assert_eq!(pool.share_balance(&alice()), shares);
        assert_eq!(pool.share_allowance(&alice(), &router_account()), Shares::new(20_000));
    }

    #[test]
    fn remove_needs_share_allowance() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 400_000);
        assert_eq!(
            f.router
                .remove_liquidity(&mut f.ledger, &alice(), &remove(1, 2, 20_000, 0, 0)),
            Err(AmmError::InsufficientShares)
        );
    }

    #[test]
    fn remove_unknown_pair() {
        let mut f = fixture();
        assert_eq!(
            f.router
                .remove_liquidity(&mut f.ledger, &alice(), &remove(1, 2, 1, 0, 0)),
            Err(AmmError::PairNotFound)
        );
    }

    // -- swaps ----------------------------------------------------------------

    #[test]
    fn quote_path_single_hop() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 100_000);
        assert_eq!(
            f.router.quote_path(Amount::new(1_000), &[asset(1), asset(2)]),
            Ok(vec![Amount::new(1_000), Amount::new(987)])
        );
    }

    #[test]
    fn quote_path_validates_path() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 100_000);
        assert_eq!(
            f.router.quote_path(Amount::new(1), &[asset(1)]),
            Err(AmmError::InvalidPath)
        );
        assert_eq!(
            f.router.quote_path(Amount::new(1), &[asset(1), asset(3)]),
            Err(AmmError::PairNotFound)
        );
    }

    #[test]
    fn exact_input_two_hops_delivers_quote() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 100_000);
        seed(&mut f, 2, 3, 100_000, 100_000);
        let Ok(amounts) = f
            .router
            .swap_exact_input(&mut f.ledger, &alice(), &sell(&[1, 2, 3], 1_000, 974))
        else {
            panic!("expected Ok");
        };
        assert_eq!(
            amounts,
            vec![Amount::new(1_000), Amount::new(987), Amount::new(974)]
        );
        assert_eq!(f.ledger.balance_of(&asset(3), &bob()), Amount::new(974));
        // the intermediate asset never touched the router or the caller
        assert_eq!(f.ledger.balance_of(&asset(2), &router_account()), Amount::ZERO);
        assert_eq!(
            f.router.get_reserves(asset(2), asset(3)),
            Ok((Amount::new(100_987), Amount::new(99_026)))
        );
    }

    #[test]
    fn exact_input_slippage_moves_nothing() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 100_000);
        let before = f.ledger.balance_of(&asset(1), &alice());
        assert_eq!(
            f.router
                .swap_exact_input(&mut f.ledger, &alice(), &sell(&[1, 2], 1_000, 988)),
            Err(AmmError::InsufficientOutputAmount)
        );
        assert_eq!(f.ledger.balance_of(&asset(1), &alice()), before);
        assert_eq!(
            f.router.get_reserves(asset(1), asset(2)),
            Ok((Amount::new(100_000), Amount::new(100_000)))
        );
    }

    #[test]
    fn exact_output_buys_requested_amount() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 100_000);
        let request = ExactOutput {
            amount_out: Amount::new(987),
            amount_in_max: Amount::new(1_000),
            path: vec![asset(1), asset(2)],
            to: bob(),
            deadline: Deadline::NEVER,
        };
        assert_eq!(
            f.router
                .swap_exact_output(&mut f.ledger, &alice(), &request),
            Ok(vec![Amount::new(1_000), Amount::new(987)])
        );
        assert_eq!(f.ledger.balance_of(&asset(2), &bob()), Amount::new(987));

        let tight = ExactOutput {
            amount_in_max: Amount::new(999),
            ..request
        };
        assert_eq!(
            f.router.swap_exact_output(&mut f.ledger, &alice(), &tight),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn exact_output_three_assets_chains_backwards() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 200_000);
        seed(&mut f, 2, 3, 300_000, 100_000);
        let path = vec![asset(1), asset(2), asset(3)];
        let expected = vec![Amount::new(8_626), Amount::new(15_837), Amount::new(5_000)];
        assert_eq!(
            f.router.quote_path_input(Amount::new(5_000), &path),
            Ok(expected.clone())
        );

        let request = ExactOutput {
            amount_out: Amount::new(5_000),
            amount_in_max: Amount::new(8_625),
            path,
            to: bob(),
            deadline: Deadline::at(NOW),
        };
        assert_eq!(
            f.router.swap_exact_output(&mut f.ledger, &alice(), &request),
            Err(AmmError::InsufficientInputAmount)
        );

        let request = ExactOutput {
            amount_in_max: Amount::new(8_626),
            ..request
        };
        assert_eq!(
            f.router.swap_exact_output(&mut f.ledger, &alice(), &request),
            Ok(expected)
        );
        assert_eq!(f.ledger.balance_of(&asset(3), &bob()), Amount::new(5_000));
        assert_eq!(
            f.ledger.balance_of(&asset(1), &alice()),
            Amount::new(10_000_000 - 100_000 - 8_626)
        );
        assert_eq!(
            f.router.get_reserves(asset(1), asset(2)),
            Ok((Amount::new(108_626), Amount::new(184_163)))
        );
        assert_eq!(
            f.router.get_reserves(asset(2), asset(3)),
            Ok((Amount::new(315_837), Amount::new(95_000)))
        );
    }

    #[test]
    fn expired_calls_mutate_nothing() {
        let mut f = fixture();
        seed(&mut f, 1, 2, 100_000, 100_000);
        f.clock.advance(1);
        assert_eq!(
            f.router
                .swap_exact_input(&mut f.ledger, &alice(), &sell(&[1, 2], 1_000, 0)),
            Err(AmmError::Expired)
        );
        approve_shares(&f, 1_000);
        assert_eq!(
            f.router
                .remove_liquidity(&mut f.ledger, &alice(), &remove(1, 2, 1_000, 0, 0)),
            Err(AmmError::Expired)
        );
        assert_eq!(
            f.router.get_reserves(asset(1), asset(2)),
            Ok((Amount::new(100_000), Amount::new(100_000)))
        );
    }
}

//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **First deposit**: minted shares are `⌊√(a·b)⌋ − 1000`, the
//!    minimum sits with the sink.
//! 2. **Ratio preservation**: proportional deposits keep `Ra/Rb` within
//!    one unit of rounding.
//! 3. **k monotonicity**: every swap with a non-zero input strictly
//!    grows `Ra · Rb`, and an overdrawn swap is rejected with the
//!    reserves untouched.
//! 4. **Round trip**: deposit then full withdraw never returns more than
//!    was put in.
//! 5. **Registry symmetry**: `get_pool(x, y) == get_pool(y, x)`.

use proptest::prelude::*;

use super::Pool;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, AssetPair, Shares};
use crate::factory::PoolRegistry;
use crate::ledger::MemoryLedger;
use crate::traits::Ledger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn lp() -> AccountId {
    AccountId::from_bytes([0x11; 32])
}

fn new_pool() -> Pool {
    let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
        panic!("valid pair");
    };
    let pool = Pool::new(pair.pool_id(), PoolConfig::default());
    let Ok(()) = pool.initialize(pair.first(), pair.second()) else {
        panic!("first initialize");
    };
    pool
}

fn send_in(ledger: &mut MemoryLedger, pool: &Pool, a: u128, b: u128) {
    assert!(ledger.mint(&asset_a(), &pool.account(), Amount::new(a)));
    assert!(ledger.mint(&asset_b(), &pool.account(), Amount::new(b)));
}

fn seeded(ra: u128, rb: u128) -> (Pool, MemoryLedger) {
    let pool = new_pool();
    let mut ledger = MemoryLedger::new();
    send_in(&mut ledger, &pool, ra, rb);
    let Ok(_) = pool.deposit(&ledger, &lp()) else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

fn k(pool: &Pool) -> u128 {
    let (ra, rb) = pool.get_reserves();
    ra.get() * rb.get()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10^12]; products stay well inside `u128`.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000u128
}

/// Asset ids that are never the null id.
fn asset_strategy() -> impl Strategy<Value = AssetId> {
    any::<[u8; 32]>()
        .prop_filter("null asset", |b| b.iter().any(|x| *x != 0))
        .prop_map(AssetId::from_bytes)
}

// ---------------------------------------------------------------------------
// Property 1: First deposit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_first_deposit_mints_root_minus_minimum(
        a in 1u128..=1_000_000_000_000u128,
        b in 1u128..=1_000_000_000_000u128,
    ) {
        let pool = new_pool();
        let mut ledger = MemoryLedger::new();
        send_in(&mut ledger, &pool, a, b);

        match pool.deposit(&ledger, &lp()) {
            Ok(minted) => {
                let root = minted.get() + 1_000;
                prop_assert!(root * root <= a * b);
                prop_assert!((root + 1) * (root + 1) > a * b);
                prop_assert_eq!(pool.share_balance(&AccountId::SINK), Shares::new(1_000));
            }
            Err(e) => {
                prop_assert_eq!(e, crate::error::AmmError::InsufficientLiquidityMinted);
                prop_assert!(a * b < 1_001 * 1_001);
                prop_assert_eq!(pool.total_shares(), Shares::ZERO);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Ratio preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_proportional_deposits_keep_ratio(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        adds in proptest::collection::vec(1u128..=1_000_000u128, 1..5),
    ) {
        let (pool, mut ledger) = seeded(ra, rb);
        for x in adds {
            let (before_a, before_b) = pool.get_reserves();
            let y = x * before_b.get() / before_a.get();
            send_in(&mut ledger, &pool, x, y);
            if pool.deposit(&ledger, &lp()).is_err() {
                // deposit too small to mint; sync keeps the next step honest
                let Ok(_) = pool.sync(&ledger) else {
                    panic!("sync");
                };
            }
            let (after_a, after_b) = pool.get_reserves();
            // ra'·rb − rb'·ra = x·rb − y·ra ∈ [0, ra)
            let lhs = after_a.get() * before_b.get();
            let rhs = after_b.get() * before_a.get();
            prop_assert!(lhs >= rhs);
            prop_assert!(lhs - rhs < before_a.get());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: k monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_strictly_grows_k(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 1u128..=1_000_000_000u128,
        a_to_b in any::<bool>(),
    ) {
        let (pool, mut ledger) = seeded(ra, rb);
        let (r_in, r_out) = if a_to_b { (ra, rb) } else { (rb, ra) };
        let amount_out = amount_in * 9_970 * r_out / (r_in * 10_000 + amount_in * 9_970);
        if amount_out == 0 { return Ok(()); }

        let k_before = k(&pool);
        let trader = AccountId::from_bytes([0x22; 32]);
        let result = if a_to_b {
            send_in(&mut ledger, &pool, amount_in, 0);
            pool.swap(&mut ledger, Amount::ZERO, Amount::new(amount_out), &trader)
        } else {
            send_in(&mut ledger, &pool, 0, amount_in);
            pool.swap(&mut ledger, Amount::new(amount_out), Amount::ZERO, &trader)
        };
        prop_assert!(result.is_ok(), "quoted swap rejected: {:?}", result);
        prop_assert!(k(&pool) > k_before);
    }

    #[test]
    fn prop_overdrawn_swap_leaves_reserves(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 1u128..=1_000_000_000u128,
    ) {
        let (pool, mut ledger) = seeded(ra, rb);
        let quoted = amount_in * 9_970 * rb / (ra * 10_000 + amount_in * 9_970);
        let greedy = quoted + 1;
        if greedy >= rb { return Ok(()); }

        send_in(&mut ledger, &pool, amount_in, 0);
        let before = pool.get_reserves();
        let result = pool.swap(
            &mut ledger,
            Amount::ZERO,
            Amount::new(greedy),
            &AccountId::from_bytes([0x22; 32]),
        );
        prop_assert_eq!(result.err(), Some(crate::error::AmmError::KInvariantViolated));
        prop_assert_eq!(pool.get_reserves(), before);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_never_gains(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u128..=1_000_000_000u128,
        b in 1u128..=1_000_000_000u128,
    ) {
        let (pool, mut ledger) = seeded(ra, rb);
        let provider = AccountId::from_bytes([0x33; 32]);
        send_in(&mut ledger, &pool, a, b);
        let Ok(minted) = pool.deposit(&ledger, &provider) else {
            return Ok(());
        };
        let Ok(()) = pool.transfer_shares(&provider, &pool.account(), minted) else {
            panic!("share transfer");
        };
        let Ok((out_a, out_b)) = pool.withdraw(&mut ledger, &provider) else {
            return Ok(());
        };
        prop_assert!(out_a.get() <= a);
        prop_assert!(out_b.get() <= b);
        prop_assert_eq!(ledger.balance_of(&asset_a(), &provider), out_a);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Registry symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_get_pool_is_order_independent(
        x in asset_strategy(),
        y in asset_strategy(),
    ) {
        prop_assume!(x != y);
        let registry = PoolRegistry::default();
        prop_assert_eq!(registry.get_pool(x, y), None);
        let Ok(id) = registry.create_pool(y, x) else {
            panic!("create pool");
        };
        prop_assert_eq!(registry.get_pool(x, y), Some(id));
        prop_assert_eq!(registry.get_pool(y, x), Some(id));
    }
}

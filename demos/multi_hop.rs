//! Registry + router walkthrough against the in-memory ledger.
//!
//! Seeds two pools, quotes and executes a two-hop swap, then withdraws
//! the liquidity again.
//!
//! # Run
//!
//! ```bash
//! cargo run --example multi_hop
//! ```

use std::sync::Arc;

use hydra_dex::ledger::MemoryLedger;
use hydra_dex::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Two-hop swap USDC → WETH → WBTC ===\n");

    // ── 1. Assets, accounts and a funded ledger ─────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let wbtc = AssetId::from_bytes([3u8; 32]);
    let lp = AccountId::from_bytes([0x11; 32]);
    let trader = AccountId::from_bytes([0x22; 32]);
    let router_id = AccountId::from_bytes([0xee; 32]);

    let mut ledger = MemoryLedger::new();
    for asset in [usdc, weth, wbtc] {
        for who in [lp, trader] {
            ledger.mint(&asset, &who, Amount::new(10_000_000));
            ledger.approve(&asset, &who, &router_id, Amount::MAX);
        }
    }

    // ── 2. Registry and router ──────────────────────────────────────────
    let registry = Arc::new(PoolRegistry::new(PoolConfig::default())?);
    let router = Router::with_system_clock(Arc::clone(&registry), router_id);
    let fee = registry.config().fee_tier();
    println!("Fee tier: {fee}");

    // ── 3. Seed USDC/WETH and WETH/WBTC ─────────────────────────────────
    for (x, y, a, b) in [(usdc, weth, 2_000_000, 1_000_000), (weth, wbtc, 1_000_000, 50_000)] {
        let (used_a, used_b, shares) = router.add_liquidity(
            &mut ledger,
            &lp,
            &AddLiquidity {
                asset_a: x,
                asset_b: y,
                amount_a_desired: Amount::new(a),
                amount_b_desired: Amount::new(b),
                amount_a_min: Amount::ZERO,
                amount_b_min: Amount::ZERO,
                to: lp,
                deadline: Deadline::NEVER,
            },
        )?;
        let id = PoolId::derive(x, y)?;
        println!("Pool {id}: deposited {used_a} / {used_b}, minted {shares} shares");
    }
    println!("Pools registered: {}", registry.pool_count());

    // ── 4. Quote and execute ────────────────────────────────────────────
    let path = vec![usdc, weth, wbtc];
    let quoted = router.quote_path(Amount::new(10_000), &path)?;
    println!("\nQuote for 10000 USDC: {quoted:?}");

    let amounts = router.swap_exact_input(
        &mut ledger,
        &trader,
        &ExactInput {
            amount_in: Amount::new(10_000),
            amount_out_min: quoted[2],
            path: path.clone(),
            to: trader,
            deadline: Deadline::NEVER,
        },
    )?;
    println!("Executed:            {amounts:?}");
    for (x, y) in [(usdc, weth), (weth, wbtc)] {
        let (rx, ry) = router.get_reserves(x, y)?;
        println!("  reserves {x}/{y}: {rx} / {ry}");
    }

    // ── 5. Withdraw the USDC/WETH position ──────────────────────────────
    let Some(pool) = registry.pool(usdc, weth) else {
        return Err("pool vanished".into());
    };
    let shares = pool.share_balance(&lp);
    pool.approve_shares(&lp, &router_id, shares);
    let (out_usdc, out_weth) = router.remove_liquidity(
        &mut ledger,
        &lp,
        &RemoveLiquidity {
            asset_a: usdc,
            asset_b: weth,
            shares,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to: lp,
            deadline: Deadline::NEVER,
        },
    )?;
    println!("\nWithdrew {shares} shares: {out_usdc} USDC + {out_weth} WETH");
    println!(
        "Locked forever: {} shares, reserves {:?}",
        pool.total_shares(),
        pool.get_reserves()
    );

    Ok(())
}

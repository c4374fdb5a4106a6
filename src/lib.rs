//! # Hydra DEX
//!
//! Constant-product liquidity pools, a deterministic pool registry, and a
//! multi-hop router, all integer-only and driven against an external
//! fungible-asset [`Ledger`](traits::Ledger).
//!
//! - **Pool engine**: reserves, liquidity shares, the fee-adjusted
//!   `x · y = k` check, and a per-pool reentrancy lock.
//! - **Pool registry**: exactly one pool per unordered asset pair, with ids
//!   derived by hashing the canonical pair.
//! - **Router**: deposit ratios, multi-hop quotes, slippage and deadline
//!   policy.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for ids, amounts and config |
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hydra_dex::prelude::*;
//! use hydra_dex::ledger::MemoryLedger;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([0xa1; 32]);
//! let router_id = AccountId::from_bytes([0xee; 32]);
//!
//! // 1. A ledger with funds, and the router approved to spend them
//! let mut ledger = MemoryLedger::new();
//! for asset in [usdc, weth] {
//!     ledger.mint(&asset, &alice, Amount::new(1_000_000));
//!     ledger.approve(&asset, &alice, &router_id, Amount::MAX);
//! }
//!
//! // 2. Registry and router
//! let registry = Arc::new(PoolRegistry::new(PoolConfig::default()).expect("valid config"));
//! let router = Router::new(Arc::clone(&registry), router_id, FixedClock::new(0));
//!
//! // 3. Seed the pool
//! let (_, _, shares) = router
//!     .add_liquidity(&mut ledger, &alice, &AddLiquidity {
//!         asset_a: usdc,
//!         asset_b: weth,
//!         amount_a_desired: Amount::new(100_000),
//!         amount_b_desired: Amount::new(100_000),
//!         amount_a_min: Amount::ZERO,
//!         amount_b_min: Amount::ZERO,
//!         to: alice,
//!         deadline: Deadline::NEVER,
//!     })
//!     .expect("first deposit");
//! assert_eq!(shares, Shares::new(99_000));
//!
//! // 4. Sell 1 000 usdc
//! let amounts = router
//!     .swap_exact_input(&mut ledger, &alice, &ExactInput {
//!         amount_in: Amount::new(1_000),
//!         amount_out_min: Amount::new(980),
//!         path: vec![usdc, weth],
//!         to: alice,
//!         deadline: Deadline::NEVER,
//!     })
//!     .expect("swap");
//! assert_eq!(amounts[1], Amount::new(987));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller    │  approves the router on the ledger
//! └──────┬──────┘
//!        │ AddLiquidity / RemoveLiquidity / ExactInput / ExactOutput
//!        ▼
//! ┌─────────────┐
//! │   Router    │  deadlines, slippage, deposit ratios, path quotes
//! └──────┬──────┘
//!        │ pool(x, y)
//!        ▼
//! ┌─────────────┐
//! │  Registry   │  canonical pair → Arc<Pool>
//! └──────┬──────┘
//!        │ deposit / withdraw / swap
//!        ▼
//! ┌─────────────┐
//! │    Pool     │  reserves, shares, k check, reentrancy lock
//! └──────┬──────┘
//!        │ balance_of / transfer
//!        ▼
//! ┌─────────────┐
//! │   Ledger    │  external balances (MemoryLedger for tests)
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), etc. |
//! | [`traits`] | Seams to the host: [`Ledger`](traits::Ledger), [`Clock`](traits::Clock) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): fee tier and minimum liquidity |
//! | [`pools`]  | The [`Pool`](pools::Pool) engine and its reentrancy lock |
//! | [`factory`] | [`PoolRegistry`](factory::PoolRegistry) |
//! | [`router`] | Quote functions and the [`Router`](router::Router) |
//! | [`ledger`] | [`MemoryLedger`](ledger::MemoryLedger) reference ledger |
//! | [`math`]   | Checked arithmetic and 256-bit helpers |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod traits;

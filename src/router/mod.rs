//! Quotes and multi-hop routing over the registry's pools.
//!
//! [`quote_output`], [`quote_input`] and [`quote`] are pure functions of
//! reserves. The [`Router`] resolves pools through a
//! [`PoolRegistry`](crate::factory::PoolRegistry), enforces deadlines and
//! slippage bounds, and moves caller funds through the
//! [`Ledger`](crate::traits::Ledger).
//!
//! A multi-hop swap sends each hop's output straight into the next hop's
//! pool. Hops commit one at a time: when hop `k + 1` fails, hops `1..=k`
//! stay executed and the intermediate asset stays in the pool it reached.

mod quote;
mod request;
mod swap_router;

pub use quote::{quote, quote_input, quote_output};
pub use request::{AddLiquidity, ExactInput, ExactOutput, RemoveLiquidity};
pub use swap_router::Router;

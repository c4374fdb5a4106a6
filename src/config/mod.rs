//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a
//! [`PoolRegistry`](crate::factory::PoolRegistry) stamps onto every pool it
//! creates: the swap fee and the minimum liquidity burned on first deposit.

mod pool_config;

pub use pool_config::{PoolConfig, MINIMUM_LIQUIDITY};

//! The pool engine.
//!
//! A [`Pool`] owns one pair's reserves and its liquidity-share book, and
//! knows nothing about other pools. It is guarded by a
//! [`ReentrancyLock`] so that a ledger calling back into the pool during
//! a transfer is refused instead of observing half-finished state.

mod lock;
mod pool;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use lock::{LockGuard, ReentrancyLock};
pub use pool::{Pool, SwapReceipt};

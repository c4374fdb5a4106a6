//! Reference [`Ledger`](crate::traits::Ledger) implementations.
//!
//! [`MemoryLedger`] keeps every asset's balances and allowances in hash
//! maps. It is what the test suites and local simulations run against; a
//! production host plugs its own ledger in through the trait.

mod memory;

pub use memory::MemoryLedger;

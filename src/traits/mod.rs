//! Seams to the world outside the engine.
//!
//! - [`Ledger`]: the fungible-asset ledger pools hold balances on.
//! - [`Clock`]: the time source router deadlines are checked against.

mod clock;
mod ledger;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::Ledger;

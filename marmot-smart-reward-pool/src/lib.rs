//! Multi-pool reward ledger
//!
//! Depositors stake whitelisted collateral tokens into pools. MARMOT reward tokens are emitted per
//! block according to a two phase [`EmissionSchedule`] and allocated across pools proportionally
//! to each pool's weighted, oracle priced staked value. Within a pool, rewards are tracked with an
//! O(1) reward-per-share accumulator.
//!
//! Collateral may be forwarded to an external auto-compounding vault. The yield it produces is
//! harvested and used to buy back and burn MARMOT.

pub mod components;
mod domain;
mod interface;

pub use domain::*;
pub use interface::*;

#[cfg(test)]
pub(crate) mod test_support;

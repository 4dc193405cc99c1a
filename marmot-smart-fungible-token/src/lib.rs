//! MARMOT reward token ledger, hosted by the farm contract

pub mod components;
mod domain;
mod interface;

pub use domain::*;
pub use interface::*;

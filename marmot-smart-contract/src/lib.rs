//! Contract level components: ownership and the global pause gate

pub mod components;
mod domain;
mod interface;

pub use domain::*;
pub use interface::*;

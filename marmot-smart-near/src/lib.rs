//! Provides support for building Marmot SMART NEAR smart contracts.

pub use crate::core::*;

pub mod component;
mod core;
pub mod data;
pub mod domain;
mod functions;

pub use functions::*;
pub use near_sdk;

//! Provides support to work with data stored on the NEAR blockchain

mod object;

pub use object::*;

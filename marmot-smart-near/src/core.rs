pub mod asserts;
mod errors;
mod hash;
mod log_events;
mod promise;

pub use errors::*;
pub use hash::*;
pub use log_events::*;
pub use promise::*;

use uint::construct_uint;

/// YOCTO = 10^24
pub const YOCTO: u128 = 1_000_000_000_000_000_000_000_000;

/// TERA = 10^12
pub const TERA: u64 = 1_000_000_000_000;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

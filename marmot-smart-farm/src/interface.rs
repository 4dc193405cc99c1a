mod price_feed;
mod swap_desk;
mod wallet;

pub use price_feed::*;
pub use swap_desk::*;
pub use wallet::*;

mod farm_message;
mod price_feed;

pub use farm_message::*;
pub use price_feed::*;

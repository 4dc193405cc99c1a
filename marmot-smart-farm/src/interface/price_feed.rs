use crate::Feed;
use marmot_smart_near::domain::Decimal;
use marmot_smart_near::near_sdk::json_types::ValidAccountId;
use marmot_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Price feeds consulted to value oracle priced pools.
///
/// The feed ID is the account ID that pools reference as their oracle.
pub trait PriceFeed {
    /// Registers or replaces the feed's reporter and freshness window, in blocks
    ///
    /// ## Panics
    /// if not invoked by the owner
    fn ops_price_feed_register(
        &mut self,
        oracle: ValidAccountId,
        reporter: ValidAccountId,
        max_age: u64,
    );

    /// ## Panics
    /// - `[ERR] [UNAUTHORIZED]` if not invoked by the feed's reporter
    /// - `[ERR] [INVALID]` if the price is zero
    fn ops_price_feed_push(&mut self, oracle: ValidAccountId, price: Decimal);

    fn ops_price_feed(&self, oracle: ValidAccountId) -> Option<Feed>;
}

pub const LOG_EVENT_PRICE_FEED_REGISTERED: LogEvent =
    LogEvent(Level::INFO, "PRICE_FEED_REGISTERED");

pub const LOG_EVENT_PRICE_PUSHED: LogEvent = LogEvent(Level::INFO, "PRICE_PUSHED");

pub const ERR_PRICE_FEED_NOT_REGISTERED: ErrorConst = ErrorConst(
    ErrCode("PRICE_FEED_NOT_REGISTERED"),
    "price feed is not registered",
);

pub const ERR_REPORTER_ACCESS_REQUIRED: ErrorConst = ErrorConst(
    ErrCode("UNAUTHORIZED"),
    "only the feed's reporter can push prices",
);

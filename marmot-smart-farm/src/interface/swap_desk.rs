use marmot_smart_near::domain::Decimal;
use marmot_smart_near::near_sdk::json_types::ValidAccountId;
use marmot_smart_near::{Level, LogEvent};

/// Over the counter desk where swappers quote MARMOT for harvested yield tokens.
///
/// A swapper posts a standing rate per input token, i.e., MARMOT paid per input token unit. Quotes
/// are backed by the swapper's MARMOT balance.
pub trait SwapDesk {
    /// Posts the predecessor's rate for the token - `None` withdraws the quote
    fn ops_swap_desk_post_rate(&mut self, token_in: ValidAccountId, rate: Option<Decimal>);

    fn ops_swap_desk_rate(&self, swapper: ValidAccountId, token_in: ValidAccountId)
        -> Option<Decimal>;
}

pub const LOG_EVENT_SWAP_RATE_POSTED: LogEvent = LogEvent(Level::INFO, "SWAP_RATE_POSTED");

pub const LOG_EVENT_SWAP: LogEvent = LogEvent(Level::INFO, "SWAP");

use crate::{BuybackReceipt, HarvestReport};
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::{json_types::ValidAccountId, AccountId};
use marmot_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Converts yield earned by pool collateral into reward token buybacks
pub trait Buyback {
    /// Harvests every pool that has an external yield reference.
    ///
    /// Failures are logged and reported, but never abort the batch.
    fn ops_buyback_harvest_all(&mut self) -> HarvestReport;

    /// Sells the entire harvested balance of `yield_token` through a whitelisted `swapper` and
    /// burns 100% of the reward tokens received.
    ///
    /// ## Panics
    /// - `ROUTE_UNAVAILABLE` if the swapper is not whitelisted or cannot route the pair
    /// - `INVALID_AMOUNT` if there is no harvested balance for the token
    /// - `SLIPPAGE_EXCEEDED` if the swap would return less than `min_out` - the harvested balance is
    ///   left untouched
    fn ops_buyback_and_burn(
        &mut self,
        yield_token: ValidAccountId,
        swapper: ValidAccountId,
        min_out: TokenAmount,
    ) -> BuybackReceipt;

    /// harvested balance that has not been bought back yet
    fn ops_buyback_yield_balance(&self, yield_token: ValidAccountId) -> TokenAmount;

    /// ## Panics
    /// `UNAUTHORIZED` if the predecessor is not the owner
    fn ops_buyback_add_swapper(&mut self, swapper: ValidAccountId);

    /// ## Panics
    /// `UNAUTHORIZED` if the predecessor is not the owner
    fn ops_buyback_remove_swapper(&mut self, swapper: ValidAccountId);

    fn ops_buyback_swappers(&self) -> Vec<AccountId>;
}

pub const LOG_EVENT_HARVEST: LogEvent = LogEvent(Level::INFO, "HARVEST");

pub const LOG_EVENT_HARVEST_FAILED: LogEvent = LogEvent(Level::WARN, "HARVEST_FAILED");

pub const LOG_EVENT_BUYBACK_BURN: LogEvent = LogEvent(Level::INFO, "BUYBACK_BURN");

pub const LOG_EVENT_SWAPPER_ADDED: LogEvent = LogEvent(Level::INFO, "SWAPPER_ADDED");

pub const LOG_EVENT_SWAPPER_REMOVED: LogEvent = LogEvent(Level::INFO, "SWAPPER_REMOVED");

pub const ERR_SWAPPER_NOT_WHITELISTED: ErrorConst = ErrorConst(
    ErrCode("ROUTE_UNAVAILABLE"),
    "swapper is not whitelisted",
);

pub const ERR_NO_HARVESTED_YIELD: ErrorConst = ErrorConst(
    ErrCode("INVALID_AMOUNT"),
    "there is no harvested yield for the token",
);

pub const ERR_SLIPPAGE_EXCEEDED: ErrorConst = ErrorConst(
    ErrCode("SLIPPAGE_EXCEEDED"),
    "swap output is below the requested minimum",
);

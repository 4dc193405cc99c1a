use crate::{ExternalYieldRef, PoolIndex, Treasury};
use marmot_smart_near::domain::Decimal;
use marmot_smart_near::near_sdk::json_types::ValidAccountId;
use marmot_smart_near::{Level, LogEvent};

/// Owner administration. Each operation settles all pools before the change is applied, so that
/// emission up to the current block is allocated under the previous configuration.
///
/// ## Panics
/// - `UNAUTHORIZED` if the predecessor is not the owner
/// - `UNKNOWN_POOL`
pub trait RewardPoolOwner {
    /// ## Panics
    /// `INVALID_WEIGHT` if weight is zero
    fn ops_pool_set_weight(&mut self, pool: PoolIndex, weight: Decimal);

    /// `None` marks the collateral as pegged
    fn ops_pool_set_oracle(&mut self, pool: PoolIndex, oracle: Option<ValidAccountId>);

    /// Collateral already staked in the pool is migrated from the current reference to the new one.
    ///
    /// ## Panics
    /// `EXTERNAL_PROTOCOL_ERROR` if the migration fails
    fn ops_pool_set_external_yield(
        &mut self,
        pool: PoolIndex,
        external_yield: Option<ExternalYieldRef>,
    );

    /// ## Panics
    /// `INVALID` if the fee exceeds 10000 basis points
    fn ops_pool_set_treasury(&mut self, treasury: Treasury);

    fn ops_pool_treasury(&self) -> Treasury;
}

pub const LOG_EVENT_POOL_UPDATED: LogEvent = LogEvent(Level::INFO, "POOL_UPDATED");

pub const LOG_EVENT_TREASURY_UPDATED: LogEvent = LogEvent(Level::INFO, "TREASURY_UPDATED");

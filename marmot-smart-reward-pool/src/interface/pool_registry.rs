use crate::{EmissionSchedule, Pool, PoolConfig, PoolIndex};
use marmot_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Append-only pool collection
pub trait PoolRegistry {
    /// Registers a new pool and returns its index
    ///
    /// All existing pools are settled first, and the new pool starts with zero shares.
    ///
    /// ## Panics
    /// - `UNAUTHORIZED` if the predecessor is not the owner
    /// - `INVALID_WEIGHT` if weight is zero
    /// - `DUPLICATE_TOKEN` if a pool already exists for the deposit token
    /// - `INVALID` if the token has more than 18 decimals
    fn ops_pool_add(&mut self, config: PoolConfig) -> PoolIndex;

    fn ops_pool_count(&self) -> PoolIndex;

    /// ## Panics
    /// `OUT_OF_RANGE` if `pool >= ops_pool_count()`
    fn ops_pool(&self, pool: PoolIndex) -> Pool;

    fn ops_pool_emission_schedule(&self) -> EmissionSchedule;
}

pub const LOG_EVENT_POOL_ADDED: LogEvent = LogEvent(Level::INFO, "POOL_ADDED");

pub const ERR_INVALID_WEIGHT: ErrorConst =
    ErrorConst(ErrCode("INVALID_WEIGHT"), "weight must be greater than zero");

pub const ERR_DUPLICATE_TOKEN: ErrorConst = ErrorConst(
    ErrCode("DUPLICATE_TOKEN"),
    "a pool is already registered for the deposit token",
);

pub const ERR_OUT_OF_RANGE: ErrorConst =
    ErrorConst(ErrCode("OUT_OF_RANGE"), "pool index is out of range");

use crate::{PoolIndex, UserPosition};
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::json_types::ValidAccountId;
use marmot_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Depositor facing ledger operations.
///
/// Every mutating operation first settles all pools up to the current block height.
/// Rewards are minted when they are paid out, i.e., on deposit, withdraw and claim.
pub trait RewardPool {
    /// Stakes `amount` of the pool's deposit token from the predecessor's custody account.
    ///
    /// Pending rewards are paid out before the position is updated.
    ///
    /// ## Panics
    /// - `PAUSED`
    /// - `INVALID_AMOUNT` if amount is zero
    /// - `UNKNOWN_POOL`
    /// - `INSUFFICIENT_BALANCE` if the depositor's custody balance is insufficient
    /// - `EXTERNAL_PROTOCOL_ERROR` if the collateral cannot be forwarded to the yield vault
    /// - `STALE_OR_UNAVAILABLE` if an oracle needed for settlement fails
    fn ops_pool_deposit(&mut self, pool: PoolIndex, amount: TokenAmount) -> UserPosition;

    /// Unstakes `amount` back into the predecessor's custody account.
    ///
    /// ## Panics
    /// - `PAUSED`
    /// - `INVALID_AMOUNT` if amount is zero
    /// - `UNKNOWN_POOL`
    /// - `INSUFFICIENT_BALANCE` if amount exceeds the staked amount
    /// - `EXTERNAL_PROTOCOL_ERROR` if the collateral cannot be recalled from the yield vault
    fn ops_pool_withdraw(&mut self, pool: PoolIndex, amount: TokenAmount) -> UserPosition;

    /// Pays out pending rewards for a single pool and returns the amount minted
    ///
    /// ## Panics
    /// - `PAUSED`
    /// - `UNKNOWN_POOL`
    fn ops_pool_claim(&mut self, pool: PoolIndex) -> TokenAmount;

    /// Pays out pending rewards across all pools with a single mint
    ///
    /// ## Panics
    /// - `PAUSED`
    fn ops_pool_claim_all(&mut self) -> TokenAmount;

    /// Escape hatch: returns the full staked amount without settling and forfeits pending rewards.
    ///
    /// Allowed while the contract is paused.
    ///
    /// ## Panics
    /// - `UNKNOWN_POOL`
    fn ops_pool_emergency_withdraw(&mut self, pool: PoolIndex) -> TokenAmount;

    /// Rewards that a claim would pay out at the current block height
    fn ops_pool_pending(&self, pool: PoolIndex, account_id: ValidAccountId) -> TokenAmount;

    fn ops_pool_pending_all(&self, account_id: ValidAccountId) -> TokenAmount;

    fn ops_pool_position(&self, pool: PoolIndex, account_id: ValidAccountId)
        -> Option<UserPosition>;
}

pub const LOG_EVENT_SETTLED: LogEvent = LogEvent(Level::INFO, "SETTLED");

pub const LOG_EVENT_TREASURY_MINT: LogEvent = LogEvent(Level::INFO, "TREASURY_MINT");

pub const LOG_EVENT_DEPOSIT: LogEvent = LogEvent(Level::INFO, "DEPOSIT");

pub const LOG_EVENT_WITHDRAW: LogEvent = LogEvent(Level::INFO, "WITHDRAW");

pub const LOG_EVENT_CLAIM: LogEvent = LogEvent(Level::INFO, "CLAIM");

pub const LOG_EVENT_EMERGENCY_WITHDRAW: LogEvent = LogEvent(Level::WARN, "EMERGENCY_WITHDRAW");

/// emergency withdrawal proceeded without settling because a price feed was unavailable
pub const LOG_EVENT_SETTLEMENT_SKIPPED: LogEvent = LogEvent(Level::WARN, "SETTLEMENT_SKIPPED");

pub const ERR_INVALID_AMOUNT: ErrorConst =
    ErrorConst(ErrCode("INVALID_AMOUNT"), "amount must be greater than zero");

pub const ERR_UNKNOWN_POOL: ErrorConst = ErrorConst(ErrCode("UNKNOWN_POOL"), "pool does not exist");

pub const ERR_INSUFFICIENT_BALANCE: ErrorConst = ErrorConst(
    ErrCode("INSUFFICIENT_BALANCE"),
    "amount exceeds the staked balance",
);

pub const ERR_REWARD_POOL_NOT_DEPLOYED: ErrorConst = ErrorConst(
    ErrCode("REWARD_POOL_NOT_DEPLOYED"),
    "reward pool component state is not deployed",
);

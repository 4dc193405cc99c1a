use marmot_smart_near::near_sdk::{json_types::ValidAccountId, AccountId};
use marmot_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Owner administration of the farm, with a two step ownership handoff
pub trait ContractOwnership {
    fn ops_owner(&self) -> AccountId;

    /// Names the prospective owner, e.g., a timelock or DAO contract.
    /// Nothing changes until the prospective owner calls [`ContractOwnership::ops_owner_finalize_transfer`].
    ///
    /// ## Panics
    /// - `[ERR] [UNAUTHORIZED]` unless called by the owner
    /// - `[ERR] [YOCTONEAR_DEPOSIT_REQUIRED]`
    fn ops_owner_transfer(&mut self, new_owner: ValidAccountId);

    /// ## Panics
    /// - `[ERR] [UNAUTHORIZED]` unless called by the owner
    /// - `[ERR] [YOCTONEAR_DEPOSIT_REQUIRED]`
    fn ops_owner_cancel_transfer(&mut self);

    /// Called by the prospective owner to take over
    ///
    /// ## Panics
    /// - `[ERR] [CONTRACT_OWNER_TRANSFER_NOT_INITIATED]`
    /// - `[ERR] [UNAUTHORIZED]` unless called by the prospective owner
    /// - `[ERR] [YOCTONEAR_DEPOSIT_REQUIRED]`
    fn ops_owner_finalize_transfer(&mut self);

    fn ops_owner_prospective(&self) -> Option<AccountId>;
}

pub const LOG_EVENT_CONTRACT_TRANSFER_INITIATED: LogEvent =
    LogEvent(Level::INFO, "CONTRACT_TRANSFER_INITIATED");

pub const LOG_EVENT_CONTRACT_TRANSFER_CANCELLED: LogEvent =
    LogEvent(Level::INFO, "CONTRACT_TRANSFER_CANCELLED");

pub const LOG_EVENT_CONTRACT_TRANSFER_FINALIZED: LogEvent =
    LogEvent(Level::INFO, "CONTRACT_TRANSFER_FINALIZED");

pub const ERR_CODE_UNAUTHORIZED: ErrCode = ErrCode("UNAUTHORIZED");

pub const ERR_OWNER_ACCESS_REQUIRED: ErrorConst =
    ErrorConst(ERR_CODE_UNAUTHORIZED, "action requires owner access");

pub const ERR_PROSPECTIVE_OWNER_ACCESS_REQUIRED: ErrorConst = ErrorConst(
    ERR_CODE_UNAUTHORIZED,
    "action requires prospective owner access",
);

pub const ERR_CONTRACT_OWNER_TRANSFER_NOT_INITIATED: ErrorConst = ErrorConst(
    ErrCode("CONTRACT_OWNER_TRANSFER_NOT_INITIATED"),
    "contract ownership transfer has not been initiated",
);

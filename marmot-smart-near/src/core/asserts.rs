use crate::{ErrCode, ErrorConst};
use near_sdk::env;

/// request arguments or the message attached to a transfer are malformed
pub const ERR_CODE_BAD_REQUEST: ErrCode = ErrCode("BAD_REQUEST");

/// generic data validation failure, e.g., a zero swap rate or a reward schedule that is out of range
pub const ERR_INVALID: ErrCode = ErrCode("INVALID");

pub const ERR_YOCTONEAR_DEPOSIT_REQUIRED: ErrorConst = ErrorConst(
    ErrCode("YOCTONEAR_DEPOSIT_REQUIRED"),
    "exactly 1 yoctoNEAR must be attached",
);

pub const ERR_INSUFFICIENT_FUNDS: ErrorConst = ErrorConst(
    ErrCode("INSUFFICIENT_FUNDS"),
    "account has insufficient funds to fulfill request",
);

/// raised when a 256-bit intermediate result does not fit back into 128 bits
pub const ERR_NUMERIC_OVERFLOW: ErrorConst =
    ErrorConst(ErrCode("NUMERIC_OVERFLOW"), "numeric overflow");

/// Calls that move tokens out of the contract require exactly 1 yoctoNEAR, which cannot be attached
/// by a function call access key.
pub fn assert_yocto_near_attached() {
    ERR_YOCTONEAR_DEPOSIT_REQUIRED.assert(|| env::attached_deposit() == 1)
}

/// callbacks must only be invoked by the contract itself
pub fn assert_self_call() {
    ERR_CODE_BAD_REQUEST.assert(
        || env::predecessor_account_id() == env::current_account_id(),
        || "callback can only be invoked by the contract itself",
    )
}

use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::json_types::ValidAccountId;
use marmot_smart_near::{Level, LogEvent};

/// Core [NEP-141](https://github.com/near/NEPs/issues/141) token ledger functions
///
/// ### Security
/// Transfers require exactly 1 yoctoNEAR to be attached, which means function call access keys
/// cannot transfer tokens without going through the wallet confirmation.
pub trait FungibleToken {
    /// Transfers positive `amount` of tokens from the `env::predecessor_account_id` to `receiver_id`.
    ///
    /// ## Panics
    /// - if the attached deposit does not equal 1 yoctoNEAR
    /// - if amount is zero
    /// - if sender and receiver are the same account
    /// - if the sender account has insufficient funds to fulfill the request
    ///
    /// #\[payable\]
    fn ft_transfer(&mut self, receiver_id: ValidAccountId, amount: TokenAmount, memo: Option<String>);

    fn ft_total_supply(&self) -> TokenAmount;

    /// If the account doesn't exist, then zero is returned.
    fn ft_balance_of(&self, account_id: ValidAccountId) -> TokenAmount;
}

pub const LOG_EVENT_FT_TRANSFER: LogEvent = LogEvent(Level::INFO, "FT_TRANSFER");

pub const LOG_EVENT_FT_MINT: LogEvent = LogEvent(Level::INFO, "FT_MINT");

pub const LOG_EVENT_FT_BURN: LogEvent = LogEvent(Level::INFO, "FT_BURN");

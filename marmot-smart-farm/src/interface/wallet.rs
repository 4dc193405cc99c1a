use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::{json_types::ValidAccountId, Promise};
use marmot_smart_near::{Level, LogEvent};

/// Custody balances held by the farm on behalf of accounts, per token.
///
/// Tokens are deposited via NEP-141 `ft_transfer_call` into the farm. Staked collateral is moved
/// from the depositor's wallet into the farm's own wallet, which acts as the ledger custody account.
pub trait Wallet {
    fn ops_wallet_balance(&self, token: ValidAccountId, account_id: ValidAccountId) -> TokenAmount;

    /// Transfers tokens out of the predecessor's wallet back to the predecessor via `ft_transfer`
    ///
    /// The wallet is debited up front. If the transfer fails, the amount is credited back.
    ///
    /// ## Panics
    /// - if exactly 1 yoctoNEAR is not attached
    /// - `[ERR] [INVALID_AMOUNT]` if amount is zero
    /// - `[ERR] [INSUFFICIENT_BALANCE]`
    fn ops_wallet_withdraw(&mut self, token: ValidAccountId, amount: TokenAmount) -> Promise;
}

pub trait ResolveWalletWithdraw {
    /// Credits the amount back to the wallet if the `ft_transfer` failed.
    ///
    /// Returns the amount that was credited back.
    fn ops_wallet_resolve_withdraw(
        &mut self,
        token: ValidAccountId,
        account_id: ValidAccountId,
        amount: TokenAmount,
    ) -> TokenAmount;
}

pub const LOG_EVENT_WALLET_DEPOSIT: LogEvent = LogEvent(Level::INFO, "WALLET_DEPOSIT");

pub const LOG_EVENT_WALLET_WITHDRAW: LogEvent = LogEvent(Level::INFO, "WALLET_WITHDRAW");

pub const LOG_EVENT_WALLET_REFUND: LogEvent = LogEvent(Level::WARN, "WALLET_REFUND");

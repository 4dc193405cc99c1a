use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::{json_types::ValidAccountId, PromiseOrValue};

/// Receiver of NEP-141 fungible tokens sent via `ft_transfer_call`
pub trait TransferReceiver {
    /// Callback to receive tokens.
    ///
    /// Called by the fungible token contract (`env::predecessor_account_id`) after `ft_transfer_call`
    /// was initiated by `sender_id` for the given `amount` with the transfer message given in `msg`.
    /// The `amount` of tokens were already transferred to this contract account.
    ///
    /// Returns the amount of tokens that were not used and must be refunded to the sender.
    fn ft_on_transfer(
        &mut self,
        sender_id: ValidAccountId,
        amount: TokenAmount,
        msg: String,
    ) -> PromiseOrValue<TokenAmount>;
}

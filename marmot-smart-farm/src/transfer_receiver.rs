use crate::*;
use marmot_smart_fungible_token::TransferReceiver;
use marmot_smart_near::asserts::ERR_CODE_BAD_REQUEST;
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::PromiseOrValue;
use marmot_smart_near::OrPanic;
use marmot_smart_reward_pool::ExternalYieldRef;

/// The token contract that is delivering the tokens is the predecessor.
/// All received tokens are kept, i.e., nothing is ever refunded.
#[near_bindgen]
impl TransferReceiver for Contract {
    fn ft_on_transfer(
        &mut self,
        sender_id: ValidAccountId,
        amount: TokenAmount,
        msg: String,
    ) -> PromiseOrValue<TokenAmount> {
        let token = env::predecessor_account_id();
        match FarmMessage::parse(&msg).or_panic() {
            FarmMessage::Deposit => {
                WalletComponent::credit(&token, sender_id.as_ref(), amount);
                LOG_EVENT_WALLET_DEPOSIT.log(format!(
                    "token={} account={} amount={}",
                    token,
                    sender_id.as_ref(),
                    amount
                ));
            }
            FarmMessage::Stake { pool } => {
                let mut reward_pool = Self::reward_pool();
                let deposit_token = reward_pool.pool(pool).deposit_token;
                ERR_CODE_BAD_REQUEST.assert(
                    || token == deposit_token,
                    || format!("pool {} accepts {} deposits", pool, deposit_token),
                );
                WalletComponent::credit(&token, sender_id.as_ref(), amount);
                reward_pool.deposit_for(sender_id.as_ref(), pool, amount);
            }
            FarmMessage::Harvest { vault, pid } => {
                YieldInboxComponent::new().deliver(
                    &token,
                    sender_id.as_ref(),
                    &ExternalYieldRef { vault, pid },
                    amount,
                );
            }
        }
        PromiseOrValue::Value(TokenAmount::ZERO)
    }
}

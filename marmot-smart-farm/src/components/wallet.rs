use crate::*;
use marmot_smart_near::asserts::{assert_self_call, assert_yocto_near_attached};
use marmot_smart_near::data::Object;
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::{
    env,
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
    AccountId, Gas, Promise, PromiseResult,
};
use marmot_smart_near::{json_function_call, json_function_callback, ErrMsg, Hash, OrPanic, TERA};
use marmot_smart_reward_pool::{TokenCustody, ERR_INSUFFICIENT_BALANCE, ERR_INVALID_AMOUNT};

/// Per token custody balances
pub struct WalletComponent;

const WALLET_BALANCE_KEY: u128 = 1953936251420813402815626744120316254;

type WalletBalance = Object<(u128, Hash), u128>;

pub const FT_TRANSFER_GAS: Gas = 10 * TERA;

pub const RESOLVE_WITHDRAW_GAS: Gas = 5 * TERA;

fn balance_key(token: &str, account_id: &str) -> (u128, Hash) {
    (WALLET_BALANCE_KEY, (token, account_id).into())
}

impl WalletComponent {
    pub fn balance(token: &str, account_id: &str) -> TokenAmount {
        WalletBalance::load(&balance_key(token, account_id))
            .map_or(TokenAmount::ZERO, |balance| (*balance).into())
    }

    pub fn credit(token: &str, account_id: &str, amount: TokenAmount) {
        let balance = Self::balance(token, account_id);
        Self::set_balance(token, account_id, balance + amount);
    }

    pub fn debit(token: &str, account_id: &str, amount: TokenAmount) -> Result<(), ErrMsg> {
        let balance = Self::balance(token, account_id);
        match balance.checked_sub(amount) {
            Some(balance) => {
                Self::set_balance(token, account_id, balance);
                Ok(())
            }
            None => Err(ERR_INSUFFICIENT_BALANCE.0.err(format!(
                "{} wallet balance is insufficient: {} < {}",
                token, balance, amount
            ))),
        }
    }

    fn set_balance(token: &str, account_id: &str, balance: TokenAmount) {
        WalletBalance::new(balance_key(token, account_id), *balance)
            .save_unless(|balance| *balance == 0);
    }
}

impl TokenCustody for WalletComponent {
    fn balance(&self, token: &str, account_id: &str) -> TokenAmount {
        Self::balance(token, account_id)
    }

    fn transfer(
        &mut self,
        token: &str,
        sender_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg> {
        Self::debit(token, sender_id, amount)?;
        Self::credit(token, receiver_id, amount);
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct FtTransferArgs {
    pub receiver_id: AccountId,
    pub amount: TokenAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct ResolveWithdrawArgs {
    pub token: AccountId,
    pub account_id: AccountId,
    pub amount: TokenAmount,
}

impl Wallet for WalletComponent {
    fn ops_wallet_balance(&self, token: ValidAccountId, account_id: ValidAccountId) -> TokenAmount {
        Self::balance(token.as_ref(), account_id.as_ref())
    }

    fn ops_wallet_withdraw(&mut self, token: ValidAccountId, amount: TokenAmount) -> Promise {
        assert_yocto_near_attached();
        ERR_INVALID_AMOUNT.assert(|| !amount.is_zero());
        let account_id = env::predecessor_account_id();
        Self::debit(token.as_ref(), &account_id, amount).or_panic();
        LOG_EVENT_WALLET_WITHDRAW.log(format!(
            "token={} account={} amount={}",
            token.as_ref(),
            account_id,
            amount
        ));

        json_function_call(
            token.as_ref(),
            "ft_transfer",
            Some(FtTransferArgs {
                receiver_id: account_id.clone(),
                amount,
                memo: None,
            }),
            1,
            FT_TRANSFER_GAS,
        )
        .then(json_function_callback(
            "ops_wallet_resolve_withdraw",
            Some(ResolveWithdrawArgs {
                token: token.into(),
                account_id,
                amount,
            }),
            0,
            RESOLVE_WITHDRAW_GAS,
        ))
    }
}

impl ResolveWalletWithdraw for WalletComponent {
    fn ops_wallet_resolve_withdraw(
        &mut self,
        token: ValidAccountId,
        account_id: ValidAccountId,
        amount: TokenAmount,
    ) -> TokenAmount {
        assert_self_call();
        let transferred = env::promise_results_count() == 1
            && matches!(env::promise_result(0), PromiseResult::Successful(_));
        if transferred {
            return TokenAmount::ZERO;
        }

        Self::credit(token.as_ref(), account_id.as_ref(), amount);
        LOG_EVENT_WALLET_REFUND.log(format!(
            "token={} account={} amount={}",
            token.as_ref(),
            account_id.as_ref(),
            amount
        ));
        amount
    }
}

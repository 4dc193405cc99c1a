use crate::*;
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::Promise;

#[near_bindgen]
impl Wallet for Contract {
    fn ops_wallet_balance(&self, token: ValidAccountId, account_id: ValidAccountId) -> TokenAmount {
        WalletComponent.ops_wallet_balance(token, account_id)
    }

    #[payable]
    fn ops_wallet_withdraw(&mut self, token: ValidAccountId, amount: TokenAmount) -> Promise {
        WalletComponent.ops_wallet_withdraw(token, amount)
    }
}

#[near_bindgen]
impl ResolveWalletWithdraw for Contract {
    #[private]
    fn ops_wallet_resolve_withdraw(
        &mut self,
        token: ValidAccountId,
        account_id: ValidAccountId,
        amount: TokenAmount,
    ) -> TokenAmount {
        WalletComponent.ops_wallet_resolve_withdraw(token, account_id, amount)
    }
}

use crate::*;
use marmot_smart_fungible_token::{FungibleToken, FungibleTokenMetadataProvider};
use marmot_smart_near::domain::TokenAmount;

#[near_bindgen]
impl FungibleToken for Contract {
    #[payable]
    fn ft_transfer(&mut self, receiver_id: ValidAccountId, amount: TokenAmount, memo: Option<String>) {
        FungibleTokenComponent.ft_transfer(receiver_id, amount, memo)
    }

    fn ft_total_supply(&self) -> TokenAmount {
        FungibleTokenComponent.ft_total_supply()
    }

    fn ft_balance_of(&self, account_id: ValidAccountId) -> TokenAmount {
        FungibleTokenComponent.ft_balance_of(account_id)
    }
}

#[near_bindgen]
impl FungibleTokenMetadataProvider for Contract {
    fn ft_metadata(&self) -> Metadata {
        FungibleTokenComponent.ft_metadata()
    }
}

use crate::*;
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::AccountId;
use marmot_smart_reward_pool::{Buyback, BuybackReceipt, HarvestReport};

#[near_bindgen]
impl Buyback for Contract {
    fn ops_buyback_harvest_all(&mut self) -> HarvestReport {
        Self::buyback().ops_buyback_harvest_all()
    }

    fn ops_buyback_and_burn(
        &mut self,
        yield_token: ValidAccountId,
        swapper: ValidAccountId,
        min_out: TokenAmount,
    ) -> BuybackReceipt {
        Self::buyback().ops_buyback_and_burn(yield_token, swapper, min_out)
    }

    fn ops_buyback_yield_balance(&self, yield_token: ValidAccountId) -> TokenAmount {
        Self::buyback().ops_buyback_yield_balance(yield_token)
    }

    fn ops_buyback_add_swapper(&mut self, swapper: ValidAccountId) {
        Self::buyback().ops_buyback_add_swapper(swapper)
    }

    fn ops_buyback_remove_swapper(&mut self, swapper: ValidAccountId) {
        Self::buyback().ops_buyback_remove_swapper(swapper)
    }

    fn ops_buyback_swappers(&self) -> Vec<AccountId> {
        Self::buyback().ops_buyback_swappers()
    }
}

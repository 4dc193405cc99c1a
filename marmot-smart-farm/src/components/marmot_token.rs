use marmot_smart_fungible_token::{components::fungible_token::FungibleTokenComponent, TokenService};
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_reward_pool::RewardToken;

/// Rewards are paid out in MARMOT, which is hosted by the farm contract itself
pub struct MarmotToken;

impl RewardToken for MarmotToken {
    fn mint(&mut self, account_id: &str, amount: TokenAmount) {
        FungibleTokenComponent.ft_mint(account_id, amount);
    }

    fn burn(&mut self, account_id: &str, amount: TokenAmount) {
        FungibleTokenComponent.ft_burn(account_id, amount);
    }
}

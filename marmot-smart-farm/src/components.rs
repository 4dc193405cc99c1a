//! In-contract implementations of the capabilities the reward ledger depends on

mod marmot_token;
mod price_feed;
mod swap_desk;
mod wallet;
mod yield_inbox;

pub use marmot_token::*;
pub use price_feed::*;
pub use swap_desk::*;
pub use wallet::*;
pub use yield_inbox::*;

use crate::*;
use marmot_smart_reward_pool::components::{
    buyback::BuybackComponent, reward_pool::RewardPoolComponent,
};

impl Contract {
    pub fn reward_pool() -> RewardPoolComponent {
        RewardPoolComponent::new(
            Box::new(PriceFeedComponent),
            Box::new(YieldInboxComponent::new()),
            Box::new(WalletComponent),
            Box::new(MarmotToken),
        )
    }

    pub fn buyback() -> BuybackComponent {
        BuybackComponent::new(
            Box::new(YieldInboxComponent::new()),
            Box::new(SwapDeskComponent),
            Box::new(MarmotToken),
        )
    }
}

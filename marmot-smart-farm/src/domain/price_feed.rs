use marmot_smart_near::domain::{BlockHeight, Decimal};
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    AccountId,
};

/// Push based price feed
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct Feed {
    /// the only account allowed to push prices
    pub reporter: AccountId,
    /// number of blocks a pushed price stays fresh
    pub max_age: u64,
    pub price: Option<Decimal>,
    pub updated_at: BlockHeight,
}

impl Feed {
    /// returns the price if it was pushed, is nonzero and is not older than `max_age`
    pub fn fresh_price(&self, now: BlockHeight) -> Option<Decimal> {
        self.price
            .filter(|price| !price.is_zero())
            .filter(|_| self.updated_at.blocks_until(now) <= self.max_age)
    }
}

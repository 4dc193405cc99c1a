use crate::PoolIndex;
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::{
    serde::{Deserialize, Serialize},
    AccountId,
};

/// Outcome of harvesting every pool that has an external yield reference
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct HarvestReport {
    pub harvested: Vec<HarvestedPool>,
    /// pools whose harvest failed - the failure is logged and the batch carries on
    pub failed: Vec<PoolIndex>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct HarvestedPool {
    pub pool: PoolIndex,
    pub yield_token: AccountId,
    pub amount: TokenAmount,
}

use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::{
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct BuybackReceipt {
    pub yield_token: AccountId,
    pub swapper: AccountId,
    /// harvested yield that was sold
    pub amount_in: TokenAmount,
    /// reward tokens bought back and burned
    pub burned: TokenAmount,
}

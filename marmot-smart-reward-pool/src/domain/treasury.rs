use marmot_smart_near::domain::{BasisPoints, TokenAmount};
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    AccountId,
};

/// Share of each settled emission that is minted to the treasury vault instead of the pools
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Default,
)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct Treasury {
    pub vault: Option<AccountId>,
    pub fee: BasisPoints,
}

impl Treasury {
    pub fn assert_valid(&self) {
        self.fee.assert_valid();
    }

    /// the treasury only receives a cut when a vault is configured
    pub fn cut(&self, emission: TokenAmount) -> TokenAmount {
        match self.vault {
            Some(_) => self.fee.of(emission),
            None => TokenAmount::ZERO,
        }
    }
}

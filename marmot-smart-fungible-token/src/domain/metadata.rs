use crate::FT_METADATA_SPEC;
use marmot_smart_near::asserts::ERR_INVALID;
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

#[derive(BorshDeserialize, BorshSerialize, Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct Metadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub decimals: u8,
}

impl Metadata {
    pub fn assert_valid(&self) {
        ERR_INVALID.assert(
            || FT_METADATA_SPEC == self.spec,
            || format!("`spec` must be `{}`", FT_METADATA_SPEC),
        );
        ERR_INVALID.assert(|| !self.name.is_empty(), || "`name` is required");
        ERR_INVALID.assert(|| !self.symbol.is_empty(), || "`symbol` is required");
    }

    /// MARMOT reward token metadata
    pub fn marmot() -> Self {
        Self {
            spec: FT_METADATA_SPEC.to_string(),
            name: "Marmot".to_string(),
            symbol: "MARMOT".to_string(),
            icon: None,
            decimals: 18,
        }
    }
}

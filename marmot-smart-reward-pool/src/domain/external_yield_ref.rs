use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    AccountId,
};
use std::fmt::{self, Display, Formatter};

/// Identifies where a pool's collateral is deployed in the external yield protocol
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash,
)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct ExternalYieldRef {
    /// auto-compounding vault account
    pub vault: AccountId,
    /// pool ID within the vault's fair launch program
    pub pid: u64,
}

impl Display for ExternalYieldRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.vault, self.pid)
    }
}

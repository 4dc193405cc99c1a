use crate::Hash;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// Account ID component of a storage key, e.g., for token balances and user positions
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountIdHash(Hash);

impl From<&str> for AccountIdHash {
    fn from(account_id: &str) -> Self {
        Self(account_id.into())
    }
}

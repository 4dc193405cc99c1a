use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};

/// Block height is the unit of time used for reward emission and price staleness
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct BlockHeight(pub u64);

unsigned_newtype!(BlockHeight, u64);

impl BlockHeight {
    pub fn from_env() -> Self {
        Self(env::block_index())
    }

    /// zero if `later` is not after `self`
    pub fn blocks_until(&self, later: BlockHeight) -> u64 {
        later.0.saturating_sub(self.0)
    }
}

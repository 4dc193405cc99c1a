use crate::{PoolIndex, RewardPerShare};
use marmot_smart_near::data::Object;
use marmot_smart_near::domain::{AccountIdHash, TokenAmount};
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// A depositor's stake in a single pool
///
/// `reward_debt` is the accumulated reward of `amount` at the pool's reward-per-share value
/// as of the last interaction, i.e., `pending = amount * acc_reward_per_share - reward_debt`.
/// The debt is rounded up and the accumulated reward is rounded down.
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default,
)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct UserPosition {
    pub amount: TokenAmount,
    pub reward_debt: TokenAmount,
    /// cumulative rewards paid out for this position
    pub claimed: TokenAmount,
}

impl UserPosition {
    pub fn pending(&self, acc_reward_per_share: RewardPerShare) -> TokenAmount {
        acc_reward_per_share
            .rewards_for(self.amount)
            .checked_sub(self.reward_debt)
            .unwrap_or(TokenAmount::ZERO)
    }

    /// snapshots the accumulator after the position has been paid out
    pub fn checkpoint(&mut self, acc_reward_per_share: RewardPerShare) {
        self.reward_debt = acc_reward_per_share.debt_for(self.amount);
    }
}

const POSITION_KEY: u128 = 1953921128870411370938446012416377402;

type PositionObject = Object<(u128, PoolIndex, AccountIdHash), UserPosition>;

/// Positions are created lazily and retained when they are emptied
pub struct PositionRepository;

impl PositionRepository {
    pub fn load(pool: PoolIndex, account_id: &str) -> Option<UserPosition> {
        PositionObject::load(&(POSITION_KEY, pool, account_id.into()))
            .map(PositionObject::into_value)
    }

    /// returns a zero position if the account never deposited into the pool
    pub fn load_or_default(pool: PoolIndex, account_id: &str) -> UserPosition {
        Self::load(pool, account_id).unwrap_or_default()
    }

    pub fn save(pool: PoolIndex, account_id: &str, position: UserPosition) {
        PositionObject::new((POSITION_KEY, pool, account_id.into()), position).save();
    }
}

use crate::{ExternalYieldRef, RewardPerShare};
use marmot_smart_near::data::Object;
use marmot_smart_near::domain::{mul_div, BlockHeight, Decimal, TokenAmount, DECIMAL_SCALE};
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
    AccountId,
};
use marmot_smart_near::{Hash, U256};

/// Pool ordinal, assigned in insertion order
pub type PoolIndex = u32;

/// Token amounts are normalized to 18 decimals when pools are valued against each other
pub const MAX_TOKEN_DECIMALS: u8 = 18;

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct Pool {
    /// collateral token contract
    pub deposit_token: AccountId,
    pub symbol: String,
    pub decimals: u8,
    /// allocation multiplier applied to the pool's staked value
    pub weight: Decimal,
    /// when not set, the collateral is treated as pegged 1:1
    pub oracle: Option<AccountId>,
    pub external_yield: Option<ExternalYieldRef>,
    pub total_shares: TokenAmount,
    pub acc_reward_per_share: RewardPerShare,
    pub last_accrual: BlockHeight,
    /// cumulative emission allocated to the pool
    pub total_allocated: TokenAmount,
    /// cumulative rewards paid out to the pool's depositors
    pub total_claimed: TokenAmount,
}

impl Pool {
    pub fn new(config: PoolConfig, now: BlockHeight) -> Self {
        Self {
            deposit_token: config.deposit_token.into(),
            symbol: config.symbol,
            decimals: config.decimals,
            weight: config.weight,
            oracle: config.oracle.map(Into::into),
            external_yield: config.external_yield,
            total_shares: TokenAmount::ZERO,
            acc_reward_per_share: RewardPerShare::ZERO,
            last_accrual: now,
            total_allocated: TokenAmount::ZERO,
            total_claimed: TokenAmount::ZERO,
        }
    }

    /// Staked value used to split emission across pools:
    /// `total_shares (normalized to 18 decimals) * weight * price`
    pub fn value(&self, price: Decimal) -> U256 {
        let scale = U256::from(10u128.pow((MAX_TOKEN_DECIMALS - self.decimals) as u32));
        let normalized_shares = U256::from(*self.total_shares) * scale;
        let weighted = mul_div(
            normalized_shares,
            self.weight.to_u256(),
            U256::from(DECIMAL_SCALE),
        );
        mul_div(weighted, price.to_u256(), U256::from(DECIMAL_SCALE))
    }

    pub fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }
}

/// Used to register a new pool
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct PoolConfig {
    pub deposit_token: ValidAccountId,
    pub symbol: String,
    pub decimals: u8,
    pub weight: Decimal,
    pub oracle: Option<ValidAccountId>,
    pub external_yield: Option<ExternalYieldRef>,
}

const POOL_KEY: u128 = 1953921006377924012839187305634189231;

type PoolObject = Object<(u128, PoolIndex), Pool>;

const DEPOSIT_TOKEN_KEY: u128 = 1953921064270125388232018931406513664;

type DepositTokenObject = Object<(u128, Hash), PoolIndex>;

/// Pool persistence
///
/// Pools are stored under contiguous indexes, i.e., pools are never deleted.
pub struct PoolRepository;

impl PoolRepository {
    pub fn load(index: PoolIndex) -> Option<Pool> {
        PoolObject::load(&(POOL_KEY, index)).map(PoolObject::into_value)
    }

    pub fn save(index: PoolIndex, pool: &Pool) {
        PoolObject::new((POOL_KEY, index), pool.clone()).save();
    }

    /// loads all pools in index order
    pub fn load_all(count: PoolIndex) -> Vec<Pool> {
        (0..count).filter_map(Self::load).collect()
    }

    pub fn pool_for_deposit_token(token: &str) -> Option<PoolIndex> {
        DepositTokenObject::load(&(DEPOSIT_TOKEN_KEY, token.into())).map(|index| *index)
    }

    pub fn register_deposit_token(token: &str, index: PoolIndex) {
        DepositTokenObject::new((DEPOSIT_TOKEN_KEY, token.into()), index).save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marmot_smart_near_test::*;

    fn pool(decimals: u8, weight: &str, total_shares: u128) -> Pool {
        let mut pool = Pool::new(
            PoolConfig {
                deposit_token: to_valid_account_id("usdt.near"),
                symbol: "usdt".to_string(),
                decimals,
                weight: weight.parse().unwrap(),
                oracle: None,
                external_yield: None,
            },
            0.into(),
        );
        pool.total_shares = total_shares.into();
        pool
    }

    #[test]
    fn value_is_normalized_to_18_decimals() {
        let six_decimals = pool(6, "1", 1_000_000);
        let eighteen_decimals = pool(18, "1", DECIMAL_SCALE);
        assert_eq!(
            six_decimals.value(Decimal::ONE),
            eighteen_decimals.value(Decimal::ONE)
        );
        assert_eq!(six_decimals.value(Decimal::ONE), U256::from(DECIMAL_SCALE));
    }

    #[test]
    fn value_applies_weight_and_price() {
        let pool = pool(18, "0.5", DECIMAL_SCALE);
        let price: Decimal = "40000".parse().unwrap();
        assert_eq!(pool.value(price), U256::from(20000u128 * DECIMAL_SCALE));
    }

    #[test]
    fn repository() {
        testing_env!(new_context("bob.near"));
        let pool = pool(18, "1", 0);

        assert!(PoolRepository::load(0).is_none());
        PoolRepository::save(0, &pool);
        PoolRepository::register_deposit_token(&pool.deposit_token, 0);

        assert_eq!(PoolRepository::load(0), Some(pool));
        assert_eq!(PoolRepository::load_all(1).len(), 1);
        assert_eq!(PoolRepository::pool_for_deposit_token("usdt.near"), Some(0));
        assert_eq!(PoolRepository::pool_for_deposit_token("busd.near"), None);
    }
}

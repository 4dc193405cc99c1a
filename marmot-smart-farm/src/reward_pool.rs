use crate::*;
use marmot_smart_near::domain::{Decimal, TokenAmount};
use marmot_smart_reward_pool::{
    ExternalYieldRef, Pool, PoolConfig, PoolIndex, PoolRegistry, RewardPool, RewardPoolOwner,
    UserPosition,
};

#[near_bindgen]
impl RewardPool for Contract {
    fn ops_pool_deposit(&mut self, pool: PoolIndex, amount: TokenAmount) -> UserPosition {
        Self::reward_pool().ops_pool_deposit(pool, amount)
    }

    #[payable]
    fn ops_pool_withdraw(&mut self, pool: PoolIndex, amount: TokenAmount) -> UserPosition {
        Self::reward_pool().ops_pool_withdraw(pool, amount)
    }

    fn ops_pool_claim(&mut self, pool: PoolIndex) -> TokenAmount {
        Self::reward_pool().ops_pool_claim(pool)
    }

    fn ops_pool_claim_all(&mut self) -> TokenAmount {
        Self::reward_pool().ops_pool_claim_all()
    }

    #[payable]
    fn ops_pool_emergency_withdraw(&mut self, pool: PoolIndex) -> TokenAmount {
        Self::reward_pool().ops_pool_emergency_withdraw(pool)
    }

    fn ops_pool_pending(&self, pool: PoolIndex, account_id: ValidAccountId) -> TokenAmount {
        Self::reward_pool().ops_pool_pending(pool, account_id)
    }

    fn ops_pool_pending_all(&self, account_id: ValidAccountId) -> TokenAmount {
        Self::reward_pool().ops_pool_pending_all(account_id)
    }

    fn ops_pool_position(
        &self,
        pool: PoolIndex,
        account_id: ValidAccountId,
    ) -> Option<UserPosition> {
        Self::reward_pool().ops_pool_position(pool, account_id)
    }
}

#[near_bindgen]
impl PoolRegistry for Contract {
    fn ops_pool_add(&mut self, config: PoolConfig) -> PoolIndex {
        Self::reward_pool().ops_pool_add(config)
    }

    fn ops_pool_count(&self) -> PoolIndex {
        Self::reward_pool().ops_pool_count()
    }

    fn ops_pool(&self, pool: PoolIndex) -> Pool {
        Self::reward_pool().ops_pool(pool)
    }

    fn ops_pool_emission_schedule(&self) -> EmissionSchedule {
        Self::reward_pool().ops_pool_emission_schedule()
    }
}

#[near_bindgen]
impl RewardPoolOwner for Contract {
    fn ops_pool_set_weight(&mut self, pool: PoolIndex, weight: Decimal) {
        Self::reward_pool().ops_pool_set_weight(pool, weight)
    }

    fn ops_pool_set_oracle(&mut self, pool: PoolIndex, oracle: Option<ValidAccountId>) {
        Self::reward_pool().ops_pool_set_oracle(pool, oracle)
    }

    fn ops_pool_set_external_yield(
        &mut self,
        pool: PoolIndex,
        external_yield: Option<ExternalYieldRef>,
    ) {
        Self::reward_pool().ops_pool_set_external_yield(pool, external_yield)
    }

    fn ops_pool_set_treasury(&mut self, treasury: Treasury) {
        Self::reward_pool().ops_pool_set_treasury(treasury)
    }

    fn ops_pool_treasury(&self) -> Treasury {
        Self::reward_pool().ops_pool_treasury()
    }
}

use crate::components::buyback::BuybackComponent;
use crate::*;
use marmot_smart_contract::{components::pause_gate::PauseGateComponent, ContractOwner};
use marmot_smart_near::asserts::{assert_yocto_near_attached, ERR_INVALID};
use marmot_smart_near::component::{Component, ComponentState, Deploy};
use marmot_smart_near::domain::{BlockHeight, Decimal, TokenAmount};
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
    AccountId,
};
use marmot_smart_near::{ErrMsg, OrPanic};

/// Multi-pool reward ledger
///
/// Every state changing operation first settles all pools up to the current block, i.e., the
/// emission accrued since the last settlement is allocated across the pools and folded into each
/// pool's reward-per-share accumulator. Rewards are paid out by minting the reward token.
///
/// Collateral is held in custody by the contract account. Pools that are linked to an external
/// yield vault forward deposits into the vault and recall them on withdrawal.
pub struct RewardPoolComponent {
    state: ComponentState<State>,
    oracle: Box<dyn PriceOracle>,
    yield_protocol: Box<dyn YieldProtocol>,
    custody: Box<dyn TokenCustody>,
    reward_token: Box<dyn RewardToken>,
    pause_gate: PauseGateComponent,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct State {
    pub schedule: EmissionSchedule,
    pub treasury: Treasury,
    pub pool_count: PoolIndex,
    /// block up to which the emission has been allocated
    pub last_accrual: BlockHeight,
}

impl Component for RewardPoolComponent {
    type State = State;

    const STATE_KEY: u128 = 1953922393581147024339165785437016178;
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct Config {
    pub schedule: EmissionSchedule,
    /// defaults to no treasury cut
    pub treasury: Option<Treasury>,
}

impl Deploy for RewardPoolComponent {
    type Config = Config;

    fn deploy(config: Self::Config) {
        config.schedule.assert_valid();
        let treasury = config.treasury.unwrap_or_default();
        treasury.assert_valid();
        let state = State {
            schedule: config.schedule,
            treasury,
            pool_count: 0,
            last_accrual: BlockHeight::from_env(),
        };
        Self::new_state(state).save();
    }
}

impl RewardPoolComponent {
    /// ## Panics
    /// if the component state is not deployed
    pub fn new(
        oracle: Box<dyn PriceOracle>,
        yield_protocol: Box<dyn YieldProtocol>,
        custody: Box<dyn TokenCustody>,
        reward_token: Box<dyn RewardToken>,
    ) -> Self {
        let state = Self::deployed_state(ERR_REWARD_POOL_NOT_DEPLOYED);
        Self {
            state,
            oracle,
            yield_protocol,
            custody,
            reward_token,
            pause_gate: PauseGateComponent::new(),
        }
    }

    /// account that holds the pooled collateral
    pub fn ledger_account() -> AccountId {
        env::current_account_id()
    }

    /// Stakes collateral that the account holds in custody.
    ///
    /// Pending rewards are paid out before the stake is increased.
    ///
    /// ## Panics
    /// - `[ERR] [PAUSED]`
    /// - `[ERR] [INVALID_AMOUNT]` if amount is zero
    /// - `[ERR] [UNKNOWN_POOL]`
    /// - `[ERR] [INSUFFICIENT_BALANCE]` if the account's custody balance is insufficient
    /// - `[ERR] [STALE_OR_UNAVAILABLE]` if a price feed fails during settlement
    /// - `[ERR] [EXTERNAL_PROTOCOL_ERROR]` if the collateral cannot be forwarded to the yield vault
    pub fn deposit_for(
        &mut self,
        account_id: &str,
        index: PoolIndex,
        amount: TokenAmount,
    ) -> UserPosition {
        self.pause_gate.assert_not_paused();
        ERR_INVALID_AMOUNT.assert(|| !amount.is_zero());
        self.assert_known_pool(index);

        let mut pools = self.settle();
        let pool = &mut pools[index as usize];
        let mut position = PositionRepository::load_or_default(index, account_id);
        let reward = position.pending(pool.acc_reward_per_share);

        self.custody
            .transfer(
                &pool.deposit_token,
                account_id,
                &Self::ledger_account(),
                amount,
            )
            .or_panic();
        if let Some(external_yield) = pool.external_yield.as_ref() {
            self.yield_protocol
                .deposit_collateral(external_yield, &pool.deposit_token, amount)
                .or_panic();
        }

        position.amount += amount;
        pool.total_shares += amount;
        self.pay_out(account_id, pool, &mut position, reward);
        position.checkpoint(pool.acc_reward_per_share);
        PoolRepository::save(index, pool);
        PositionRepository::save(index, account_id, position);

        LOG_EVENT_DEPOSIT.log(format!(
            "pool={} account={} amount={} reward={}",
            index, account_id, amount, reward
        ));
        position
    }

    /// Unstakes collateral back into the account's custody balance.
    ///
    /// Pending rewards are paid out before the stake is reduced.
    ///
    /// ## Panics
    /// - `[ERR] [PAUSED]`
    /// - `[ERR] [INVALID_AMOUNT]` if amount is zero
    /// - `[ERR] [UNKNOWN_POOL]`
    /// - `[ERR] [INSUFFICIENT_BALANCE]` if amount exceeds the staked amount
    /// - `[ERR] [EXTERNAL_PROTOCOL_ERROR]` if the collateral cannot be recalled from the yield vault
    pub fn withdraw_for(
        &mut self,
        account_id: &str,
        index: PoolIndex,
        amount: TokenAmount,
    ) -> UserPosition {
        self.pause_gate.assert_not_paused();
        ERR_INVALID_AMOUNT.assert(|| !amount.is_zero());
        self.assert_known_pool(index);

        let mut pools = self.settle();
        let pool = &mut pools[index as usize];
        let mut position = PositionRepository::load_or_default(index, account_id);
        ERR_INSUFFICIENT_BALANCE.assert(|| position.amount >= amount);
        let reward = position.pending(pool.acc_reward_per_share);

        if let Some(external_yield) = pool.external_yield.as_ref() {
            self.yield_protocol
                .withdraw_collateral(external_yield, &pool.deposit_token, amount)
                .or_panic();
        }
        self.custody
            .transfer(
                &pool.deposit_token,
                &Self::ledger_account(),
                account_id,
                amount,
            )
            .or_panic();

        position.amount -= amount;
        pool.total_shares -= amount;
        self.pay_out(account_id, pool, &mut position, reward);
        position.checkpoint(pool.acc_reward_per_share);
        PoolRepository::save(index, pool);
        PositionRepository::save(index, account_id, position);

        LOG_EVENT_WITHDRAW.log(format!(
            "pool={} account={} amount={} reward={}",
            index, account_id, amount, reward
        ));
        position
    }

    /// Pays out the pending rewards for the account's position in the pool
    pub fn claim_for(&mut self, account_id: &str, index: PoolIndex) -> TokenAmount {
        self.pause_gate.assert_not_paused();
        self.assert_known_pool(index);

        let mut pools = self.settle();
        let pool = &mut pools[index as usize];
        let mut position = match PositionRepository::load(index, account_id) {
            Some(position) => position,
            None => return TokenAmount::ZERO,
        };
        let reward = position.pending(pool.acc_reward_per_share);
        if reward.is_zero() {
            return reward;
        }

        self.pay_out(account_id, pool, &mut position, reward);
        position.checkpoint(pool.acc_reward_per_share);
        PoolRepository::save(index, pool);
        PositionRepository::save(index, account_id, position);

        LOG_EVENT_CLAIM.log(format!(
            "pool={} account={} reward={}",
            index, account_id, reward
        ));
        reward
    }

    /// Pays out the pending rewards across all pools with a single mint
    pub fn claim_all_for(&mut self, account_id: &str) -> TokenAmount {
        self.pause_gate.assert_not_paused();

        let mut pools = self.settle();
        let mut total = TokenAmount::ZERO;
        for (index, pool) in pools.iter_mut().enumerate() {
            let index = index as PoolIndex;
            let mut position = match PositionRepository::load(index, account_id) {
                Some(position) => position,
                None => continue,
            };
            let reward = position.pending(pool.acc_reward_per_share);
            if reward.is_zero() {
                continue;
            }
            position.claimed += reward;
            position.checkpoint(pool.acc_reward_per_share);
            pool.total_claimed += reward;
            PoolRepository::save(index, pool);
            PositionRepository::save(index, account_id, position);
            LOG_EVENT_CLAIM.log(format!(
                "pool={} account={} reward={}",
                index, account_id, reward
            ));
            total += reward;
        }
        if !total.is_zero() {
            self.reward_token.mint(account_id, total);
        }
        total
    }

    /// Returns the full stake to the account and forfeits all pending rewards.
    ///
    /// Bypasses the pause gate. Returns zero if there is nothing staked.
    ///
    /// The pools are settled before the stake is removed, so that the other stakers keep exactly
    /// what they had accrued. If a price feed is unavailable the stake is still returned, and the
    /// unsettled emission is allocated by the next settlement.
    pub fn emergency_withdraw_for(&mut self, account_id: &str, index: PoolIndex) -> TokenAmount {
        self.assert_known_pool(index);
        let mut position = match PositionRepository::load(index, account_id) {
            Some(position) if !position.amount.is_zero() => position,
            _ => return TokenAmount::ZERO,
        };
        let mut pools = match self.try_settle() {
            Ok(pools) => pools,
            Err(err) => {
                LOG_EVENT_SETTLEMENT_SKIPPED.log(format!("pool={} {}", index, err));
                PoolRepository::load_all(self.state.pool_count)
            }
        };
        let pool = &mut pools[index as usize];
        let amount = position.amount;

        if let Some(external_yield) = pool.external_yield.as_ref() {
            self.yield_protocol
                .withdraw_collateral(external_yield, &pool.deposit_token, amount)
                .or_panic();
        }
        self.custody
            .transfer(
                &pool.deposit_token,
                &Self::ledger_account(),
                account_id,
                amount,
            )
            .or_panic();

        position.amount = TokenAmount::ZERO;
        position.reward_debt = TokenAmount::ZERO;
        pool.total_shares -= amount;
        PoolRepository::save(index, pool);
        PositionRepository::save(index, account_id, position);

        LOG_EVENT_EMERGENCY_WITHDRAW.log(format!(
            "pool={} account={} amount={}",
            index, account_id, amount
        ));
        amount
    }

    pub fn pending_for(&self, account_id: &str, index: PoolIndex) -> TokenAmount {
        self.assert_known_pool(index);
        let (pools, _) = self.project_settlement();
        PositionRepository::load_or_default(index, account_id)
            .pending(pools[index as usize].acc_reward_per_share)
    }

    pub fn pending_all_for(&self, account_id: &str) -> TokenAmount {
        let (pools, _) = self.project_settlement();
        pools
            .iter()
            .enumerate()
            .filter_map(|(index, pool)| {
                PositionRepository::load(index as PoolIndex, account_id)
                    .map(|position| position.pending(pool.acc_reward_per_share))
            })
            .sum()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// ## Panics
    /// with `[ERR] [UNKNOWN_POOL]`
    pub fn pool(&self, index: PoolIndex) -> Pool {
        self.assert_known_pool(index);
        PoolRepository::load(index).unwrap_or_else(|| ERR_UNKNOWN_POOL.panic())
    }

    fn assert_known_pool(&self, index: PoolIndex) {
        ERR_UNKNOWN_POOL.assert(|| index < self.state.pool_count);
    }

    /// Computes the settled pools as of the current block without persisting anything.
    ///
    /// ## Panics
    /// with `[ERR] [STALE_OR_UNAVAILABLE]` if a staked pool's price feed fails
    fn project_settlement(&self) -> (Vec<Pool>, Settlement) {
        self.try_project_settlement().or_panic()
    }

    fn try_project_settlement(&self) -> Result<(Vec<Pool>, Settlement), ErrMsg> {
        let now = BlockHeight::from_env();
        let mut pools = PoolRepository::load_all(self.state.pool_count);
        let emission = self.state.schedule.accrued(self.state.last_accrual, now);
        let oracle = &self.oracle;
        let settlement = settle_pools(
            &mut pools,
            emission,
            &self.state.treasury,
            now,
            |feed| oracle.price(feed),
        )?;
        Ok((pools, settlement))
    }

    /// Settles all pools up to the current block and mints the treasury cut.
    ///
    /// Returns the settled pools in index order.
    ///
    /// ## Panics
    /// with `[ERR] [STALE_OR_UNAVAILABLE]` if a staked pool's price feed fails
    fn settle(&mut self) -> Vec<Pool> {
        self.try_settle().or_panic()
    }

    /// Nothing is persisted when settlement fails
    fn try_settle(&mut self) -> Result<Vec<Pool>, ErrMsg> {
        let now = BlockHeight::from_env();
        let from = self.state.last_accrual;
        if now <= from {
            return Ok(PoolRepository::load_all(self.state.pool_count));
        }

        let (pools, settlement) = self.try_project_settlement()?;
        for (index, pool) in pools.iter().enumerate() {
            PoolRepository::save(index as PoolIndex, pool);
        }
        self.state.last_accrual = now;
        self.state.save();

        if !settlement.treasury_cut.is_zero() {
            if let Some(vault) = self.state.treasury.vault.clone() {
                self.reward_token.mint(&vault, settlement.treasury_cut);
                LOG_EVENT_TREASURY_MINT.log(format!(
                    "vault={} amount={}",
                    vault, settlement.treasury_cut
                ));
            }
        }
        if !settlement.emission.is_zero() {
            LOG_EVENT_SETTLED.log(format!(
                "blocks={}..{} emission={} allocated={} treasury={}",
                from, now, settlement.emission, settlement.allocated, settlement.treasury_cut
            ));
        }
        Ok(pools)
    }

    fn pay_out(
        &mut self,
        account_id: &str,
        pool: &mut Pool,
        position: &mut UserPosition,
        reward: TokenAmount,
    ) {
        if reward.is_zero() {
            return;
        }
        position.claimed += reward;
        pool.total_claimed += reward;
        self.reward_token.mint(account_id, reward);
    }

    /// settles and then applies the update to the pool
    fn update_pool<F>(&mut self, index: PoolIndex, update: F)
    where
        F: FnOnce(&mut Self, &mut Pool),
    {
        ContractOwner::assert_owner();
        self.assert_known_pool(index);
        let mut pools = self.settle();
        let pool = &mut pools[index as usize];
        update(self, pool);
        PoolRepository::save(index, pool);
    }
}

impl RewardPool for RewardPoolComponent {
    fn ops_pool_deposit(&mut self, pool: PoolIndex, amount: TokenAmount) -> UserPosition {
        self.deposit_for(&env::predecessor_account_id(), pool, amount)
    }

    fn ops_pool_withdraw(&mut self, pool: PoolIndex, amount: TokenAmount) -> UserPosition {
        assert_yocto_near_attached();
        self.withdraw_for(&env::predecessor_account_id(), pool, amount)
    }

    fn ops_pool_claim(&mut self, pool: PoolIndex) -> TokenAmount {
        self.claim_for(&env::predecessor_account_id(), pool)
    }

    fn ops_pool_claim_all(&mut self) -> TokenAmount {
        self.claim_all_for(&env::predecessor_account_id())
    }

    fn ops_pool_emergency_withdraw(&mut self, pool: PoolIndex) -> TokenAmount {
        assert_yocto_near_attached();
        self.emergency_withdraw_for(&env::predecessor_account_id(), pool)
    }

    fn ops_pool_pending(&self, pool: PoolIndex, account_id: ValidAccountId) -> TokenAmount {
        self.pending_for(account_id.as_ref(), pool)
    }

    fn ops_pool_pending_all(&self, account_id: ValidAccountId) -> TokenAmount {
        self.pending_all_for(account_id.as_ref())
    }

    fn ops_pool_position(
        &self,
        pool: PoolIndex,
        account_id: ValidAccountId,
    ) -> Option<UserPosition> {
        self.assert_known_pool(pool);
        PositionRepository::load(pool, account_id.as_ref())
    }
}

impl PoolRegistry for RewardPoolComponent {
    fn ops_pool_add(&mut self, config: PoolConfig) -> PoolIndex {
        ContractOwner::assert_owner();
        ERR_INVALID_WEIGHT.assert(|| !config.weight.is_zero());
        ERR_INVALID.assert(
            || config.decimals <= MAX_TOKEN_DECIMALS,
            || format!("token decimals must not exceed {}", MAX_TOKEN_DECIMALS),
        );
        ERR_DUPLICATE_TOKEN.assert(|| {
            PoolRepository::pool_for_deposit_token(config.deposit_token.as_ref()).is_none()
        });

        self.settle();
        let index = self.state.pool_count;
        let pool = Pool::new(config, BlockHeight::from_env());
        PoolRepository::save(index, &pool);
        PoolRepository::register_deposit_token(&pool.deposit_token, index);
        self.state.pool_count += 1;
        self.state.save();

        LOG_EVENT_POOL_ADDED.log(format!(
            "pool={} token={} symbol={} weight={}",
            index, pool.deposit_token, pool.symbol, pool.weight
        ));
        index
    }

    fn ops_pool_count(&self) -> PoolIndex {
        self.state.pool_count
    }

    fn ops_pool(&self, pool: PoolIndex) -> Pool {
        ERR_OUT_OF_RANGE.assert(|| pool < self.state.pool_count);
        self.pool(pool)
    }

    fn ops_pool_emission_schedule(&self) -> EmissionSchedule {
        self.state.schedule
    }
}

impl RewardPoolOwner for RewardPoolComponent {
    fn ops_pool_set_weight(&mut self, pool: PoolIndex, weight: Decimal) {
        ERR_INVALID_WEIGHT.assert(|| !weight.is_zero());
        self.update_pool(pool, |_, pool| pool.weight = weight);
        LOG_EVENT_POOL_UPDATED.log(format!("pool={} weight={}", pool, weight));
    }

    fn ops_pool_set_oracle(&mut self, pool: PoolIndex, oracle: Option<ValidAccountId>) {
        let oracle: Option<AccountId> = oracle.map(Into::into);
        let log_msg = format!("pool={} oracle={:?}", pool, oracle);
        self.update_pool(pool, |_, pool| pool.oracle = oracle);
        LOG_EVENT_POOL_UPDATED.log(log_msg);
    }

    /// The yield accrued on the current vault is harvested for the buyback, and staked collateral is
    /// moved from the current vault to the new vault
    fn ops_pool_set_external_yield(
        &mut self,
        pool: PoolIndex,
        external_yield: Option<ExternalYieldRef>,
    ) {
        let pool_index = pool;
        let log_msg = format!(
            "pool={} external_yield={}",
            pool,
            external_yield
                .as_ref()
                .map_or_else(|| "none".to_string(), ToString::to_string)
        );
        self.update_pool(pool, |component, pool| {
            if pool.external_yield == external_yield {
                return;
            }
            if let Some(current) = pool.external_yield.as_ref() {
                let harvested = component.yield_protocol.harvest(current).or_panic();
                BuybackComponent::credit_yield(&harvested.token, harvested.amount);
                LOG_EVENT_HARVEST.log(format!(
                    "pool={} vault={} token={} amount={}",
                    pool_index, current, harvested.token, harvested.amount
                ));
            }
            if !pool.total_shares.is_zero() {
                if let Some(current) = pool.external_yield.as_ref() {
                    component
                        .yield_protocol
                        .withdraw_collateral(current, &pool.deposit_token, pool.total_shares)
                        .or_panic();
                }
                if let Some(next) = external_yield.as_ref() {
                    component
                        .yield_protocol
                        .deposit_collateral(next, &pool.deposit_token, pool.total_shares)
                        .or_panic();
                }
            }
            pool.external_yield = external_yield;
        });
        LOG_EVENT_POOL_UPDATED.log(log_msg);
    }

    fn ops_pool_set_treasury(&mut self, treasury: Treasury) {
        ContractOwner::assert_owner();
        treasury.assert_valid();
        // the current fee applies to the emission accrued so far
        self.settle();
        self.state.treasury = treasury;
        self.state.save();
        LOG_EVENT_TREASURY_UPDATED.log(format!(
            "vault={:?} fee={}",
            self.state.treasury.vault, self.state.treasury.fee
        ));
    }

    fn ops_pool_treasury(&self) -> Treasury {
        self.state.treasury.clone()
    }
}

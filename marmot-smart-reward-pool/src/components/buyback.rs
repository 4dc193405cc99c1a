use crate::*;
use marmot_smart_contract::ContractOwner;
use marmot_smart_near::component::{Component, ComponentState, Deploy};
use marmot_smart_near::data::Object;
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    json_types::ValidAccountId,
    AccountId,
};
use marmot_smart_near::{Hash, OrPanic};

/// Harvests the yield earned by pool collateral deployed in external vaults, and converts it into
/// reward tokens which are burned.
///
/// Harvested yield is tracked per yield token. Only tracked yield can be sold, i.e., collateral held
/// in custody for depositors is never touched.
pub struct BuybackComponent {
    state: ComponentState<State>,
    yield_protocol: Box<dyn YieldProtocol>,
    swapper: Box<dyn Swapper>,
    reward_token: Box<dyn RewardToken>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Default)]
pub struct State {
    /// whitelisted swap routes
    pub swappers: Vec<AccountId>,
}

impl Component for BuybackComponent {
    type State = State;

    const STATE_KEY: u128 = 1953927715339428530245371036286151571;
}

impl Deploy for BuybackComponent {
    /// initial swapper whitelist
    type Config = Vec<ValidAccountId>;

    fn deploy(swappers: Self::Config) {
        let mut state = State::default();
        for swapper in swappers {
            let swapper: AccountId = swapper.into();
            if !state.swappers.contains(&swapper) {
                state.swappers.push(swapper);
            }
        }
        Self::new_state(state).save();
    }
}

const YIELD_BALANCE_KEY: u128 = 1953927791848404377427958853419396716;

type YieldBalanceObject = Object<(u128, Hash), TokenAmount>;

impl BuybackComponent {
    pub fn new(
        yield_protocol: Box<dyn YieldProtocol>,
        swapper: Box<dyn Swapper>,
        reward_token: Box<dyn RewardToken>,
    ) -> Self {
        Self {
            state: Self::state_or_default(),
            yield_protocol,
            swapper,
            reward_token,
        }
    }

    /// harvested yield that has not been bought back yet
    pub fn yield_balance(token: &str) -> TokenAmount {
        YieldBalanceObject::load(&(YIELD_BALANCE_KEY, token.into()))
            .map_or(TokenAmount::ZERO, |balance| *balance)
    }

    /// adds harvested yield to the balance that the next buyback swaps
    pub fn credit_yield(token: &str, amount: TokenAmount) {
        if !amount.is_zero() {
            Self::set_yield_balance(token, Self::yield_balance(token) + amount);
        }
    }

    fn set_yield_balance(token: &str, balance: TokenAmount) {
        YieldBalanceObject::new((YIELD_BALANCE_KEY, token.into()), balance)
            .save_unless(TokenAmount::is_zero);
    }

    fn is_whitelisted(&self, swapper: &str) -> bool {
        self.state.swappers.iter().any(|account_id| account_id == swapper)
    }
}

impl Buyback for BuybackComponent {
    fn ops_buyback_harvest_all(&mut self) -> HarvestReport {
        let mut report = HarvestReport::default();
        let mut index: PoolIndex = 0;
        while let Some(pool) = PoolRepository::load(index) {
            if let Some(external_yield) = pool.external_yield.as_ref() {
                match self.yield_protocol.harvest(external_yield) {
                    Ok(harvested) => {
                        Self::credit_yield(&harvested.token, harvested.amount);
                        LOG_EVENT_HARVEST.log(format!(
                            "pool={} vault={} token={} amount={}",
                            index, external_yield, harvested.token, harvested.amount
                        ));
                        report.harvested.push(HarvestedPool {
                            pool: index,
                            yield_token: harvested.token,
                            amount: harvested.amount,
                        });
                    }
                    Err(err) => {
                        LOG_EVENT_HARVEST_FAILED.log(format!(
                            "pool={} vault={} {}",
                            index, external_yield, err
                        ));
                        report.failed.push(index);
                    }
                }
            }
            index += 1;
        }
        report
    }

    fn ops_buyback_and_burn(
        &mut self,
        yield_token: ValidAccountId,
        swapper: ValidAccountId,
        min_out: TokenAmount,
    ) -> BuybackReceipt {
        let yield_token: AccountId = yield_token.into();
        let swapper: AccountId = swapper.into();
        ERR_SWAPPER_NOT_WHITELISTED.assert(|| self.is_whitelisted(&swapper));
        let amount_in = Self::yield_balance(&yield_token);
        ERR_NO_HARVESTED_YIELD.assert(|| !amount_in.is_zero());

        let quote = self
            .swapper
            .quote(&swapper, &yield_token, amount_in)
            .or_panic();
        ERR_SLIPPAGE_EXCEEDED.assert(|| quote >= min_out);
        let burned = self
            .swapper
            .swap(&swapper, &yield_token, amount_in, min_out)
            .or_panic();
        ERR_SLIPPAGE_EXCEEDED.assert(|| burned >= min_out);

        Self::set_yield_balance(&yield_token, TokenAmount::ZERO);
        if !burned.is_zero() {
            self.reward_token
                .burn(&env::current_account_id(), burned);
        }
        LOG_EVENT_BUYBACK_BURN.log(format!(
            "token={} swapper={} amount_in={} burned={}",
            yield_token, swapper, amount_in, burned
        ));
        BuybackReceipt {
            yield_token,
            swapper,
            amount_in,
            burned,
        }
    }

    fn ops_buyback_yield_balance(&self, yield_token: ValidAccountId) -> TokenAmount {
        Self::yield_balance(yield_token.as_ref())
    }

    fn ops_buyback_add_swapper(&mut self, swapper: ValidAccountId) {
        ContractOwner::assert_owner();
        let swapper: AccountId = swapper.into();
        if self.is_whitelisted(&swapper) {
            return;
        }
        LOG_EVENT_SWAPPER_ADDED.log(&swapper);
        self.state.swappers.push(swapper);
        self.state.save();
    }

    fn ops_buyback_remove_swapper(&mut self, swapper: ValidAccountId) {
        ContractOwner::assert_owner();
        let swapper: AccountId = swapper.into();
        if !self.is_whitelisted(&swapper) {
            return;
        }
        self.state.swappers.retain(|account_id| account_id != &swapper);
        self.state.save();
        LOG_EVENT_SWAPPER_REMOVED.log(&swapper);
    }

    fn ops_buyback_swappers(&self) -> Vec<AccountId> {
        self.state.swappers.clone()
    }
}

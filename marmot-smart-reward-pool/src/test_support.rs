//! In-memory collaborators shared by the component tests

use crate::components::buyback::BuybackComponent;
use crate::components::reward_pool::{self, RewardPoolComponent};
use crate::*;
use marmot_smart_contract::components::{
    contract_ownership::ContractOwnershipComponent, pause_gate::PauseGateComponent,
};
use marmot_smart_near::component::Deploy;
use marmot_smart_near::domain::{Decimal, TokenAmount};
use marmot_smart_near::near_sdk::env;
use marmot_smart_near::ErrMsg;
use marmot_smart_near_test::*;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

pub const OWNER: &str = "owner.near";
pub const ALICE: &str = "alice.near";
pub const BOB: &str = "bob.near";
pub const BUSD: &str = "busd.near";
pub const BTC: &str = "btc.near";
pub const BTC_FEED: &str = "btc-feed.near";
pub const IB_BUSD_VAULT: &str = "ibbusd.near";
pub const ALPACA: &str = "alpaca.near";
pub const SWAPPER: &str = "swapper.near";
pub const TREASURY_VAULT: &str = "treasury.near";

#[derive(Default, Debug)]
pub struct World {
    pub custody: HashMap<(String, String), u128>,
    pub deployed: HashMap<ExternalYieldRef, u128>,
    pub accrued_yield: HashMap<ExternalYieldRef, u128>,
    pub failing_vaults: HashSet<String>,
    pub prices: HashMap<String, Decimal>,
    pub rewards: HashMap<String, u128>,
    pub reward_supply: u128,
    pub mint_calls: usize,
    pub swap_rates: HashMap<(String, String), Decimal>,
}

pub type SharedWorld = Rc<RefCell<World>>;

impl World {
    pub fn custody_balance(&self, token: &str, account_id: &str) -> u128 {
        *self
            .custody
            .get(&(token.to_string(), account_id.to_string()))
            .unwrap_or(&0)
    }

    pub fn fund(&mut self, token: &str, account_id: &str, amount: u128) {
        *self
            .custody
            .entry((token.to_string(), account_id.to_string()))
            .or_default() += amount;
    }

    pub fn reward_balance(&self, account_id: &str) -> u128 {
        *self.rewards.get(account_id).unwrap_or(&0)
    }

    fn move_custody(
        &mut self,
        token: &str,
        sender_id: &str,
        receiver_id: &str,
        amount: u128,
    ) -> Result<(), ErrMsg> {
        let balance = self.custody_balance(token, sender_id);
        if balance < amount {
            return Err(ERR_INSUFFICIENT_BALANCE
                .0
                .err(format!("{} has insufficient {}", sender_id, token)));
        }
        self.custody
            .insert((token.to_string(), sender_id.to_string()), balance - amount);
        self.fund(token, receiver_id, amount);
        Ok(())
    }
}

pub fn ledger_account() -> String {
    env::current_account_id()
}

pub struct MockOracle(pub SharedWorld);

impl PriceOracle for MockOracle {
    fn price(&self, oracle: &str) -> Result<Decimal, ErrMsg> {
        self.0
            .borrow()
            .prices
            .get(oracle)
            .cloned()
            .ok_or_else(|| ERR_CODE_STALE_OR_UNAVAILABLE.err(format!("{} is stale", oracle)))
    }
}

pub struct MockYieldProtocol(pub SharedWorld);

impl YieldProtocol for MockYieldProtocol {
    fn deposit_collateral(
        &mut self,
        yield_ref: &ExternalYieldRef,
        token: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg> {
        let mut world = self.0.borrow_mut();
        if world.failing_vaults.contains(&yield_ref.vault) {
            return Err(ERR_CODE_EXTERNAL_PROTOCOL.err("vault is down"));
        }
        world.move_custody(token, &ledger_account(), &yield_ref.vault, *amount)?;
        *world.deployed.entry(yield_ref.clone()).or_default() += *amount;
        Ok(())
    }

    fn withdraw_collateral(
        &mut self,
        yield_ref: &ExternalYieldRef,
        token: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg> {
        let mut world = self.0.borrow_mut();
        if world.failing_vaults.contains(&yield_ref.vault) {
            return Err(ERR_CODE_EXTERNAL_PROTOCOL.err("vault is down"));
        }
        let deployed = *world.deployed.get(yield_ref).unwrap_or(&0);
        if deployed < *amount {
            return Err(ERR_CODE_EXTERNAL_PROTOCOL.err("insufficient vault liquidity"));
        }
        world.deployed.insert(yield_ref.clone(), deployed - *amount);
        world.move_custody(token, &yield_ref.vault, &ledger_account(), *amount)
    }

    fn harvest(&mut self, yield_ref: &ExternalYieldRef) -> Result<HarvestedYield, ErrMsg> {
        let mut world = self.0.borrow_mut();
        if world.failing_vaults.contains(&yield_ref.vault) {
            return Err(ERR_CODE_EXTERNAL_PROTOCOL.err("vault is down"));
        }
        let amount = world.accrued_yield.remove(yield_ref).unwrap_or(0);
        world.fund(ALPACA, &ledger_account(), amount);
        Ok(HarvestedYield {
            token: ALPACA.to_string(),
            amount: amount.into(),
        })
    }
}

pub struct MockCustody(pub SharedWorld);

impl TokenCustody for MockCustody {
    fn balance(&self, token: &str, account_id: &str) -> TokenAmount {
        self.0.borrow().custody_balance(token, account_id).into()
    }

    fn transfer(
        &mut self,
        token: &str,
        sender_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg> {
        self.0
            .borrow_mut()
            .move_custody(token, sender_id, receiver_id, *amount)
    }
}

pub struct MockRewardToken(pub SharedWorld);

impl RewardToken for MockRewardToken {
    fn mint(&mut self, account_id: &str, amount: TokenAmount) {
        let mut world = self.0.borrow_mut();
        *world.rewards.entry(account_id.to_string()).or_default() += *amount;
        world.reward_supply += *amount;
        world.mint_calls += 1;
    }

    fn burn(&mut self, account_id: &str, amount: TokenAmount) {
        let mut world = self.0.borrow_mut();
        let balance = world.reward_balance(account_id);
        assert!(balance >= *amount, "burn exceeds balance");
        world.rewards.insert(account_id.to_string(), balance - *amount);
        world.reward_supply -= *amount;
    }
}

pub struct MockSwapper(pub SharedWorld);

impl Swapper for MockSwapper {
    fn quote(
        &self,
        swapper: &str,
        token_in: &str,
        amount_in: TokenAmount,
    ) -> Result<TokenAmount, ErrMsg> {
        self.0
            .borrow()
            .swap_rates
            .get(&(swapper.to_string(), token_in.to_string()))
            .map(|rate| rate.of(amount_in))
            .ok_or_else(|| ERR_CODE_ROUTE_UNAVAILABLE.err("no route"))
    }

    fn swap(
        &mut self,
        swapper: &str,
        token_in: &str,
        amount_in: TokenAmount,
        min_out: TokenAmount,
    ) -> Result<TokenAmount, ErrMsg> {
        let amount_out = self.quote(swapper, token_in, amount_in)?;
        if amount_out < min_out {
            return Err(ERR_CODE_SLIPPAGE_EXCEEDED.err("price moved"));
        }
        let mut world = self.0.borrow_mut();
        world.move_custody(token_in, &ledger_account(), swapper, *amount_in)?;
        let swapper_rewards = world.reward_balance(swapper);
        world
            .rewards
            .insert(swapper.to_string(), swapper_rewards - *amount_out);
        *world.rewards.entry(ledger_account()).or_default() += *amount_out;
        Ok(amount_out)
    }
}

pub fn new_world() -> SharedWorld {
    Rc::new(RefCell::new(World::default()))
}

/// switches the runtime context to the account at the block height, keeping contract storage
pub use marmot_smart_near_test::call_at;

pub fn schedule() -> EmissionSchedule {
    EmissionSchedule {
        genesis: 100.into(),
        phase_boundary: 1000.into(),
        rate_phase1: 1000.into(),
        rate_phase2: 100.into(),
    }
}

/// deploys the contract components at block 100, with the owner as predecessor
pub fn deploy(treasury: Option<Treasury>) {
    // drop any storage left behind by a previous run on this thread
    env::take_blockchain_interface();
    call_at(OWNER, 100);
    ContractOwnershipComponent::deploy(to_valid_account_id(OWNER));
    PauseGateComponent::deploy(false);
    RewardPoolComponent::deploy(reward_pool::Config {
        schedule: schedule(),
        treasury,
    });
    BuybackComponent::deploy(vec![to_valid_account_id(SWAPPER)]);
}

pub fn reward_pool(world: &SharedWorld) -> RewardPoolComponent {
    RewardPoolComponent::new(
        Box::new(MockOracle(world.clone())),
        Box::new(MockYieldProtocol(world.clone())),
        Box::new(MockCustody(world.clone())),
        Box::new(MockRewardToken(world.clone())),
    )
}

pub fn buyback(world: &SharedWorld) -> BuybackComponent {
    BuybackComponent::new(
        Box::new(MockYieldProtocol(world.clone())),
        Box::new(MockSwapper(world.clone())),
        Box::new(MockRewardToken(world.clone())),
    )
}

pub fn pool_config(token: &str, weight: &str, oracle: Option<&str>) -> PoolConfig {
    PoolConfig {
        deposit_token: to_valid_account_id(token),
        symbol: token.trim_end_matches(".near").to_string(),
        decimals: 18,
        weight: weight.parse().unwrap(),
        oracle: oracle.map(to_valid_account_id),
        external_yield: None,
    }
}

pub fn ib_busd_ref() -> ExternalYieldRef {
    ExternalYieldRef {
        vault: IB_BUSD_VAULT.to_string(),
        pid: 3,
    }
}

//! MARMOT farm contract
//!
//! Hosts the MARMOT reward token together with the multi-pool reward ledger. Collateral tokens
//! are received via NEP-141 `ft_transfer_call` into per account wallets, from where they are staked
//! into pools. Vault operators deliver yield the same way, which is harvested and used to buy back
//! and burn MARMOT through whitelisted swappers.

mod buyback;
mod components;
mod contract_ownership;
mod domain;
mod fungible_token;
mod interface;
mod pause_gate;
mod price_feed;
mod reward_pool;
mod swap_desk;
mod transfer_receiver;
mod wallet;

pub use components::*;
pub use domain::*;
pub use interface::*;

use marmot_smart_contract::components::{
    contract_ownership::ContractOwnershipComponent, pause_gate::PauseGateComponent,
};
use marmot_smart_fungible_token::{
    components::fungible_token::{Config as FungibleTokenConfig, FungibleTokenComponent},
    Metadata,
};
use marmot_smart_near::component::Deploy;
use marmot_smart_reward_pool::components::{
    buyback::BuybackComponent,
    reward_pool::{Config as RewardPoolConfig, RewardPoolComponent},
};
use marmot_smart_reward_pool::{EmissionSchedule, Treasury};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    json_types::ValidAccountId,
    near_bindgen,
    serde::{Deserialize, Serialize},
    PanicOnDefault,
};
use std::convert::TryFrom;

near_sdk::setup_alloc!();

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct FarmConfig {
    pub schedule: EmissionSchedule,
    /// defaults to no treasury cut
    pub treasury: Option<Treasury>,
    /// token that vault operators pay yield in
    pub yield_token: ValidAccountId,
    /// defaults to [`Metadata::marmot`]
    pub metadata: Option<Metadata>,
    /// initial buyback swapper whitelist
    pub swappers: Option<Vec<ValidAccountId>>,
}

#[near_bindgen]
impl Contract {
    /// If owner is not specified, then predecessor Account ID will be set as the contract owner.
    /// The farm starts unpaused.
    #[init]
    pub fn deploy(owner: Option<ValidAccountId>, config: FarmConfig) -> Self {
        let owner = owner.unwrap_or_else(|| {
            ValidAccountId::try_from(env::predecessor_account_id())
                .unwrap_or_else(|err| env::panic(err.to_string().as_bytes()))
        });
        ContractOwnershipComponent::deploy(owner);
        PauseGateComponent::deploy(false);

        FungibleTokenComponent::deploy(FungibleTokenConfig {
            metadata: config.metadata.unwrap_or_else(Metadata::marmot),
        });

        RewardPoolComponent::deploy(RewardPoolConfig {
            schedule: config.schedule,
            treasury: config.treasury,
        });
        BuybackComponent::deploy(config.swappers.unwrap_or_default());
        YieldInboxComponent::deploy(config.yield_token);

        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marmot_smart_contract::PauseGate;
    use marmot_smart_fungible_token::{
        FungibleToken, TokenService, TransferReceiver,
    };
    use marmot_smart_near::domain::TokenAmount;
    use marmot_smart_near::near_sdk::PromiseOrValue;
    use marmot_smart_near_test::*;
    use marmot_smart_reward_pool::{
        Buyback, ExternalYieldRef, HarvestedPool, PoolConfig, PoolRegistry, RewardPool,
    };

    const OWNER: &str = "owner.near";
    const ALICE: &str = "alice.near";
    const BUSD: &str = "busd.near";
    const BTC: &str = "btc.near";
    const BTC_FEED: &str = "btc-feed.near";
    const REPORTER: &str = "reporter.near";
    const ALPACA: &str = "alpaca.near";
    const IB_BUSD_VAULT: &str = "ibbusd.near";
    const SWAPPER: &str = "swapper.near";

    fn deploy() -> Contract {
        env::take_blockchain_interface();
        call_at(OWNER, 100);
        Contract::deploy(
            None,
            FarmConfig {
                schedule: EmissionSchedule {
                    genesis: 100.into(),
                    phase_boundary: 1000.into(),
                    rate_phase1: 1000.into(),
                    rate_phase2: 100.into(),
                },
                treasury: None,
                yield_token: to_valid_account_id(ALPACA),
                metadata: None,
                swappers: Some(vec![to_valid_account_id(SWAPPER)]),
            },
        )
    }

    fn add_pool(
        contract: &mut Contract,
        token: &str,
        oracle: Option<&str>,
        external_yield: Option<ExternalYieldRef>,
    ) {
        call_at(OWNER, 100);
        contract.ops_pool_add(PoolConfig {
            deposit_token: to_valid_account_id(token),
            symbol: token.to_uppercase(),
            decimals: 18,
            weight: "1".parse().unwrap(),
            oracle: oracle.map(to_valid_account_id),
            external_yield,
        });
    }

    /// simulates `ft_transfer_call` on the token contract
    fn transfer_call(
        contract: &mut Contract,
        token: &str,
        sender_id: &str,
        amount: u128,
        msg: &str,
        block: u64,
    ) {
        call_at(token, block);
        match contract.ft_on_transfer(
            to_valid_account_id(sender_id),
            amount.into(),
            msg.to_string(),
        ) {
            PromiseOrValue::Value(unused) => assert_eq!(unused, TokenAmount::ZERO),
            PromiseOrValue::Promise(_) => panic!("expected value"),
        }
    }

    fn ib_busd() -> ExternalYieldRef {
        ExternalYieldRef {
            vault: IB_BUSD_VAULT.to_string(),
            pid: 3,
        }
    }

    #[test]
    fn deploy_farm() {
        let contract = deploy();
        assert_eq!(contract.ft_total_supply(), TokenAmount::ZERO);
        assert!(!contract.ops_paused());
        assert_eq!(contract.ops_pool_count(), 0);
        assert_eq!(contract.ops_buyback_swappers(), vec![SWAPPER.to_string()]);
        assert_eq!(YieldInboxComponent::new().yield_token(), ALPACA);
    }

    #[test]
    fn stake_claim_and_withdraw() {
        // Arrange
        let mut contract = deploy();
        add_pool(&mut contract, BUSD, None, None);

        // Act
        transfer_call(&mut contract, BUSD, ALICE, 100, r#"{"stake":{"pool":0}}"#, 100);

        // Assert
        let position = contract
            .ops_pool_position(0, to_valid_account_id(ALICE))
            .unwrap();
        assert_eq!(position.amount, 100.into());
        assert_eq!(
            WalletComponent::balance(BUSD, &env::current_account_id()),
            100.into()
        );
        assert_eq!(WalletComponent::balance(BUSD, ALICE), TokenAmount::ZERO);

        call_at(ALICE, 110);
        assert_eq!(
            contract.ops_pool_pending(0, to_valid_account_id(ALICE)),
            10_000.into()
        );
        assert_eq!(contract.ops_pool_claim(0), 10_000.into());
        assert_eq!(
            contract.ft_balance_of(to_valid_account_id(ALICE)),
            10_000.into()
        );
        assert_eq!(contract.ft_total_supply(), 10_000.into());

        let position = contract.ops_pool_withdraw(0, 100.into());
        assert_eq!(position.amount, TokenAmount::ZERO);
        assert_eq!(WalletComponent::balance(BUSD, ALICE), 100.into());

        contract.ops_wallet_withdraw(to_valid_account_id(BUSD), 100.into());
        assert_eq!(WalletComponent::balance(BUSD, ALICE), TokenAmount::ZERO);
        let calls = function_calls_to(BUSD);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method_name, "ft_transfer");
        assert_eq!(calls[0].deposit, 1);
    }

    #[test]
    fn deposit_into_wallet_then_stake() {
        let mut contract = deploy();
        add_pool(&mut contract, BUSD, None, None);

        transfer_call(&mut contract, BUSD, ALICE, 100, r#""deposit""#, 100);
        assert_eq!(
            contract.ops_wallet_balance(to_valid_account_id(BUSD), to_valid_account_id(ALICE)),
            100.into()
        );

        call_at(ALICE, 100);
        contract.ops_pool_deposit(0, 60.into());
        assert_eq!(WalletComponent::balance(BUSD, ALICE), 40.into());
        assert_eq!(
            contract
                .ops_pool_position(0, to_valid_account_id(ALICE))
                .unwrap()
                .amount,
            60.into()
        );
    }

    #[test]
    #[should_panic(expected = "[ERR] [BAD_REQUEST]")]
    fn stake_with_another_token() {
        let mut contract = deploy();
        add_pool(&mut contract, BUSD, None, None);
        transfer_call(&mut contract, BTC, ALICE, 100, r#"{"stake":{"pool":0}}"#, 100);
    }

    #[test]
    #[should_panic(expected = "[ERR] [BAD_REQUEST]")]
    fn invalid_transfer_message() {
        let mut contract = deploy();
        transfer_call(&mut contract, BUSD, ALICE, 100, "stake", 100);
    }

    #[test]
    #[should_panic(expected = "[ERR] [STALE_OR_UNAVAILABLE]")]
    fn stale_price_feed_blocks_settlement() {
        // Arrange
        let mut contract = deploy();
        add_pool(&mut contract, BTC, Some(BTC_FEED), None);
        call_at(OWNER, 100);
        contract.ops_price_feed_register(
            to_valid_account_id(BTC_FEED),
            to_valid_account_id(REPORTER),
            10,
        );
        call_at(REPORTER, 100);
        contract.ops_price_feed_push(to_valid_account_id(BTC_FEED), "40000".parse().unwrap());
        transfer_call(&mut contract, BTC, ALICE, 100, r#"{"stake":{"pool":0}}"#, 100);

        call_at(ALICE, 110);
        assert_eq!(
            contract.ops_pool_pending(0, to_valid_account_id(ALICE)),
            10_000.into()
        );

        // Act
        call_at(ALICE, 120);
        contract.ops_pool_claim(0);
    }

    #[test]
    fn harvest_buy_back_and_burn() {
        // Arrange
        let mut contract = deploy();
        add_pool(&mut contract, BUSD, None, Some(ib_busd()));
        transfer_call(&mut contract, BUSD, ALICE, 100, r#"{"stake":{"pool":0}}"#, 100);
        assert_eq!(WalletComponent::balance(BUSD, IB_BUSD_VAULT), 100.into());

        // the vault operator pays out the yield
        transfer_call(
            &mut contract,
            ALPACA,
            IB_BUSD_VAULT,
            40,
            r#"{"harvest":{"vault":"ibbusd.near","pid":3}}"#,
            105,
        );

        // the swapper supplies MARMOT liquidity
        call_at(SWAPPER, 105);
        FungibleTokenComponent.ft_mint(SWAPPER, 1000.into());
        contract.ops_swap_desk_post_rate(to_valid_account_id(ALPACA), Some("2".parse().unwrap()));

        // Act
        call_at(ALICE, 106);
        let report = contract.ops_buyback_harvest_all();
        let receipt = contract.ops_buyback_and_burn(
            to_valid_account_id(ALPACA),
            to_valid_account_id(SWAPPER),
            80.into(),
        );

        // Assert
        assert_eq!(
            report.harvested,
            vec![HarvestedPool {
                pool: 0,
                yield_token: ALPACA.to_string(),
                amount: 40.into(),
            }]
        );
        assert!(report.failed.is_empty());
        assert_eq!(receipt.amount_in, 40.into());
        assert_eq!(receipt.burned, 80.into());
        assert_eq!(
            contract.ops_buyback_yield_balance(to_valid_account_id(ALPACA)),
            TokenAmount::ZERO
        );
        assert_eq!(contract.ft_total_supply(), 920.into());
        assert_eq!(
            contract.ft_balance_of(to_valid_account_id(SWAPPER)),
            920.into()
        );
        assert_eq!(WalletComponent::balance(ALPACA, SWAPPER), 40.into());

        // staked collateral was never touched
        assert_eq!(WalletComponent::balance(BUSD, IB_BUSD_VAULT), 100.into());
    }

    #[test]
    #[should_panic(expected = "[ERR] [PAUSED]")]
    fn paused_farm_rejects_stakes() {
        let mut contract = deploy();
        add_pool(&mut contract, BUSD, None, None);
        call_at(OWNER, 100);
        assert!(contract.ops_pause_toggle());
        transfer_call(&mut contract, BUSD, ALICE, 100, r#"{"stake":{"pool":0}}"#, 100);
    }
}

use crate::*;
use marmot_smart_near::asserts::ERR_CODE_BAD_REQUEST;
use marmot_smart_near::component::{Component, ComponentState, Deploy};
use marmot_smart_near::data::Object;
use marmot_smart_near::domain::TokenAmount;
use marmot_smart_near::near_sdk::{env, json_types::ValidAccountId, AccountId};
use marmot_smart_near::{ErrMsg, ErrCode, ErrorConst, Hash, Level, LogEvent};
use marmot_smart_reward_pool::{
    ExternalYieldRef, HarvestedYield, TokenCustody, YieldProtocol, ERR_CODE_EXTERNAL_PROTOCOL,
};

/// Bridges pool collateral to external vault operators.
///
/// - collateral forwarded to a vault is moved from the ledger custody wallet into the vault
///   operator's wallet, from where the operator deploys it
/// - the operator must return the collateral to its wallet before it can be withdrawn
/// - the operator delivers yield via `ft_transfer_call` with a `harvest` message, where it accrues
///   per vault pool until it is harvested
pub struct YieldInboxComponent {
    state: ComponentState<AccountId>,
}

impl Component for YieldInboxComponent {
    /// yield token paid out by the vaults
    type State = AccountId;

    const STATE_KEY: u128 = 1953936561237719282046337214404717539;
}

impl Deploy for YieldInboxComponent {
    type Config = ValidAccountId;

    fn deploy(yield_token: Self::Config) {
        Self::new_state(yield_token.into()).save();
    }
}

pub const LOG_EVENT_YIELD_DELIVERED: LogEvent = LogEvent(Level::INFO, "YIELD_DELIVERED");

pub const ERR_YIELD_INBOX_NOT_DEPLOYED: ErrorConst = ErrorConst(
    ErrCode("YIELD_INBOX_NOT_DEPLOYED"),
    "yield inbox component state is not deployed",
);

const ACCRUED_YIELD_KEY: u128 = 1953936620590330318599616306838411337;

type AccruedYield = Object<(u128, Hash), u128>;

fn accrued_yield_key(yield_ref: &ExternalYieldRef) -> (u128, Hash) {
    (
        ACCRUED_YIELD_KEY,
        (yield_ref.vault.as_str(), yield_ref.pid as u128).into(),
    )
}

impl YieldInboxComponent {
    pub fn new() -> Self {
        Self {
            state: Self::deployed_state(ERR_YIELD_INBOX_NOT_DEPLOYED),
        }
    }

    pub fn yield_token(&self) -> &str {
        &self.state
    }

    pub fn accrued_yield(yield_ref: &ExternalYieldRef) -> TokenAmount {
        AccruedYield::load(&accrued_yield_key(yield_ref))
            .map_or(TokenAmount::ZERO, |amount| (*amount).into())
    }

    /// Records yield received from the vault operator.
    ///
    /// ## Panics
    /// `[ERR] [BAD_REQUEST]` if the token is not the yield token, or if the sender is not the vault
    pub fn deliver(
        &mut self,
        token: &str,
        sender_id: &str,
        yield_ref: &ExternalYieldRef,
        amount: TokenAmount,
    ) {
        ERR_CODE_BAD_REQUEST.assert(
            || token == self.yield_token(),
            || format!("vaults pay yield in {}", self.yield_token()),
        );
        ERR_CODE_BAD_REQUEST.assert(
            || sender_id == yield_ref.vault,
            || "yield must be delivered by the vault operator",
        );

        WalletComponent::credit(token, &env::current_account_id(), amount);
        let accrued = Self::accrued_yield(yield_ref) + amount;
        AccruedYield::new(accrued_yield_key(yield_ref), *accrued).save();
        LOG_EVENT_YIELD_DELIVERED.log(format!(
            "vault={} token={} amount={}",
            yield_ref, token, amount
        ));
    }
}

impl YieldProtocol for YieldInboxComponent {
    fn deposit_collateral(
        &mut self,
        yield_ref: &ExternalYieldRef,
        token: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg> {
        WalletComponent
            .transfer(token, &env::current_account_id(), &yield_ref.vault, amount)
            .map_err(|err| external_protocol_error(yield_ref, err))
    }

    fn withdraw_collateral(
        &mut self,
        yield_ref: &ExternalYieldRef,
        token: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg> {
        WalletComponent
            .transfer(token, &yield_ref.vault, &env::current_account_id(), amount)
            .map_err(|err| external_protocol_error(yield_ref, err))
    }

    fn harvest(&mut self, yield_ref: &ExternalYieldRef) -> Result<HarvestedYield, ErrMsg> {
        let amount = AccruedYield::take(&accrued_yield_key(yield_ref)).unwrap_or(0);
        Ok(HarvestedYield {
            token: self.yield_token().to_string(),
            amount: amount.into(),
        })
    }
}

fn external_protocol_error(yield_ref: &ExternalYieldRef, err: ErrMsg) -> ErrMsg {
    ERR_CODE_EXTERNAL_PROTOCOL.err(format!("vault={} {}", yield_ref, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marmot_smart_near_test::*;

    const ALPACA: &str = "alpaca.near";
    const BUSD: &str = "busd.near";

    fn ib_busd() -> ExternalYieldRef {
        ExternalYieldRef {
            vault: "ibbusd.near".to_string(),
            pid: 3,
        }
    }

    fn setup() -> YieldInboxComponent {
        testing_env!(new_context("ibbusd.near"));
        YieldInboxComponent::deploy(to_valid_account_id(ALPACA));
        YieldInboxComponent::new()
    }

    #[test]
    fn collateral_round_trip() {
        let mut inbox = setup();
        let ledger = env::current_account_id();
        WalletComponent::credit(BUSD, &ledger, 100.into());

        inbox.deposit_collateral(&ib_busd(), BUSD, 100.into()).unwrap();
        assert_eq!(WalletComponent::balance(BUSD, "ibbusd.near"), 100.into());
        assert_eq!(WalletComponent::balance(BUSD, &ledger), TokenAmount::ZERO);

        inbox.withdraw_collateral(&ib_busd(), BUSD, 60.into()).unwrap();
        assert_eq!(WalletComponent::balance(BUSD, &ledger), 60.into());

        // the operator has not returned the collateral
        WalletComponent::debit(BUSD, "ibbusd.near", 40.into()).unwrap();
        let err = inbox
            .withdraw_collateral(&ib_busd(), BUSD, 40.into())
            .unwrap_err();
        assert!(err.is(ERR_CODE_EXTERNAL_PROTOCOL));
    }

    #[test]
    fn deliver_and_harvest() {
        let mut inbox = setup();
        inbox.deliver(ALPACA, "ibbusd.near", &ib_busd(), 30.into());
        inbox.deliver(ALPACA, "ibbusd.near", &ib_busd(), 20.into());
        assert_eq!(YieldInboxComponent::accrued_yield(&ib_busd()), 50.into());
        assert_eq!(
            WalletComponent::balance(ALPACA, &env::current_account_id()),
            50.into()
        );

        let harvested = inbox.harvest(&ib_busd()).unwrap();
        assert_eq!(
            harvested,
            HarvestedYield {
                token: ALPACA.to_string(),
                amount: 50.into()
            }
        );
        assert_eq!(inbox.harvest(&ib_busd()).unwrap().amount, TokenAmount::ZERO);
    }

    #[test]
    #[should_panic(expected = "[ERR] [BAD_REQUEST]")]
    fn deliver_wrong_token() {
        let mut inbox = setup();
        inbox.deliver(BUSD, "ibbusd.near", &ib_busd(), 30.into());
    }

    #[test]
    #[should_panic(expected = "[ERR] [BAD_REQUEST]")]
    fn deliver_from_another_account() {
        let mut inbox = setup();
        inbox.deliver(ALPACA, "alice.near", &ib_busd(), 30.into());
    }
}

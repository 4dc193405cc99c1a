use crate::{
    FungibleToken, FungibleTokenMetadataProvider, Metadata, TokenService, LOG_EVENT_FT_BURN,
    LOG_EVENT_FT_MINT, LOG_EVENT_FT_TRANSFER,
};
use marmot_smart_near::asserts::{
    assert_yocto_near_attached, ERR_CODE_BAD_REQUEST, ERR_INSUFFICIENT_FUNDS,
};
use marmot_smart_near::component::Deploy;
use marmot_smart_near::data::Object;
use marmot_smart_near::domain::{AccountIdHash, TokenAmount};
use marmot_smart_near::near_sdk::{
    env,
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
};
use marmot_smart_near::ErrorConst;

/// Token ledger where balances are stored per hashed account ID
pub struct FungibleTokenComponent;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct Config {
    pub metadata: Metadata,
}

pub const ERR_METADATA_NOT_FOUND: ErrorConst = ErrorConst(
    marmot_smart_near::ErrCode("METADATA_NOT_FOUND"),
    "token metadata has not been deployed",
);

const TOKEN_SUPPLY_KEY: u128 = 1953830723745925743018307013370321490;
type TokenSupply = Object<u128, u128>;

const METADATA_KEY: u128 = 1953827270399390220126384465824835887;
type MetadataObject = Object<u128, Metadata>;

const BALANCE_KEY: u128 = 1953914873110349722186331962218430297;
type Balance = Object<(u128, AccountIdHash), u128>;

impl Deploy for FungibleTokenComponent {
    type Config = Config;

    fn deploy(config: Self::Config) {
        config.metadata.assert_valid();
        MetadataObject::new(METADATA_KEY, config.metadata).save();
        TokenSupply::new(TOKEN_SUPPLY_KEY, 0).save();
    }
}

impl FungibleTokenComponent {
    pub fn balance(account_id: &str) -> TokenAmount {
        Balance::load(&balance_key(account_id)).map_or(TokenAmount::ZERO, |balance| {
            (*balance).into()
        })
    }

    fn set_balance(account_id: &str, amount: u128) {
        Balance::new(balance_key(account_id), amount).save_unless(|amount| *amount == 0);
    }

    fn debit(account_id: &str, amount: TokenAmount) {
        let balance = Self::balance(account_id);
        ERR_INSUFFICIENT_FUNDS.assert(|| balance >= amount);
        Self::set_balance(account_id, *balance - *amount);
    }

    fn credit(account_id: &str, amount: TokenAmount) {
        let balance = Self::balance(account_id);
        Self::set_balance(account_id, *balance + *amount);
    }

    fn update_supply<F>(f: F)
    where
        F: FnOnce(u128) -> u128,
    {
        let mut supply = TokenSupply::load(&TOKEN_SUPPLY_KEY)
            .unwrap_or_else(|| TokenSupply::new(TOKEN_SUPPLY_KEY, 0));
        *supply = f(*supply);
        supply.save();
    }
}

fn balance_key(account_id: &str) -> (u128, AccountIdHash) {
    (BALANCE_KEY, account_id.into())
}

fn assert_positive_amount(amount: TokenAmount) {
    ERR_CODE_BAD_REQUEST.assert(|| !amount.is_zero(), || "amount must not be zero");
}

impl FungibleToken for FungibleTokenComponent {
    fn ft_transfer(
        &mut self,
        receiver_id: ValidAccountId,
        amount: TokenAmount,
        memo: Option<String>,
    ) {
        assert_yocto_near_attached();
        assert_positive_amount(amount);
        let sender_id = env::predecessor_account_id();
        ERR_CODE_BAD_REQUEST.assert(
            || &sender_id != receiver_id.as_ref(),
            || "sender and receiver cannot be the same",
        );

        self.ft_move(&sender_id, receiver_id.as_ref(), amount);
        if let Some(memo) = memo {
            LOG_EVENT_FT_TRANSFER.log(format!("memo={}", memo));
        }
    }

    fn ft_total_supply(&self) -> TokenAmount {
        TokenSupply::load(&TOKEN_SUPPLY_KEY).map_or(TokenAmount::ZERO, |supply| (*supply).into())
    }

    fn ft_balance_of(&self, account_id: ValidAccountId) -> TokenAmount {
        Self::balance(account_id.as_ref())
    }
}

impl TokenService for FungibleTokenComponent {
    fn ft_mint(&mut self, account_id: &str, amount: TokenAmount) {
        assert_positive_amount(amount);
        Self::credit(account_id, amount);
        Self::update_supply(|supply| supply + *amount);
        LOG_EVENT_FT_MINT.log(format!("account={} amount={}", account_id, amount));
    }

    fn ft_burn(&mut self, account_id: &str, amount: TokenAmount) {
        assert_positive_amount(amount);
        Self::debit(account_id, amount);
        Self::update_supply(|supply| supply - *amount);
        LOG_EVENT_FT_BURN.log(format!("account={} amount={}", account_id, amount));
    }

    fn ft_move(&mut self, sender_id: &str, receiver_id: &str, amount: TokenAmount) {
        Self::debit(sender_id, amount);
        Self::credit(receiver_id, amount);
        LOG_EVENT_FT_TRANSFER.log(format!(
            "sender={} receiver={} amount={}",
            sender_id, receiver_id, amount
        ));
    }
}

impl FungibleTokenMetadataProvider for FungibleTokenComponent {
    fn ft_metadata(&self) -> Metadata {
        match MetadataObject::load(&METADATA_KEY) {
            Some(metadata) => metadata.into_value(),
            None => ERR_METADATA_NOT_FOUND.panic(),
        }
    }
}

//! Capabilities the reward ledger depends on.
//!
//! Collaborators either complete synchronously or report an [`ErrMsg`]. The ledger decides whether the
//! error is fatal, in which case the error is rethrown as a panic with its original code and the
//! whole call is rolled back.

use crate::ExternalYieldRef;
use marmot_smart_near::domain::{Decimal, TokenAmount};
use marmot_smart_near::near_sdk::AccountId;
use marmot_smart_near::{ErrMsg, ErrCode};

/// Oracle price is missing, zero, or too old
pub const ERR_CODE_STALE_OR_UNAVAILABLE: ErrCode = ErrCode("STALE_OR_UNAVAILABLE");

/// The external yield protocol rejected or failed the request
pub const ERR_CODE_EXTERNAL_PROTOCOL: ErrCode = ErrCode("EXTERNAL_PROTOCOL_ERROR");

/// The swap would return less than the requested minimum
pub const ERR_CODE_SLIPPAGE_EXCEEDED: ErrCode = ErrCode("SLIPPAGE_EXCEEDED");

/// No swap route is available for the requested pair
pub const ERR_CODE_ROUTE_UNAVAILABLE: ErrCode = ErrCode("ROUTE_UNAVAILABLE");

pub trait PriceOracle {
    /// Returns the price of one whole collateral token, with 18 decimals
    ///
    /// Fails with [`ERR_CODE_STALE_OR_UNAVAILABLE`]
    fn price(&self, oracle: &str) -> Result<Decimal, ErrMsg>;
}

/// Auto-compounding lending vault that pool collateral can be deployed into
pub trait YieldProtocol {
    /// Moves `amount` of `token` from ledger custody into the vault
    fn deposit_collateral(
        &mut self,
        yield_ref: &ExternalYieldRef,
        token: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg>;

    /// Returns `amount` of `token` from the vault back into ledger custody
    fn withdraw_collateral(
        &mut self,
        yield_ref: &ExternalYieldRef,
        token: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg>;

    /// Collects the yield accrued for the reference into ledger custody
    fn harvest(&mut self, yield_ref: &ExternalYieldRef) -> Result<HarvestedYield, ErrMsg>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HarvestedYield {
    pub token: AccountId,
    pub amount: TokenAmount,
}

/// Converts harvested yield into reward tokens
pub trait Swapper {
    /// Amount of reward tokens that `amount_in` of `token_in` would buy
    ///
    /// Fails with [`ERR_CODE_ROUTE_UNAVAILABLE`]
    fn quote(&self, swapper: &str, token_in: &str, amount_in: TokenAmount)
        -> Result<TokenAmount, ErrMsg>;

    /// Sells `amount_in` of `token_in` held in ledger custody and delivers the reward tokens to the
    /// ledger account. Nothing moves when the swap fails.
    ///
    /// Fails with [`ERR_CODE_SLIPPAGE_EXCEEDED`] or [`ERR_CODE_ROUTE_UNAVAILABLE`]
    fn swap(
        &mut self,
        swapper: &str,
        token_in: &str,
        amount_in: TokenAmount,
        min_out: TokenAmount,
    ) -> Result<TokenAmount, ErrMsg>;
}

/// Mint and burn authority over the reward token
pub trait RewardToken {
    fn mint(&mut self, account_id: &str, amount: TokenAmount);

    fn burn(&mut self, account_id: &str, amount: TokenAmount);
}

/// Asset transfer primitive for collateral tokens
pub trait TokenCustody {
    fn balance(&self, token: &str, account_id: &str) -> TokenAmount;

    fn transfer(
        &mut self,
        token: &str,
        sender_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), ErrMsg>;
}

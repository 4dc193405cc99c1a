use crate::*;
use marmot_smart_fungible_token::{components::fungible_token::FungibleTokenComponent, TokenService};
use marmot_smart_near::asserts::ERR_INVALID;
use marmot_smart_near::data::Object;
use marmot_smart_near::domain::{Decimal, TokenAmount};
use marmot_smart_near::near_sdk::{env, json_types::ValidAccountId};
use marmot_smart_near::{ErrMsg, Hash};
use marmot_smart_reward_pool::{
    Swapper, TokenCustody, ERR_CODE_ROUTE_UNAVAILABLE, ERR_CODE_SLIPPAGE_EXCEEDED,
};

/// Swaps harvested yield held in ledger custody for MARMOT supplied by swappers
pub struct SwapDeskComponent;

const SWAP_RATE_KEY: u128 = 1953936702512987226733718004547427374;

type SwapRate = Object<(u128, Hash), Decimal>;

fn swap_rate_key(swapper: &str, token_in: &str) -> (u128, Hash) {
    (SWAP_RATE_KEY, (swapper, token_in).into())
}

impl SwapDeskComponent {
    pub fn rate(swapper: &str, token_in: &str) -> Option<Decimal> {
        SwapRate::load(&swap_rate_key(swapper, token_in)).map(SwapRate::into_value)
    }
}

impl Swapper for SwapDeskComponent {
    fn quote(
        &self,
        swapper: &str,
        token_in: &str,
        amount_in: TokenAmount,
    ) -> Result<TokenAmount, ErrMsg> {
        let rate = Self::rate(swapper, token_in).ok_or_else(|| {
            ERR_CODE_ROUTE_UNAVAILABLE.err(format!("{} has no rate for {}", swapper, token_in))
        })?;
        let amount_out = rate.of(amount_in);
        let liquidity = FungibleTokenComponent::balance(swapper);
        if liquidity < amount_out {
            return Err(ERR_CODE_ROUTE_UNAVAILABLE.err(format!(
                "{} has insufficient liquidity: {} < {}",
                swapper, liquidity, amount_out
            )));
        }
        Ok(amount_out)
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
            return Err(ERR_CODE_SLIPPAGE_EXCEEDED.err(format!("{} < {}", amount_out, min_out)));
        }

        let ledger = env::current_account_id();
        WalletComponent.transfer(token_in, &ledger, swapper, amount_in)?;
        if !amount_out.is_zero() {
            FungibleTokenComponent.ft_move(swapper, &ledger, amount_out);
        }
        LOG_EVENT_SWAP.log(format!(
            "swapper={} token_in={} amount_in={} amount_out={}",
            swapper, token_in, amount_in, amount_out
        ));
        Ok(amount_out)
    }
}

impl SwapDesk for SwapDeskComponent {
    fn ops_swap_desk_post_rate(&mut self, token_in: ValidAccountId, rate: Option<Decimal>) {
        let swapper = env::predecessor_account_id();
        let key = swap_rate_key(&swapper, token_in.as_ref());
        match rate {
            Some(rate) => {
                ERR_INVALID.assert(|| !rate.is_zero(), || "rate must not be zero");
                SwapRate::new(key, rate).save();
                LOG_EVENT_SWAP_RATE_POSTED.log(format!(
                    "swapper={} token_in={} rate={}",
                    swapper,
                    token_in.as_ref(),
                    rate
                ));
            }
            None => {
                if let Some(rate) = SwapRate::load(&key) {
                    rate.delete();
                    LOG_EVENT_SWAP_RATE_POSTED.log(format!(
                        "swapper={} token_in={} rate=none",
                        swapper,
                        token_in.as_ref()
                    ));
                }
            }
        }
    }

    fn ops_swap_desk_rate(
        &self,
        swapper: ValidAccountId,
        token_in: ValidAccountId,
    ) -> Option<Decimal> {
        Self::rate(swapper.as_ref(), token_in.as_ref())
    }
}

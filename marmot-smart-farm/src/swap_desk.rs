use crate::*;
use marmot_smart_near::domain::Decimal;

#[near_bindgen]
impl SwapDesk for Contract {
    fn ops_swap_desk_post_rate(&mut self, token_in: ValidAccountId, rate: Option<Decimal>) {
        SwapDeskComponent.ops_swap_desk_post_rate(token_in, rate)
    }

    fn ops_swap_desk_rate(
        &self,
        swapper: ValidAccountId,
        token_in: ValidAccountId,
    ) -> Option<Decimal> {
        SwapDeskComponent.ops_swap_desk_rate(swapper, token_in)
    }
}

use crate::*;
use marmot_smart_near::domain::Decimal;

#[near_bindgen]
impl PriceFeed for Contract {
    fn ops_price_feed_register(
        &mut self,
        oracle: ValidAccountId,
        reporter: ValidAccountId,
        max_age: u64,
    ) {
        PriceFeedComponent.ops_price_feed_register(oracle, reporter, max_age)
    }

    fn ops_price_feed_push(&mut self, oracle: ValidAccountId, price: Decimal) {
        PriceFeedComponent.ops_price_feed_push(oracle, price)
    }

    fn ops_price_feed(&self, oracle: ValidAccountId) -> Option<Feed> {
        PriceFeedComponent.ops_price_feed(oracle)
    }
}

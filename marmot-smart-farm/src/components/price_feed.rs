use crate::*;
use marmot_smart_contract::ContractOwner;
use marmot_smart_near::asserts::ERR_INVALID;
use marmot_smart_near::data::Object;
use marmot_smart_near::domain::{BlockHeight, Decimal};
use marmot_smart_near::near_sdk::{env, json_types::ValidAccountId, AccountId};
use marmot_smart_near::{ErrMsg, Hash};
use marmot_smart_reward_pool::{PriceOracle, ERR_CODE_STALE_OR_UNAVAILABLE};

/// Push oracle: prices are pushed by each feed's reporter and expire after the feed's max age
pub struct PriceFeedComponent;

const FEED_KEY: u128 = 1953936405722064338961315187913392846;

type FeedObject = Object<(u128, Hash), Feed>;

impl PriceFeedComponent {
    pub fn feed(oracle: &str) -> Option<Feed> {
        FeedObject::load(&(FEED_KEY, oracle.into())).map(FeedObject::into_value)
    }

    fn save_feed(oracle: &str, feed: Feed) {
        FeedObject::new((FEED_KEY, oracle.into()), feed).save();
    }
}

impl PriceOracle for PriceFeedComponent {
    fn price(&self, oracle: &str) -> Result<Decimal, ErrMsg> {
        Self::feed(oracle)
            .and_then(|feed| feed.fresh_price(BlockHeight::from_env()))
            .ok_or_else(|| {
                ERR_CODE_STALE_OR_UNAVAILABLE
                    .err(format!("{} price is stale or unavailable", oracle))
            })
    }
}

impl PriceFeed for PriceFeedComponent {
    fn ops_price_feed_register(
        &mut self,
        oracle: ValidAccountId,
        reporter: ValidAccountId,
        max_age: u64,
    ) {
        ContractOwner::assert_owner();
        let reporter: AccountId = reporter.into();
        let feed = match Self::feed(oracle.as_ref()) {
            Some(feed) if feed.reporter == reporter => Feed { max_age, ..feed },
            // a price pushed by the previous reporter is discarded
            _ => Feed {
                reporter,
                max_age,
                price: None,
                updated_at: BlockHeight::from_env(),
            },
        };
        LOG_EVENT_PRICE_FEED_REGISTERED.log(format!(
            "oracle={} reporter={} max_age={}",
            oracle.as_ref(),
            feed.reporter,
            max_age
        ));
        Self::save_feed(oracle.as_ref(), feed);
    }

    fn ops_price_feed_push(&mut self, oracle: ValidAccountId, price: Decimal) {
        let mut feed = Self::feed(oracle.as_ref())
            .unwrap_or_else(|| ERR_PRICE_FEED_NOT_REGISTERED.panic());
        ERR_REPORTER_ACCESS_REQUIRED.assert(|| feed.reporter == env::predecessor_account_id());
        ERR_INVALID.assert(|| !price.is_zero(), || "price must not be zero");

        feed.price = Some(price);
        feed.updated_at = BlockHeight::from_env();
        LOG_EVENT_PRICE_PUSHED.log(format!("oracle={} price={}", oracle.as_ref(), price));
        Self::save_feed(oracle.as_ref(), feed);
    }

    fn ops_price_feed(&self, oracle: ValidAccountId) -> Option<Feed> {
        Self::feed(oracle.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marmot_smart_contract::components::contract_ownership::ContractOwnershipComponent;
    use marmot_smart_near::component::Deploy;
    use marmot_smart_near_test::*;

    const OWNER: &str = "owner.near";
    const REPORTER: &str = "reporter.near";
    const BTC_FEED: &str = "btc-feed.near";

    fn register() {
        call_at(OWNER, 100);
        ContractOwnershipComponent::deploy(to_valid_account_id(OWNER));
        PriceFeedComponent.ops_price_feed_register(
            to_valid_account_id(BTC_FEED),
            to_valid_account_id(REPORTER),
            10,
        );
    }

    #[test]
    fn push_and_expire() {
        register();
        let err = PriceFeedComponent.price(BTC_FEED).unwrap_err();
        assert!(err.is(ERR_CODE_STALE_OR_UNAVAILABLE));

        call_at(REPORTER, 105);
        let price: Decimal = "40000.25".parse().unwrap();
        PriceFeedComponent.ops_price_feed_push(to_valid_account_id(BTC_FEED), price);
        assert_eq!(PriceFeedComponent.price(BTC_FEED).unwrap(), price);

        call_at(REPORTER, 115);
        assert_eq!(PriceFeedComponent.price(BTC_FEED).unwrap(), price);

        call_at(REPORTER, 116);
        assert!(PriceFeedComponent.price(BTC_FEED).is_err());

        assert!(PriceFeedComponent.price("eth-feed.near").is_err());
    }

    #[test]
    fn reregistering_the_reporter_discards_the_price() {
        register();
        call_at(REPORTER, 105);
        PriceFeedComponent.ops_price_feed_push(to_valid_account_id(BTC_FEED), Decimal::ONE);

        call_at(OWNER, 106);
        PriceFeedComponent.ops_price_feed_register(
            to_valid_account_id(BTC_FEED),
            to_valid_account_id(REPORTER),
            20,
        );
        let feed = PriceFeedComponent
            .ops_price_feed(to_valid_account_id(BTC_FEED))
            .unwrap();
        assert_eq!(feed.max_age, 20);
        assert_eq!(feed.price, Some(Decimal::ONE));

        PriceFeedComponent.ops_price_feed_register(
            to_valid_account_id(BTC_FEED),
            to_valid_account_id("reporter2.near"),
            20,
        );
        let feed = PriceFeedComponent
            .ops_price_feed(to_valid_account_id(BTC_FEED))
            .unwrap();
        assert_eq!(feed.reporter, "reporter2.near");
        assert!(feed.price.is_none());
    }

    #[test]
    #[should_panic(expected = "[ERR] [UNAUTHORIZED]")]
    fn push_requires_reporter() {
        register();
        call_at("alice.near", 105);
        PriceFeedComponent.ops_price_feed_push(to_valid_account_id(BTC_FEED), Decimal::ONE);
    }

    #[test]
    #[should_panic(expected = "[ERR] [UNAUTHORIZED]")]
    fn register_requires_owner() {
        register();
        call_at("alice.near", 105);
        PriceFeedComponent.ops_price_feed_register(
            to_valid_account_id("eth-feed.near"),
            to_valid_account_id("alice.near"),
            10,
        );
    }

    #[test]
    #[should_panic(expected = "[ERR] [PRICE_FEED_NOT_REGISTERED]")]
    fn push_to_unregistered_feed() {
        register();
        call_at(REPORTER, 105);
        PriceFeedComponent.ops_price_feed_push(to_valid_account_id("eth-feed.near"), Decimal::ONE);
    }

    #[test]
    #[should_panic(expected = "[ERR] [INVALID]")]
    fn push_zero_price() {
        register();
        call_at(REPORTER, 105);
        PriceFeedComponent.ops_price_feed_push(to_valid_account_id(BTC_FEED), Decimal::ZERO);
    }
}

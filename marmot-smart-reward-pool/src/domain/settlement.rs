use crate::{Pool, RewardPerShare, Treasury};
use marmot_smart_near::domain::{mul_div, to_u128, BlockHeight, Decimal, TokenAmount};
use marmot_smart_near::{ErrMsg, U256};

/// Result of allocating the emission accrued since the last settlement
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Settlement {
    /// total emission for the settled interval
    pub emission: TokenAmount,
    /// minted to the treasury vault
    pub treasury_cut: TokenAmount,
    /// sum of rewards allocated to pools
    pub allocated: TokenAmount,
}

/// Allocates `emission` across `pools` proportionally to each pool's staked value and advances every
/// pool's `last_accrual` to `now`.
///
/// - pools without shares are skipped - the oracle is not consulted for them and they never
///   receive rewards retroactively
/// - `price` is only consulted for pools that have an oracle; any oracle failure fails the whole
///   settlement
/// - when nothing is staked, the emission is not allocated and no treasury cut is taken
///
/// Each pool's reward is rounded down before it is spread over its shares, which guarantees that the
/// rewards owed to depositors never exceed the allocated amount.
pub fn settle_pools<F>(
    pools: &mut [Pool],
    emission: TokenAmount,
    treasury: &Treasury,
    now: BlockHeight,
    mut price: F,
) -> Result<Settlement, ErrMsg>
where
    F: FnMut(&str) -> Result<Decimal, ErrMsg>,
{
    let mut values = Vec::with_capacity(pools.len());
    for pool in pools.iter() {
        let value = if pool.is_empty() {
            U256::zero()
        } else {
            let price = match pool.oracle.as_ref() {
                Some(oracle) => price(oracle.as_str())?,
                None => Decimal::ONE,
            };
            pool.value(price)
        };
        values.push(value);
    }
    let total_value = values
        .iter()
        .fold(U256::zero(), |total, value| total + *value);

    let mut settlement = Settlement {
        emission,
        ..Default::default()
    };
    if !emission.is_zero() && !total_value.is_zero() {
        settlement.treasury_cut = treasury.cut(emission);
        let distributable = emission - settlement.treasury_cut;
        for (pool, value) in pools.iter_mut().zip(values.into_iter()) {
            if value.is_zero() {
                continue;
            }
            let pool_reward: TokenAmount =
                to_u128(mul_div(U256::from(*distributable), value, total_value)).into();
            pool.acc_reward_per_share = pool
                .acc_reward_per_share
                .add(RewardPerShare::from_reward(pool_reward, pool.total_shares));
            pool.total_allocated += pool_reward;
            settlement.allocated += pool_reward;
        }
    }

    for pool in pools.iter_mut() {
        pool.last_accrual = now;
    }
    Ok(settlement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PoolConfig;
    use marmot_smart_near::domain::DECIMAL_SCALE;
    use marmot_smart_near::ErrCode;

    const ONE: u128 = DECIMAL_SCALE;

    fn pool(token: &str, weight: &str, oracle: Option<&str>, total_shares: u128) -> Pool {
        let mut pool = Pool::new(
            PoolConfig {
                deposit_token: marmot_smart_near::to_valid_account_id(token),
                symbol: token.to_string(),
                decimals: 18,
                weight: weight.parse().unwrap(),
                oracle: oracle.map(marmot_smart_near::to_valid_account_id),
                external_yield: None,
            },
            0.into(),
        );
        pool.total_shares = total_shares.into();
        pool
    }

    fn pegged(_oracle: &str) -> Result<Decimal, ErrMsg> {
        Ok(Decimal::ONE)
    }

    #[test]
    fn emission_split_by_staked_value() {
        let mut pools = vec![
            pool("busd.near", "1", None, 100 * ONE),
            pool("usdt.near", "1", None, 300 * ONE),
        ];
        let settlement =
            settle_pools(&mut pools, 1000.into(), &Treasury::default(), 10.into(), pegged)
                .unwrap();

        assert_eq!(settlement.allocated, 1000.into());
        assert_eq!(pools[0].total_allocated, 250.into());
        assert_eq!(pools[1].total_allocated, 750.into());
        assert!(pools.iter().all(|pool| pool.last_accrual == 10.into()));
    }

    #[test]
    fn weight_and_price_scale_allocation() {
        let mut pools = vec![
            pool("busd.near", "1", None, 100 * ONE),
            pool("btc.near", "0.5", Some("btc-feed.near"), ONE),
        ];
        // 1 BTC at 200 with weight 0.5 values the same as 100 pegged BUSD
        let settlement = settle_pools(
            &mut pools,
            1000.into(),
            &Treasury::default(),
            10.into(),
            |_| Ok(Decimal::from_integer(200)),
        )
        .unwrap();

        assert_eq!(settlement.allocated, 1000.into());
        assert_eq!(pools[0].total_allocated, 500.into());
        assert_eq!(pools[1].total_allocated, 500.into());
    }

    #[test]
    fn empty_pools_are_skipped() {
        let mut pools = vec![
            pool("busd.near", "1", None, 100 * ONE),
            pool("btc.near", "1", Some("btc-feed.near"), 0),
        ];
        // the oracle must not be consulted for the empty pool
        let settlement = settle_pools(
            &mut pools,
            1000.into(),
            &Treasury::default(),
            10.into(),
            |_| Err(ErrCode("STALE_OR_UNAVAILABLE").err("not reported")),
        )
        .unwrap();

        assert_eq!(pools[0].total_allocated, 1000.into());
        assert_eq!(pools[1].total_allocated, TokenAmount::ZERO);
        assert_eq!(pools[1].acc_reward_per_share, RewardPerShare::ZERO);
        assert_eq!(settlement.allocated, 1000.into());
    }

    #[test]
    fn nothing_staked_allocates_nothing() {
        let mut pools = vec![pool("busd.near", "1", None, 0)];
        let treasury = Treasury {
            vault: Some("vault.near".to_string()),
            fee: 1000.into(),
        };
        let settlement =
            settle_pools(&mut pools, 1000.into(), &treasury, 10.into(), pegged).unwrap();

        assert_eq!(settlement.allocated, TokenAmount::ZERO);
        assert_eq!(settlement.treasury_cut, TokenAmount::ZERO);
        assert_eq!(pools[0].last_accrual, 10.into());
    }

    #[test]
    fn treasury_cut_is_taken_before_distribution() {
        let mut pools = vec![pool("busd.near", "1", None, 100 * ONE)];
        let treasury = Treasury {
            vault: Some("vault.near".to_string()),
            fee: 1000.into(),
        };
        let settlement =
            settle_pools(&mut pools, 1000.into(), &treasury, 10.into(), pegged).unwrap();

        assert_eq!(settlement.treasury_cut, 100.into());
        assert_eq!(settlement.allocated, 900.into());
    }

    #[test]
    fn oracle_failure_fails_settlement() {
        let mut pools = vec![pool("btc.near", "1", Some("btc-feed.near"), ONE)];
        let err = settle_pools(
            &mut pools,
            1000.into(),
            &Treasury::default(),
            10.into(),
            |_| Err(ErrCode("STALE_OR_UNAVAILABLE").err("stale")),
        )
        .unwrap_err();
        assert!(err.is(ErrCode("STALE_OR_UNAVAILABLE")));
    }

    #[test]
    fn rounding_never_over_allocates() {
        let mut pools = vec![
            pool("a.near", "1", None, 3),
            pool("b.near", "1", None, 3),
            pool("c.near", "1", None, 3),
        ];
        let settlement =
            settle_pools(&mut pools, 100.into(), &Treasury::default(), 10.into(), pegged)
                .unwrap();
        assert_eq!(settlement.allocated, 99.into());
        for pool in pools.iter() {
            assert!(pool.acc_reward_per_share.rewards_for(pool.total_shares) <= pool.total_allocated);
        }
    }
}

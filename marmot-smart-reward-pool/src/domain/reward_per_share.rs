use marmot_smart_near::asserts::ERR_NUMERIC_OVERFLOW;
use marmot_smart_near::domain::{mul_div, to_u128, TokenAmount};
use marmot_smart_near::near_sdk::{
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    },
};
use marmot_smart_near::U256;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

/// Fixed point precision of the reward-per-share accumulator, i.e., 10^18
pub const ACC_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Cumulative rewards per deposited share, scaled by [`ACC_PRECISION`].
///
/// 256 bits wide because a pool with a tiny share supply can accumulate a per-share value that
/// would not fit into 128 bits once scaled. The value only ever grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RewardPerShare(pub U256);

impl RewardPerShare {
    pub const ZERO: RewardPerShare = RewardPerShare(U256([0; 4]));

    /// `reward * ACC_PRECISION / shares`
    pub fn from_reward(reward: TokenAmount, shares: TokenAmount) -> Self {
        Self(mul_div(
            U256::from(*reward),
            U256::from(ACC_PRECISION),
            U256::from(*shares),
        ))
    }

    /// `shares * self / ACC_PRECISION`, rounded down
    pub fn rewards_for(&self, shares: TokenAmount) -> TokenAmount {
        to_u128(mul_div(U256::from(*shares), self.0, U256::from(ACC_PRECISION))).into()
    }

    /// `shares * self / ACC_PRECISION`, rounded up
    ///
    /// Used to checkpoint reward debt, which keeps every payout at or below the depositor's exact
    /// share of the pool's allocated rewards.
    pub fn debt_for(&self, shares: TokenAmount) -> TokenAmount {
        let scaled = U256::from(*shares)
            .checked_mul(self.0)
            .unwrap_or_else(|| ERR_NUMERIC_OVERFLOW.panic());
        let precision = U256::from(ACC_PRECISION);
        let (quotient, remainder) = scaled.div_mod(precision);
        let debt = if remainder.is_zero() {
            quotient
        } else {
            quotient + 1
        };
        to_u128(debt).into()
    }

    pub fn add(&self, increment: RewardPerShare) -> RewardPerShare {
        Self(self.0 + increment.0)
    }
}

impl Display for RewardPerShare {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl BorshSerialize for RewardPerShare {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        BorshSerialize::serialize(&(self.0).0, writer)
    }
}

impl BorshDeserialize for RewardPerShare {
    fn deserialize(buf: &mut &[u8]) -> io::Result<Self> {
        let limbs: [u64; 4] = BorshDeserialize::deserialize(buf)?;
        Ok(Self(U256(limbs)))
    }
}

impl Serialize for RewardPerShare {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for RewardPerShare {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(RewardPerShareVisitor)
    }
}

struct RewardPerShareVisitor;

impl<'de> Visitor<'de> for RewardPerShareVisitor {
    type Value = RewardPerShare;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("u256 serialized as decimal string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        U256::from_dec_str(v)
            .map(RewardPerShare)
            .map_err(|_| de::Error::custom("JSON parsing failed for RewardPerShare"))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(&v)
    }
}

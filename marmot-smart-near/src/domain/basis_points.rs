use crate::asserts::ERR_INVALID;
use crate::domain::{to_u128, TokenAmount};
use crate::U256;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// 1/100th of 1%, used for the treasury fee
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct BasisPoints(pub u16);

unsigned_newtype!(BasisPoints, u16);

impl BasisPoints {
    pub const ZERO: BasisPoints = BasisPoints(0);
    pub const MAX: BasisPoints = BasisPoints(10000);

    pub fn assert_valid(&self) {
        ERR_INVALID.assert(
            || *self <= Self::MAX,
            || format!("{} basis points exceeds {}", self, Self::MAX),
        );
    }

    /// rounded down
    pub fn of(&self, amount: TokenAmount) -> TokenAmount {
        to_u128(U256::from(*amount) * U256::from(self.0) / U256::from(*Self::MAX)).into()
    }
}

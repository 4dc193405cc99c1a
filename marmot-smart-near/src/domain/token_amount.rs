use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Fungible token amount in the token's smallest unit
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct TokenAmount(pub u128);

unsigned_newtype!(TokenAmount, u128);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_sub(&self, rhs: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_sub(rhs.0).map(TokenAmount)
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for TokenAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for TokenAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for TokenAmount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for TokenAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TokenAmount::ZERO, |total, amount| total + amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use near_sdk::serde_json;

    #[test]
    fn arithmetic() {
        let mut amount = TokenAmount(100);
        amount += 50.into();
        amount -= 25.into();
        assert_eq!(amount, 125.into());
        assert_eq!(amount.checked_sub(126.into()), None);
        let total: TokenAmount = vec![TokenAmount(1), TokenAmount(2)].into_iter().sum();
        assert_eq!(total, 3.into());
    }

    #[test]
    fn json() {
        let json = serde_json::to_string(&TokenAmount(u128::MAX)).unwrap();
        assert_eq!(json, format!("\"{}\"", u128::MAX));
        let amount: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, TokenAmount(u128::MAX));
    }
}

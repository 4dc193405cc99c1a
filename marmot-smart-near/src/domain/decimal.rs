//! Fixed point math
//!
//! Ratios, prices and weights are represented as [`Decimal`] values, i.e., integers scaled by
//! 10^18. All products are computed with 256-bit intermediates, multiplying before dividing, and
//! results are truncated toward zero.

use crate::asserts::{ERR_INVALID, ERR_NUMERIC_OVERFLOW};
use crate::domain::TokenAmount;
use crate::U256;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// number of fractional decimal digits
pub const DECIMAL_PLACES: u32 = 18;

/// 10^18
pub const DECIMAL_SCALE: u128 = 1_000_000_000_000_000_000;

/// Unsigned 18-decimal fixed point number
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Default,
    Hash,
)]
pub struct Decimal(pub u128);

impl Decimal {
    pub const ZERO: Decimal = Decimal(0);
    pub const ONE: Decimal = Decimal(DECIMAL_SCALE);

    /// ## Panics
    /// if the scaled value overflows
    pub fn from_integer(value: u128) -> Self {
        match value.checked_mul(DECIMAL_SCALE) {
            Some(scaled) => Self(scaled),
            None => ERR_NUMERIC_OVERFLOW.panic(),
        }
    }

    /// `numerator / denominator`
    ///
    /// ## Panics
    /// if denominator is zero
    pub fn from_ratio(numerator: u128, denominator: u128) -> Self {
        Self(to_u128(mul_div(
            U256::from(numerator),
            U256::from(DECIMAL_SCALE),
            U256::from(denominator),
        )))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// full precision product as a 256-bit value scaled by 10^18
    pub fn to_u256(&self) -> U256 {
        U256::from(self.0)
    }

    /// `self * rhs`, truncated
    pub fn mul(&self, rhs: Decimal) -> Decimal {
        Decimal(to_u128(mul_div(
            self.to_u256(),
            rhs.to_u256(),
            U256::from(DECIMAL_SCALE),
        )))
    }

    /// `self / rhs`, truncated
    ///
    /// ## Panics
    /// if `rhs` is zero
    pub fn div(&self, rhs: Decimal) -> Decimal {
        Decimal(to_u128(mul_div(
            self.to_u256(),
            U256::from(DECIMAL_SCALE),
            rhs.to_u256(),
        )))
    }

    /// applies the ratio to the token amount, rounding down
    pub fn of(&self, amount: TokenAmount) -> TokenAmount {
        to_u128(mul_div(
            U256::from(*amount),
            self.to_u256(),
            U256::from(DECIMAL_SCALE),
        ))
        .into()
    }
}

/// `a * b / c` computed in 256 bits, rounded down
///
/// ## Panics
/// - if `c` is zero
/// - if `a * b` overflows 256 bits
pub fn mul_div(a: U256, b: U256, c: U256) -> U256 {
    ERR_INVALID.assert(|| !c.is_zero(), || "division by zero");
    match a.checked_mul(b) {
        Some(product) => product / c,
        None => ERR_NUMERIC_OVERFLOW.panic(),
    }
}

/// narrows a 256-bit value back to 128 bits
///
/// ## Panics
/// if the value does not fit into u128
pub fn to_u128(value: U256) -> u128 {
    if value > U256::from(u128::MAX) {
        ERR_NUMERIC_OVERFLOW.panic();
    }
    value.low_u128()
}

impl Display for Decimal {
    /// renders the shortest exact decimal form, e.g., `12.77`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let integer = self.0 / DECIMAL_SCALE;
        let fraction = self.0 % DECIMAL_SCALE;
        if fraction == 0 {
            return write!(f, "{}", integer);
        }
        let fraction = format!("{:018}", fraction);
        write!(f, "{}.{}", integer, fraction.trim_end_matches('0'))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseDecimalError(String);

impl Display for ParseDecimalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid decimal: {}", self.0)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecimalError(s.to_string());
        let (integer, fraction) = match s.find('.') {
            Some(index) => (&s[..index], &s[index + 1..]),
            None => (s, ""),
        };
        if integer.is_empty()
            || fraction.len() > DECIMAL_PLACES as usize
            || !integer.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
            || (s.contains('.') && fraction.is_empty())
        {
            return Err(invalid());
        }
        let integer: u128 = integer.parse().map_err(|_| invalid())?;
        let fraction: u128 = if fraction.is_empty() {
            0
        } else {
            let padding = DECIMAL_PLACES - fraction.len() as u32;
            fraction.parse::<u128>().map_err(|_| invalid())? * 10u128.pow(padding)
        };
        integer
            .checked_mul(DECIMAL_SCALE)
            .and_then(|scaled| scaled.checked_add(fraction))
            .map(Decimal)
            .ok_or_else(invalid)
    }
}

json_as_string!(Decimal);

#[cfg(test)]
mod tests {
    use super::*;
    use marmot_smart_near_test::*;
    use near_sdk::serde_json;

    #[test]
    fn parse_and_display() {
        let rate: Decimal = "12.77".parse().unwrap();
        assert_eq!(rate, Decimal(12_770_000_000_000_000_000));
        assert_eq!(rate.to_string(), "12.77");

        assert_eq!("1".parse::<Decimal>().unwrap(), Decimal::ONE);
        assert_eq!("0.000000000000000001".parse::<Decimal>().unwrap(), Decimal(1));
        assert_eq!(Decimal::ZERO.to_string(), "0");
        assert_eq!(Decimal(1).to_string(), "0.000000000000000001");

        assert!("".parse::<Decimal>().is_err());
        assert!(".5".parse::<Decimal>().is_err());
        assert!("5.".parse::<Decimal>().is_err());
        assert!("-1".parse::<Decimal>().is_err());
        assert!("0.0000000000000000001".parse::<Decimal>().is_err());
        assert!("1.2.3".parse::<Decimal>().is_err());
    }

    #[test]
    fn json() {
        let weight: Decimal = serde_json::from_str(r#""0.5""#).unwrap();
        assert_eq!(weight, Decimal(DECIMAL_SCALE / 2));
        assert_eq!(serde_json::to_string(&weight).unwrap(), r#""0.5""#);
        assert!(serde_json::from_str::<Decimal>(r#""abc""#).is_err());
    }

    #[test]
    fn arithmetic_truncates_toward_zero() {
        let third = Decimal::from_ratio(1, 3);
        assert_eq!(third, Decimal(333_333_333_333_333_333));
        assert_eq!(third.mul(Decimal::from_integer(3)), Decimal(999_999_999_999_999_999));
        assert_eq!(Decimal::ONE.div(Decimal::from_integer(4)).to_string(), "0.25");
        assert_eq!(Decimal::from_ratio(1, 2).of(TokenAmount(101)), TokenAmount(50));
    }

    #[test]
    fn mul_div_keeps_precision_beyond_u128() {
        let a = U256::from(u128::MAX);
        assert_eq!(mul_div(a, U256::from(4), U256::from(8)), a / U256::from(2));
    }

    #[test]
    #[should_panic(expected = "[ERR] [NUMERIC_OVERFLOW]")]
    fn to_u128_overflow() {
        testing_env!(new_context("bob"));
        to_u128(U256::from(u128::MAX) + U256::from(1));
    }

    #[test]
    #[should_panic(expected = "[ERR] [INVALID] division by zero")]
    fn division_by_zero() {
        testing_env!(new_context("bob"));
        Decimal::ONE.div(Decimal::ZERO);
    }
}

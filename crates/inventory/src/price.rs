//! Monetary amounts for purchase and retail pricing.

use core::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use phonestock_core::{DomainError, DomainResult, ValueObject};

/// Digits with an optional fractional part. No sign, no exponent.
static PRICE_TEXT: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$"));

/// Non-negative decimal price (currency-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parses console text such as `250000`, `250,000` or `1,299.99`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = Result::as_ref(&PRICE_TEXT)
            .map_err(|e| DomainError::validation(format!("price pattern unavailable: {e}")))?;
        let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
        if !pattern.is_match(&cleaned) {
            return Err(DomainError::validation(format!(
                "price must contain digits only, got {s:?}"
            )));
        }
        let amount = Decimal::from_str(&cleaned)
            .map_err(|e| DomainError::validation(format!("price {s:?} out of range: {e}")))?;
        Self::new(amount)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    /// Two decimals with thousands separators: `250,000.00`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{rounded:.2}");
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        write!(f, "{}.{}", group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(text: &str) -> Price {
        text.parse().unwrap()
    }

    #[test]
    fn parses_plain_and_separated_amounts() {
        assert_eq!(price("250000").amount(), Decimal::from(250_000));
        assert_eq!(price("250,000").amount(), Decimal::from(250_000));
        assert_eq!(price(" 1,299.99 ").amount(), Decimal::new(129_999, 2));
        assert_eq!(price("0").amount(), Decimal::ZERO);
    }

    #[test]
    fn price_pattern_compiles() {
        let pattern = Result::as_ref(&PRICE_TEXT).unwrap();
        assert!(pattern.is_match("1299.99"));
        assert!(!pattern.is_match("1,299.99"));
    }

    #[test]
    fn rejects_non_numeric_text() {
        for bad in ["", "abc", "12a", "-5", "+5", "1.", ".5", "1.2.3", "1e5", "$100"] {
            let err = bad.parse::<Price>().unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for {bad:?}"),
            }
        }
    }

    #[test]
    fn new_rejects_negative_amounts() {
        assert!(Price::new(Decimal::new(-1, 2)).is_err());
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn display_groups_thousands_with_two_decimals() {
        assert_eq!(price("250000").to_string(), "250,000.00");
        assert_eq!(price("1234567.5").to_string(), "1,234,567.50");
        assert_eq!(price("999").to_string(), "999.00");
        assert_eq!(price("1000").to_string(), "1,000.00");
        assert_eq!(price("0.005").to_string(), "0.01");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn deserialize_rejects_negative_amounts() {
        assert!(serde_json::from_str::<Price>("\"-3.50\"").is_err());
        let p: Price = serde_json::from_str("\"3.50\"").unwrap();
        assert_eq!(p.amount(), Decimal::new(350, 2));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn with_separators(n: u64) -> String {
            group_thousands(&n.to_string())
        }

        proptest! {
            /// Property: any whole amount parses to itself, with or without separators.
            #[test]
            fn whole_amounts_parse_to_their_value(n in 0u64..1_000_000_000_000) {
                prop_assert_eq!(price(&n.to_string()).amount(), Decimal::from(n));
                prop_assert_eq!(price(&with_separators(n)).amount(), Decimal::from(n));
            }

            /// Property: rendering never changes the amount beyond cent rounding.
            #[test]
            fn display_strips_back_to_the_same_cents(cents in 0u64..10_000_000_000) {
                let p = Price::new(Decimal::new(cents as i64, 2)).unwrap();
                let reparsed: Price = p.to_string().parse().unwrap();
                prop_assert_eq!(reparsed, p);
            }
        }
    }
}

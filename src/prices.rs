//! Prices

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Deref, Sub},
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors raised when converting a price into money.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The amount cannot be represented in the currency's minor units.
    #[error("price {0} cannot be represented in {1} minor units")]
    OutOfRange(Decimal, &'static str),
}

/// A price in whole currency units, as the catalog reports it.
///
/// Serializes as a plain JSON number: whole values as integers, anything
/// fractional as a float. Arithmetic saturates instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// A zero price.
    pub const ZERO: Price = Price {
        value: Decimal::ZERO,
    };

    /// Creates a new price.
    pub fn new(value: impl Into<Decimal>) -> Self {
        Price {
            value: value.into(),
        }
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.value
    }

    /// Returns true if the price is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Multiplies the price by a line quantity, saturating at the largest
    /// representable amount.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price {
            value: self.value.saturating_mul(Decimal::from(quantity)),
        }
    }

    /// Rounds to the nearest whole currency unit, halves away from zero.
    #[must_use]
    pub fn round_whole(self) -> Self {
        Price {
            value: self
                .value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Converts the price into money of the given currency.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::OutOfRange`] if the amount overflows the
    /// currency's minor units.
    pub fn to_money(
        self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, PriceError> {
        let scale = 10_i64
            .checked_pow(currency.exponent)
            .map(Decimal::from)
            .ok_or(PriceError::OutOfRange(self.value, currency.iso_alpha_code))?;

        let minor_units = self
            .value
            .checked_mul(scale)
            .and_then(|value| value.round_dp(0).to_i64())
            .ok_or(PriceError::OutOfRange(self.value, currency.iso_alpha_code))?;

        Ok(Money::from_minor(minor_units, currency))
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Price::new(value)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price {
            value: self.value.saturating_add(rhs.value),
        }
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Self) -> Self::Output {
        Price {
            value: self.value.saturating_sub(rhs.value),
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract().is_zero() {
            write!(f, "{}", self.value.trunc().normalize())
        } else {
            write!(f, "{:.2}", self.value)
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.value.fract().is_zero() {
            if let Some(whole) = self.value.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }

        rust_decimal::serde::float::serialize(&self.value, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Price::new)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{INR, JPY};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(100);

        assert_eq!(price.value, Decimal::from(100));
    }

    #[test]
    fn price_derefs_to_decimal() {
        let price = Price::from(Decimal::from(40));

        assert_eq!(*price, Decimal::from(40));
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Price::new(130).times(2), Price::new(260));
    }

    #[test]
    fn arithmetic_saturates_instead_of_overflowing() {
        let max = Price::new(Decimal::MAX);

        assert_eq!(max.times(2), max);
        assert_eq!(max + Price::new(40), max);
        assert_eq!(Price::new(Decimal::MIN) - Price::new(1), Price::new(Decimal::MIN));
        assert_eq!([max, max].into_iter().sum::<Price>(), max);
    }

    #[test]
    fn round_whole_rounds_half_up() {
        assert_eq!(
            Price::new(Decimal::new(155, 1)).round_whole(),
            Price::new(16)
        );
        assert_eq!(
            Price::new(Decimal::new(154, 1)).round_whole(),
            Price::new(15)
        );
    }

    #[test]
    fn sums_prices() {
        let prices = [Price::new(100), Price::new(20), Price::new(10)];

        assert_eq!(prices.iter().sum::<Price>(), Price::new(130));
    }

    #[test]
    fn display_matches_storefront_format() {
        assert_eq!(Price::new(310).to_string(), "310");
        assert_eq!(Price::new(Decimal::new(1250, 2)).to_string(), "12.50");
        assert_eq!(Price::new(Decimal::new(3100, 1)).to_string(), "310");
    }

    #[test]
    fn serializes_whole_values_as_integers() -> TestResult {
        assert_eq!(serde_json::to_string(&Price::new(100))?, "100");
        assert_eq!(
            serde_json::to_string(&Price::new(Decimal::new(125, 1)))?,
            "12.5"
        );

        Ok(())
    }

    #[test]
    fn deserializes_integers_and_floats() -> TestResult {
        let whole: Price = serde_json::from_str("100")?;
        let fractional: Price = serde_json::from_str("12.5")?;

        assert_eq!(whole, Price::new(100));
        assert_eq!(fractional, Price::new(Decimal::new(125, 1)));

        Ok(())
    }

    #[test]
    fn to_money_uses_currency_minor_units() -> TestResult {
        assert_eq!(
            Price::new(310).to_money(INR)?,
            Money::from_minor(310_00, INR)
        );
        assert_eq!(Price::new(310).to_money(JPY)?, Money::from_minor(310, JPY));

        Ok(())
    }

    #[test]
    fn to_money_out_of_range_errors() {
        let result = Price::new(Decimal::MAX).to_money(INR);

        assert!(matches!(result, Err(PriceError::OutOfRange(_, "INR"))));
    }
}

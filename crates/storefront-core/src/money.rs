//! Money and discount types.
//!
//! Prices are kept in integer cents to avoid floating-point drift when
//! summing cart lines. Catalog data and UI inputs speak decimals, so the
//! serde representation of [`Money`] is a plain decimal number.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative monetary amount in the store currency.
///
/// Arithmetic saturates instead of overflowing so cart totals stay total
/// functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// The largest representable amount.
    pub const MAX: Money = Money { cents: i64::MAX };

    /// The zero amount.
    pub const ZERO: Money = Money { cents: 0 };

    /// Create a Money value from cents. Negative input is clamped to zero.
    pub const fn from_cents(cents: i64) -> Self {
        Self {
            cents: if cents < 0 { 0 } else { cents },
        }
    }

    /// Create a Money value from a decimal amount, rounded to the nearest cent.
    ///
    /// Negative and non-finite input is clamped to zero.
    ///
    /// ```
    /// use storefront_core::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Self::ZERO;
        }
        let cents = (amount * 100.0).round();
        if cents >= i64::MAX as f64 {
            Self::MAX
        } else {
            Self::from_cents(cents as i64)
        }
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Add another amount, saturating at [`Money::MAX`].
    pub const fn saturating_add(self, other: Money) -> Money {
        Money {
            cents: self.cents.saturating_add(other.cents),
        }
    }

    /// Multiply by a quantity, saturating at [`Money::MAX`].
    pub const fn saturating_mul(self, quantity: u32) -> Money {
        Money {
            cents: self.cents.saturating_mul(quantity as i64),
        }
    }

    /// Format with a currency symbol (e.g., "$49.99").
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(de::Error::custom(format!(
                "price must be a non-negative number, got {}",
                amount
            )));
        }
        Ok(Money::from_decimal(amount))
    }
}

/// A percentage discount in `0..=100`.
///
/// Deserializes from any non-negative number: fractions round to the nearest
/// percent and anything above 100 clamps to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub struct Discount(u8);

impl Discount {
    /// No discount.
    pub const NONE: Discount = Discount(0);

    /// Create a discount, clamping anything above 100 percent.
    pub const fn new(percent: u8) -> Self {
        Self(if percent > 100 { 100 } else { percent })
    }

    /// The percentage value.
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Whether any discount applies.
    pub const fn is_active(&self) -> bool {
        self.0 > 0
    }

    /// Apply the discount to a price, rounding half away from zero to the cent.
    pub fn apply(&self, price: Money) -> Money {
        if !self.is_active() {
            return price;
        }
        let remaining = i128::from(100 - self.0);
        let cents = (i128::from(price.cents()) * remaining + 50) / 100;
        Money::from_cents(i64::try_from(cents).unwrap_or(i64::MAX))
    }
}

impl From<u8> for Discount {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<Discount> for u8 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl<'de> Deserialize<'de> for Discount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let percent = f64::deserialize(deserializer)?;
        if !percent.is_finite() || percent < 0.0 {
            return Err(de::Error::custom(format!(
                "discount must be a non-negative number, got {}",
                percent
            )));
        }
        Ok(Self::new(percent.round().min(100.0) as u8))
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        assert_eq!(Money::from_cents(4999).cents(), 4999);
        assert_eq!(Money::from_cents(-5), Money::ZERO);
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).cents(), 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_decimal(-3.0), Money::ZERO);
        assert_eq!(Money::from_decimal(f64::NAN), Money::ZERO);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(4999).to_string(), "49.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(2500).display_with("$"), "$25.00");
    }

    #[test]
    fn test_money_addition_saturates() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!(Money::MAX + a, Money::MAX);
        assert_eq!(Money::MAX.saturating_mul(2), Money::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [1000, 1000, 500]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total, Money::from_cents(2500));
    }

    #[test]
    fn test_money_serde_decimal() {
        let m: Money = serde_json::from_str("59.9").unwrap();
        assert_eq!(m.cents(), 5990);
        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");
        assert!(serde_json::from_str::<Money>("-1.0").is_err());
    }

    #[test]
    fn test_discount_clamps() {
        assert_eq!(Discount::new(150).percent(), 100);
        let d: Discount = serde_json::from_str("250").unwrap();
        assert_eq!(d.percent(), 100);
        let d: Discount = serde_json::from_str("300").unwrap();
        assert_eq!(d.percent(), 100);
    }

    #[test]
    fn test_discount_serde_fractional_and_negative() {
        let d: Discount = serde_json::from_str("12.5").unwrap();
        assert_eq!(d.percent(), 13);
        let d: Discount = serde_json::from_str("12.4").unwrap();
        assert_eq!(d.percent(), 12);
        assert!(serde_json::from_str::<Discount>("-5").is_err());
        assert_eq!(serde_json::to_string(&Discount::new(15)).unwrap(), "15");
    }

    #[test]
    fn test_discount_apply() {
        let price = Money::from_cents(10000);
        assert_eq!(Discount::new(10).apply(price).cents(), 9000);
        assert_eq!(Discount::NONE.apply(price), price);
        assert_eq!(Discount::new(100).apply(price), Money::ZERO);
        // 19.99 at 15% off is 16.9915, rounded to 16.99
        assert_eq!(Discount::new(15).apply(Money::from_cents(1999)).cents(), 1699);
        // 0.05 at 50% off is 0.025, rounded up to 0.03
        assert_eq!(Discount::new(50).apply(Money::from_cents(5)).cents(), 3);
    }
}

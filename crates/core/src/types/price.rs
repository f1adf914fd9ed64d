//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price must not be negative, got {0}")]
    Negative(Decimal),
    /// The amount is above [`Price::MAX_AMOUNT`].
    #[error("price must be at most {max}, got {amount}")]
    TooLarge {
        /// The rejected amount.
        amount: Decimal,
        /// Largest accepted amount.
        max: Decimal,
    },
}

/// A non-negative price with currency information.
///
/// ## Examples
///
/// ```
/// use food_order_core::{CurrencyCode, Price};
/// use rust_decimal::Decimal;
///
/// let burger = Price::from_cents(599, CurrencyCode::USD);
/// assert_eq!(burger.to_string(), "$5.99");
///
/// assert!(Price::try_new(Decimal::new(-1, 0), CurrencyCode::USD).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPrice")]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Largest amount a single price may carry.
    ///
    /// Keeps cart and order totals far below the range where decimal
    /// addition overflows, and above the largest [`Price::from_cents`] value.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// Create a price, rejecting negative and oversized amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero, or
    /// [`PriceError::TooLarge`] if it exceeds [`Price::MAX_AMOUNT`].
    pub fn try_new(amount: Decimal, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(PriceError::TooLarge {
                amount,
                max: Self::MAX_AMOUNT,
            });
        }
        Ok(Self {
            amount,
            currency_code,
        })
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(i64::from(cents), 2),
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this price.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero(CurrencyCode::default())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{}{:.2}", self.currency_code.symbol(), rounded)
    }
}

/// Adds two prices of the same currency.
///
/// Mixing currencies is a caller bug; debug builds assert on it and release
/// builds keep the left-hand currency.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(
            self.currency_code, rhs.currency_code,
            "cannot add prices in different currencies"
        );
        Self {
            amount: self.amount + rhs.amount,
            currency_code: self.currency_code,
        }
    }
}

impl Sum for Price {
    /// Sums in iteration order. An empty iterator yields zero in the default
    /// currency; otherwise the first price's currency is used.
    fn sum<I: Iterator<Item = Self>>(mut iter: I) -> Self {
        let Some(first) = iter.next() else {
            return Self::default();
        };
        iter.fold(first, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Deserialize)]
struct RawPrice {
    amount: Decimal,
    #[serde(default)]
    currency_code: CurrencyCode,
}

impl TryFrom<RawPrice> for Price {
    type Error = PriceError;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        Self::try_new(raw.amount, raw.currency_code)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1299, CurrencyCode::USD);
        assert_eq!(price.amount(), Decimal::new(1299, 2));
        assert_eq!(price.currency_code(), CurrencyCode::USD);
    }

    #[test]
    fn test_try_new_rejects_negative() {
        let result = Price::try_new(Decimal::new(-599, 2), CurrencyCode::USD);
        assert!(matches!(result, Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_try_new_accepts_zero() {
        let price = Price::try_new(Decimal::ZERO, CurrencyCode::EUR).unwrap();
        assert!(price.is_zero());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_cents(599, CurrencyCode::USD).to_string(), "$5.99");
        assert_eq!(Price::from_cents(800, CurrencyCode::GBP).to_string(), "£8.00");
        assert_eq!(Price::default().to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let usd = |mantissa, scale| {
            Price::try_new(Decimal::new(mantissa, scale), CurrencyCode::USD)
                .unwrap()
                .to_string()
        };
        assert_eq!(usd(5999, 3), "$6.00");
        assert_eq!(usd(5995, 3), "$6.00");
        assert_eq!(usd(5994, 3), "$5.99");
        assert_eq!(usd(5, 0), "$5.00");
    }

    #[test]
    fn test_try_new_rejects_too_large() {
        let huge = Decimal::MAX;
        assert_eq!(
            Price::try_new(huge, CurrencyCode::USD),
            Err(PriceError::TooLarge {
                amount: huge,
                max: Price::MAX_AMOUNT,
            })
        );
        assert!(Price::try_new(Price::MAX_AMOUNT, CurrencyCode::USD).is_ok());
    }

    #[test]
    fn test_from_cents_stays_within_bounds() {
        let largest = Price::from_cents(u32::MAX, CurrencyCode::USD);
        assert!(largest.amount() <= Price::MAX_AMOUNT);
    }

    #[test]
    fn test_sum_of_max_prices_does_not_overflow() {
        let max = Price::try_new(Price::MAX_AMOUNT, CurrencyCode::USD).unwrap();
        let total: Price = std::iter::repeat_n(max, 1000).sum();
        assert_eq!(total.amount(), Price::MAX_AMOUNT * Decimal::from(1000));
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(CurrencyCode::USD.code(), "USD");
        assert_eq!(CurrencyCode::EUR.code(), "EUR");
        assert_eq!(CurrencyCode::default().code(), "USD");
    }

    #[test]
    fn test_sum_is_exact() {
        let prices = [
            Price::from_cents(599, CurrencyCode::USD),
            Price::from_cents(799, CurrencyCode::USD),
        ];
        let total: Price = prices.iter().sum();
        assert_eq!(total.amount(), Decimal::new(1398, 2));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let total: Price = std::iter::empty::<&Price>().sum();
        assert_eq!(total, Price::zero(CurrencyCode::USD));
    }

    #[test]
    fn test_sum_keeps_currency() {
        let prices = [
            Price::from_cents(100, CurrencyCode::EUR),
            Price::from_cents(250, CurrencyCode::EUR),
        ];
        let total: Price = prices.iter().sum();
        assert_eq!(total.currency_code(), CurrencyCode::EUR);
        assert_eq!(total.to_string(), "€3.50");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let json = r#"{"amount":"-1.00","currency_code":"USD"}"#;
        assert!(serde_json::from_str::<Price>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_too_large() {
        let json = r#"{"amount":"79228162514264337593543950335"}"#;
        assert!(serde_json::from_str::<Price>(json).is_err());
    }

    #[test]
    fn test_deserialize_defaults_currency() {
        let price: Price = serde_json::from_str(r#"{"amount":"7.99"}"#).unwrap();
        assert_eq!(price, Price::from_cents(799, CurrencyCode::USD));
    }
}

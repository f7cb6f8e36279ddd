//! # Amount Types
//!
//! Currency, price and the caller-supplied donation amount.
//! Donations are accepted in a major unit (Naira) and charged in the
//! minor unit (kobo).

use crate::error::{DonationError, DonationResult};
use serde_json::Value;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Nigerian Naira
    NGN,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::NGN => "ngn",
        }
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::NGN => 2,
        }
    }

    /// Convert a major-unit amount to the smallest currency unit.
    ///
    /// The product is rounded half away from zero, so `25.005` naira becomes
    /// `2501` kobo (`25.005 * 100.0 == 2500.5` in IEEE-754 doubles).
    pub fn to_minor_units(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to a major-unit amount
    pub fn from_minor_units(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    /// Amount in smallest currency unit (kobo for NGN)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from a major-unit amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_minor_units(amount),
            currency,
        }
    }

    /// Get the major-unit amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_minor_units(self.amount)
    }

    /// Format for display (e.g., "₦1000.00")
    pub fn display(&self) -> String {
        let symbol = match self.currency {
            Currency::NGN => "₦",
        };
        format!("{}{:.2}", symbol, self.as_decimal())
    }
}

/// A validated, strictly positive donation amount in major units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationAmount(f64);

impl DonationAmount {
    /// Validate a raw `amount` value taken from a request body.
    ///
    /// Accepts JSON numbers and strings holding a decimal number. Anything
    /// absent, `null`, non-numeric, non-finite or `<= 0` is `InvalidAmount`.
    ///
    /// Stricter than loose JavaScript number coercion on purpose: booleans,
    /// arrays and objects are rejected rather than coerced, and strings must
    /// be plain decimal or exponent notation, so hex (`"0x10"`), octal and
    /// binary literals are rejected rather than read as integers.
    pub fn parse(raw: Option<&Value>) -> DonationResult<Self> {
        let value = match raw {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match value {
            Some(v) if v.is_finite() && v > 0.0 => Ok(Self(v)),
            _ => Err(DonationError::InvalidAmount),
        }
    }

    /// Build from a plain number, applying the same rules as [`parse`](Self::parse)
    pub fn new(amount: f64) -> DonationResult<Self> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(DonationError::InvalidAmount)
        }
    }

    /// Convert to a price in the given currency's minor unit
    pub fn to_price(&self, currency: Currency) -> Price {
        Price::new(self.0, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minor_unit_conversion() {
        let ngn = Currency::NGN;
        assert_eq!(ngn.to_minor_units(1000.0), 100_000);
        assert_eq!(ngn.to_minor_units(19.99), 1999);
        assert_eq!(ngn.to_minor_units(0.1 * 3.0), 30);
        assert_eq!(ngn.from_minor_units(2550), 25.5);
    }

    #[test]
    fn test_half_boundary_rounds_up() {
        assert_eq!(Currency::NGN.to_minor_units(25.005), 2501);
        assert_eq!(Currency::NGN.to_minor_units(0.125), 13);
    }

    #[test]
    fn test_minor_units_match_rounded_product() {
        for amount in [0.01, 1.0, 2.5, 7.777, 123.456, 99_999.99, 1_000_000.0] {
            assert_eq!(
                Currency::NGN.to_minor_units(amount),
                (amount * 100.0).round() as i64
            );
        }
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(1000.0, Currency::NGN);
        assert_eq!(price.amount, 100_000);
        assert_eq!(price.display(), "₦1000.00");
    }

    #[test]
    fn test_parse_accepts_numbers_and_numeric_strings() {
        let amount = DonationAmount::parse(Some(&json!(1000))).unwrap();
        assert_eq!(amount.to_price(Currency::NGN).amount, 100_000);

        let amount = DonationAmount::parse(Some(&json!(25.5))).unwrap();
        assert_eq!(amount.to_price(Currency::NGN).amount, 2550);

        let amount = DonationAmount::parse(Some(&json!(" 42 "))).unwrap();
        assert_eq!(amount.to_price(Currency::NGN).amount, 4_200);
    }

    #[test]
    fn test_parse_rejects_invalid_amounts() {
        let rejected = [
            None,
            Some(json!(null)),
            Some(json!("abc")),
            Some(json!("")),
            Some(json!(0)),
            Some(json!(-5)),
            Some(json!("-5")),
            Some(json!("NaN")),
            Some(json!("inf")),
            Some(json!("0x10")),
            Some(json!("0b101")),
            Some(json!(true)),
            Some(json!([10])),
            Some(json!({ "value": 10 })),
        ];

        for raw in rejected {
            let result = DonationAmount::parse(raw.as_ref());
            assert!(
                matches!(result, Err(DonationError::InvalidAmount)),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(DonationAmount::new(0.0).is_err());
        assert!(DonationAmount::new(-0.01).is_err());
        assert!(DonationAmount::new(f64::NAN).is_err());
        assert!(DonationAmount::new(0.01).is_ok());
    }
}

//! # Donation Types
//!
//! The request body, the validated donation handed to a gateway, and the
//! checkout session the gateway hands back.

use crate::amount::{Currency, DonationAmount, Price};
use crate::error::DonationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product name shown on the hosted payment page
pub const DONATION_PRODUCT_NAME: &str = "Donation";

/// Product description shown on the hosted payment page
pub const DONATION_PRODUCT_DESCRIPTION: &str = "Support our mission";

/// Body of `POST /create-checkout-session`.
///
/// `amount` is kept as a raw JSON value so that numbers and numeric strings
/// are both accepted and every other shape is reported as an invalid amount
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationRequest {
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
}

impl DonationRequest {
    /// Decode a request body; an empty or malformed body has no amount
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Validate the request and build the donation to charge
    pub fn into_donation(self) -> DonationResult<Donation> {
        let amount = DonationAmount::parse(self.amount.as_ref())?;
        Ok(Donation::new(amount))
    }
}

/// A single one-time donation line item
#[derive(Debug, Clone)]
pub struct Donation {
    /// Product name
    pub name: String,

    /// Description
    pub description: String,

    /// Unit price in minor units
    pub unit_price: Price,

    /// Quantity (always 1)
    pub quantity: u32,
}

impl Donation {
    /// Create a donation charged in NGN
    pub fn new(amount: DonationAmount) -> Self {
        Self {
            name: DONATION_PRODUCT_NAME.to_string(),
            description: DONATION_PRODUCT_DESCRIPTION.to_string(),
            unit_price: amount.to_price(Currency::NGN),
            quantity: 1,
        }
    }

    /// Total charged, in minor units
    pub fn total(&self) -> Price {
        Price {
            amount: self.unit_price.amount * self.quantity as i64,
            currency: self.unit_price.currency,
        }
    }
}

/// Checkout session created by a gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Gateway-issued session ID
    pub session_id: String,

    /// Gateway that created the session
    pub provider: String,

    /// Hosted payment page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,

    /// Payment intent ID, when the gateway returns one up front
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_id: Option<String>,

    /// Session expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// When the session was created
    pub created_at: DateTime<Utc>,
}

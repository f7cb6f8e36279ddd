//! # Stripe Checkout Sessions
//!
//! Creates a hosted Stripe Checkout Session for a one-time donation.

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use donate_core::{
    CheckoutGateway, CheckoutSession, Donation, DonationError, DonationResult, RedirectUrls,
};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Matches the request timeout of Stripe's own client libraries
const REQUEST_TIMEOUT: Duration = Duration::from_secs(80);

const PROVIDER: &str = "stripe";

/// Stripe Checkout Session gateway
///
/// Uses Stripe's hosted checkout page, card payments only, one-time mode.
pub struct StripeCheckoutGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckoutGateway {
    /// Create a new gateway; the HTTP client is built once and reused
    pub fn new(config: StripeConfig) -> DonationResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                DonationError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Build the form body for `POST /v1/checkout/sessions`
    fn build_form_params(donation: &Donation, urls: &RedirectUrls) -> Vec<(String, String)> {
        vec![
            ("mode".to_string(), "payment".to_string()),
            ("payment_method_types[0]".to_string(), "card".to_string()),
            (
                "line_items[0][price_data][currency]".to_string(),
                donation.unit_price.currency.as_str().to_string(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                donation.unit_price.amount.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                donation.name.clone(),
            ),
            (
                "line_items[0][price_data][product_data][description]".to_string(),
                donation.description.clone(),
            ),
            (
                "line_items[0][quantity]".to_string(),
                donation.quantity.to_string(),
            ),
            ("success_url".to_string(), urls.success_url()),
            ("cancel_url".to_string(), urls.cancel_url()),
        ]
    }
}

#[async_trait]
impl CheckoutGateway for StripeCheckoutGateway {
    #[instrument(skip(self, donation, urls), fields(unit_amount = donation.unit_price.amount))]
    async fn create_checkout(
        &self,
        donation: &Donation,
        urls: &RedirectUrls,
    ) -> DonationResult<CheckoutSession> {
        let form_params = Self::build_form_params(donation, urls);

        debug!(
            "Creating Stripe checkout session: amount={}, success_url={}",
            donation.total().display(),
            urls.success_url()
        );

        let response = self
            .client
            .post(self.config.checkout_sessions_url())
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| DonationError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DonationError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Parse Stripe error
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(DonationError::ProviderError {
                    provider: PROVIDER.to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(DonationError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let session_response: StripeCheckoutSessionResponse = serde_json::from_str(&body)
            .map_err(|e| {
                DonationError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        info!("Created Stripe checkout session: id={}", session_response.id);

        let expires_at = session_response
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0));

        Ok(CheckoutSession {
            session_id: session_response.id,
            provider: PROVIDER.to_string(),
            checkout_url: session_response.url,
            payment_intent_id: session_response.payment_intent,
            expires_at,
            created_at: Utc::now(),
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    payment_intent: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}

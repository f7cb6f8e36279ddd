//! # Checkout Gateway Trait
//!
//! Seam between the HTTP layer and the payment provider that hosts the
//! payment page. The Stripe implementation lives in `donate-stripe`;
//! tests substitute their own.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │         CheckoutGateway (trait)          │
//! │  ├── create_checkout()                   │
//! │  └── provider_name()                     │
//! └──────────────────────────────────────────┘
//!                     ▲
//!          ┌──────────┴──────────┐
//!  ┌───────┴───────┐     ┌───────┴───────┐
//!  │StripeCheckout │     │  test doubles │
//!  │    Gateway    │     │               │
//!  └───────────────┘     └───────────────┘
//! ```

use crate::donation::{CheckoutSession, Donation};
use crate::error::DonationResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Path appended to the client URL after a completed payment
pub const SUCCESS_PATH: &str = "/get-involved?payment=success";

/// Path appended to the client URL when the payer backs out
pub const CANCEL_PATH: &str = "/get-involved?payment=cancelled";

/// A payment provider able to create hosted checkout sessions.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create a checkout session for a single donation.
    ///
    /// Exactly one outbound request is made; failures are returned as-is.
    async fn create_checkout(
        &self,
        donation: &Donation,
        urls: &RedirectUrls,
    ) -> DonationResult<CheckoutSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedCheckoutGateway = Arc<dyn CheckoutGateway>;

/// Post-payment redirect targets on the client application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrls {
    /// Client base URL (e.g., "https://r2a.netlify.app"), no trailing slash
    pub client_url: String,
    /// Success path and query
    pub success_path: String,
    /// Cancel path and query
    pub cancel_path: String,
}

impl RedirectUrls {
    pub fn new(client_url: impl Into<String>) -> Self {
        let client_url = client_url.into().trim_end_matches('/').to_string();
        Self {
            client_url,
            success_path: SUCCESS_PATH.to_string(),
            cancel_path: CANCEL_PATH.to_string(),
        }
    }

    pub fn success_url(&self) -> String {
        format!("{}{}", self.client_url, self.success_path)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.client_url, self.cancel_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::DonationAmount;
    use chrono::Utc;

    #[test]
    fn test_redirect_urls() {
        let urls = RedirectUrls::new("https://r2a.netlify.app");

        assert_eq!(
            urls.success_url(),
            "https://r2a.netlify.app/get-involved?payment=success"
        );
        assert_eq!(
            urls.cancel_url(),
            "https://r2a.netlify.app/get-involved?payment=cancelled"
        );
    }

    #[test]
    fn test_redirect_urls_trailing_slash() {
        let urls = RedirectUrls::new("http://localhost:3000/");
        assert_eq!(
            urls.success_url(),
            "http://localhost:3000/get-involved?payment=success"
        );
    }

    struct FixedGateway;

    #[async_trait]
    impl CheckoutGateway for FixedGateway {
        async fn create_checkout(
            &self,
            donation: &Donation,
            urls: &RedirectUrls,
        ) -> DonationResult<CheckoutSession> {
            Ok(CheckoutSession {
                session_id: format!("cs_{}", donation.unit_price.amount),
                provider: self.provider_name().to_string(),
                checkout_url: Some(urls.success_url()),
                payment_intent_id: None,
                expires_at: None,
                created_at: Utc::now(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_gateway_through_trait_object() {
        let gateway: BoxedCheckoutGateway = Arc::new(FixedGateway);
        let donation = Donation::new(DonationAmount::new(12.34).unwrap());
        let urls = RedirectUrls::new("https://example.org");

        let session = gateway.create_checkout(&donation, &urls).await.unwrap();
        assert_eq!(session.session_id, "cs_1234");
        assert_eq!(session.provider, "fixed");
    }
}

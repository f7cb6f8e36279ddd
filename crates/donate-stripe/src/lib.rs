//! # donate-stripe
//!
//! Stripe Checkout gateway for the donation checkout service.
//!
//! Each donation becomes one Checkout Session: card payments, one-time
//! mode, a single NGN line item named "Donation".
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use donate_stripe::{StripeCheckoutGateway, StripeConfig};
//! use donate_core::{CheckoutGateway, DonationRequest, RedirectUrls};
//!
//! let gateway = StripeCheckoutGateway::new(StripeConfig::new("sk_test_..."))?;
//!
//! let donation = DonationRequest::from_body(body).into_donation()?;
//! let session = gateway
//!     .create_checkout(&donation, &RedirectUrls::new("https://r2a.netlify.app"))
//!     .await?;
//!
//! // Return session.session_id to the client
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeCheckoutGateway;
pub use config::StripeConfig;

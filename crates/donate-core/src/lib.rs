//! # donate-core
//!
//! Core types and traits for the donation checkout service.
//!
//! This crate provides:
//! - `CheckoutGateway` trait for implementing payment providers
//! - `DonationAmount`, `Currency` and `Price` for amount validation and
//!   minor-unit conversion
//! - `DonationRequest`, `Donation` and `CheckoutSession` for the checkout flow
//! - `DonationError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use donate_core::{CheckoutGateway, DonationRequest, RedirectUrls};
//!
//! let donation = DonationRequest::from_body(br#"{"amount": 1000}"#).into_donation()?;
//! let urls = RedirectUrls::new("https://r2a.netlify.app");
//!
//! let session = gateway.create_checkout(&donation, &urls).await?;
//! // Hand session.session_id back to the client
//! ```

pub mod amount;
pub mod donation;
pub mod error;
pub mod gateway;

// Re-exports for convenience
pub use amount::{Currency, DonationAmount, Price};
pub use donation::{
    CheckoutSession, Donation, DonationRequest, DONATION_PRODUCT_DESCRIPTION,
    DONATION_PRODUCT_NAME,
};
pub use error::{DonationError, DonationResult, INVALID_AMOUNT_MESSAGE};
pub use gateway::{BoxedCheckoutGateway, CheckoutGateway, RedirectUrls};

//! # Request Handlers
//!
//! Axum request handlers for the donation API.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use donate_core::{DonationError, DonationRequest, INVALID_AMOUNT_MESSAGE};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

/// Plain-text body served at `/`
pub const LIVENESS_MESSAGE: &str = "Donation checkout backend is running";

/// Fixed `error` text for gateway failures; the cause goes in `details`
pub const GATEWAY_ERROR_MESSAGE: &str = "An error occurred while processing payment";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create checkout response
#[derive(Debug, Serialize)]
pub struct CreateCheckoutResponse {
    /// Gateway session ID
    pub id: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn donation_error_to_response(err: DonationError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let response = match err {
        DonationError::InvalidAmount => ErrorResponse::new(INVALID_AMOUNT_MESSAGE),
        other => ErrorResponse::new(GATEWAY_ERROR_MESSAGE).with_details(other.details()),
    };
    (status, Json(response))
}

/// True when `Content-Type` is `application/json`, ignoring parameters
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness probe
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "donate-checkout",
        "provider": state.gateway.provider_name(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a checkout session for a donation
///
/// The body is read raw so that a missing, empty or non-JSON body reports
/// an invalid amount instead of an extractor rejection. Only an
/// `application/json` body is decoded; any other content type counts as a
/// missing amount.
#[instrument(skip(state, headers, body), fields(body_len = body.len()))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateCheckoutResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = if is_json_content_type(&headers) {
        DonationRequest::from_body(&body)
    } else {
        DonationRequest::default()
    };
    let raw_amount = request.amount.clone();

    let donation = request.into_donation().map_err(|e| {
        warn!("Invalid donation amount: {:?}", raw_amount);
        donation_error_to_response(e)
    })?;

    info!(
        "Received donation: amount={}, unit_amount={}",
        donation.total().display(),
        donation.unit_price.amount
    );

    let session = state
        .gateway
        .create_checkout(&donation, &state.urls)
        .await
        .map_err(|e| {
            error!("Failed to create checkout session: {}", e);
            donation_error_to_response(e)
        })?;

    info!(
        "Created checkout session: id={}, provider={}",
        session.session_id, session.provider
    );

    Ok(Json(CreateCheckoutResponse {
        id: session.session_id,
    }))
}

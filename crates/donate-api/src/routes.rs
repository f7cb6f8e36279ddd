//! # Routes
//!
//! Axum router configuration for the donation API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Largest accepted request body
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Create the main application router
///
/// Routes:
///   - GET  /                         - Liveness (plain text)
///   - GET  /health                   - Health check (JSON)
///   - POST /create-checkout-session  - Create checkout session
pub fn create_router(state: AppState) -> Router {
    // Only the client app and the local dev server may POST cross-origin
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origins())
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ));

    Router::new()
        .route("/", get(handlers::liveness))
        .route("/health", get(handlers::health))
        .route(
            "/create-checkout-session",
            post(handlers::create_checkout_session),
        )
        // Middleware
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security_headers)
                .layer(cors),
        )
        // State
        .with_state(state)
}

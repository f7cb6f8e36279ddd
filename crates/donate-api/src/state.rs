//! # Application State
//!
//! Configuration read once at startup, and the shared state handed to every
//! request handler. The gateway is built here and injected; nothing global.

use axum::http::HeaderValue;
use donate_core::{BoxedCheckoutGateway, DonationError, DonationResult, RedirectUrls};
use donate_stripe::{StripeCheckoutGateway, StripeConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

/// Client application used for redirects when `CLIENT_URL` is unset
pub const DEFAULT_CLIENT_URL: &str = "https://r2a.netlify.app";

/// Local frontend dev server, always allowed cross-origin
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:3000";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Stripe secret key
    pub secret_key: String,
    /// Base URL of the client application, no trailing slash
    pub client_url: String,
    /// Address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Stripe API base override
    pub stripe_api_base: Option<String>,
}

impl AppConfig {
    /// Load from environment variables (and `.env`, if present)
    pub fn from_env() -> DonationResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> DonationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let secret_key = var("STRIPE_SECRET_KEY").ok_or_else(|| {
            DonationError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;

        let client_url = var("CLIENT_URL")
            .unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(client_url.starts_with("http://") || client_url.starts_with("https://"))
            || HeaderValue::from_str(&client_url).is_err()
        {
            return Err(DonationError::Configuration(format!(
                "CLIENT_URL must be an http(s) URL, got {:?}",
                client_url
            )));
        }

        let host = match var("HOST") {
            Some(h) => h.parse().map_err(|_| {
                DonationError::Configuration(format!("HOST is not an IP address: {:?}", h))
            })?,
            None => DEFAULT_HOST,
        };

        let port = match var("PORT") {
            Some(p) => p.parse().map_err(|_| {
                DonationError::Configuration(format!("PORT is not a valid port: {:?}", p))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            secret_key,
            client_url,
            host,
            port,
            stripe_api_base: var("STRIPE_API_BASE"),
        })
    }

    /// Config with defaults and an explicit key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            client_url: DEFAULT_CLIENT_URL.to_string(),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            stripe_api_base: None,
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Origins allowed to POST cross-origin
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        [self.client_url.as_str(), LOCAL_DEV_ORIGIN]
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect()
    }

    /// Post-payment redirect targets
    pub fn redirect_urls(&self) -> RedirectUrls {
        RedirectUrls::new(&self.client_url)
    }

    /// Stripe settings derived from this config
    pub fn stripe_config(&self) -> StripeConfig {
        let config = StripeConfig::new(&self.secret_key);
        match &self.stripe_api_base {
            Some(base) => config.with_api_base_url(base),
            None => config,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret_key", &"<redacted>")
            .field("client_url", &self.client_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("stripe_api_base", &self.stripe_api_base)
            .finish()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway, built once at startup
    pub gateway: BoxedCheckoutGateway,
    /// Redirect URLs
    pub urls: RedirectUrls,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state backed by the Stripe gateway
    pub fn new(config: AppConfig) -> DonationResult<Self> {
        let gateway = StripeCheckoutGateway::new(config.stripe_config())?;
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Create state around an already-built gateway
    pub fn with_gateway(config: AppConfig, gateway: BoxedCheckoutGateway) -> Self {
        Self {
            urls: config.redirect_urls(),
            gateway,
            config,
        }
    }
}

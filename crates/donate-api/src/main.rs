//! # Donate Checkout
//!
//! Creates Stripe Checkout Sessions for one-time donations.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export STRIPE_SECRET_KEY=sk_test_...
//! export CLIENT_URL=https://r2a.netlify.app
//! export PORT=5000
//!
//! # Run the server
//! donate-checkout
//! ```

use donate_api::{routes, AppConfig, AppState};
use tokio::signal;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Fail fast on bad configuration, before anything binds
    let config = AppConfig::from_env().map_err(|e| {
        error!("{}", e);
        e
    })?;

    let stripe = config.stripe_config();
    info!("STRIPE_SECRET_KEY: loaded");
    if stripe.is_live_mode() {
        info!("Stripe mode: live");
    } else if stripe.is_test_mode() {
        info!("Stripe mode: test");
    } else {
        warn!("STRIPE_SECRET_KEY has an unrecognised prefix; Stripe will likely reject it");
    }
    info!("CLIENT_URL: {}", config.client_url);

    let state = AppState::new(config)?;
    let addr = state.config.socket_addr();

    info!("Payment provider: {}", state.gateway.provider_name());
    info!("Success redirect: {}", state.urls.success_url());
    info!("Cancel redirect: {}", state.urls.cancel_url());

    let app = routes::create_router(state);

    info!("Donate checkout listening on http://{}", addr);
    info!("Checkout: POST http://{}/create-checkout-session", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Error handling Ctrl+C signal: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

fn print_banner() {
    println!(
        r#"
  Donate Checkout
  ━━━━━━━━━━━━━━━━━━━━━━━
  Stripe donation backend
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}

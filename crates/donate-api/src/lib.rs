//! # donate-api
//!
//! HTTP API layer for the donation checkout service.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness (plain text) |
//! | GET | `/health` | Health check |
//! | POST | `/create-checkout-session` | Create checkout session for `{ "amount": number }` |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};

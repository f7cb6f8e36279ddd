//! # Donation Error Types
//!
//! Typed error handling for the donation checkout service.
//! All donation operations return `Result<T, DonationError>`.

use thiserror::Error;

/// Message returned to callers for any rejected amount
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid donation amount";

/// Core error type for all donation operations
#[derive(Debug, Error)]
pub enum DonationError {
    /// Amount missing, non-numeric, non-finite or not positive
    #[error("{}", INVALID_AMOUNT_MESSAGE)]
    InvalidAmount,

    /// Startup configuration errors (missing secret key, malformed URL or port)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment gateway rejected the request
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Gateway response could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DonationError {
    /// Returns true if the failure came from the outbound gateway call
    pub fn is_gateway_failure(&self) -> bool {
        matches!(
            self,
            DonationError::ProviderError { .. }
                | DonationError::NetworkError(_)
                | DonationError::Serialization(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            DonationError::InvalidAmount => 400,
            DonationError::Configuration(_) => 500,
            DonationError::ProviderError { .. } => 500,
            DonationError::NetworkError(_) => 500,
            DonationError::Serialization(_) => 500,
        }
    }

    /// Underlying message, without the variant prefix
    pub fn details(&self) -> String {
        match self {
            DonationError::InvalidAmount => INVALID_AMOUNT_MESSAGE.to_string(),
            DonationError::Configuration(msg)
            | DonationError::NetworkError(msg)
            | DonationError::Serialization(msg) => msg.clone(),
            DonationError::ProviderError { message, .. } => message.clone(),
        }
    }
}

/// Result type alias for donation operations
pub type DonationResult<T> = Result<T, DonationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_failures() {
        assert!(DonationError::NetworkError("timeout".into()).is_gateway_failure());
        assert!(DonationError::ProviderError {
            provider: "stripe".into(),
            message: "Invalid API Key provided".into()
        }
        .is_gateway_failure());
        assert!(!DonationError::InvalidAmount.is_gateway_failure());
        assert!(!DonationError::Configuration("missing".into()).is_gateway_failure());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DonationError::InvalidAmount.status_code(), 400);
        assert_eq!(
            DonationError::ProviderError {
                provider: "stripe".into(),
                message: "declined".into()
            }
            .status_code(),
            500
        );
        assert_eq!(DonationError::NetworkError("reset".into()).status_code(), 500);
    }

    #[test]
    fn test_invalid_amount_message() {
        assert_eq!(
            DonationError::InvalidAmount.to_string(),
            "Invalid donation amount"
        );
    }

    #[test]
    fn test_details_strip_prefix() {
        let err = DonationError::ProviderError {
            provider: "stripe".into(),
            message: "Invalid API Key provided: sk_test_***".into(),
        };
        assert_eq!(err.details(), "Invalid API Key provided: sk_test_***");
        assert_eq!(
            err.to_string(),
            "Provider error [stripe]: Invalid API Key provided: sk_test_***"
        );
    }
}

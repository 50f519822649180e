//! Typed REST client for the Delight Display backend.
//!
//! # Architecture
//!
//! - JSON request/response bodies mapped with `serde` (camelCase on the wire)
//! - The backend is the source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for catalog responses (5 minute TTL)
//! - Bearer token persisted to disk so sessions survive restarts
//!
//! # Example
//!
//! ```rust,ignore
//! use delight_storefront::api::ApiClient;
//! use delight_storefront::config::StorefrontConfig;
//!
//! let config = StorefrontConfig::from_env()?;
//! let client = ApiClient::new(&config);
//!
//! // Browse the catalog
//! let products = client.get_featured_products().await?;
//!
//! // Log in and add to the server-side cart
//! client.login("user@example.com", "hunter2!").await?;
//! let cart = client.add_to_cart(&products[0].id, 1).await?;
//! ```

mod cache;
mod client;
pub mod token;
pub mod types;

pub use client::ApiClient;
pub use token::{TokenStore, TokenStoreError};
pub use types::*;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend rejected the request with a non-2xx status.
    ///
    /// `message` is the server's human-readable `message` field when the
    /// error body carries one, otherwise a generic text naming the status.
    #[error("{message}")]
    Request {
        /// HTTP status of the rejected request.
        status: StatusCode,
        /// Human-readable description of the rejection.
        message: String,
    },

    /// The on-disk token store could not be read or written.
    #[error("Token store error: {0}")]
    Token(#[from] TokenStoreError),

    /// A request was rejected before any network call was made.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status of the rejection, if this is a [`ApiError::Request`].
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_surfaces_server_message() {
        let err = ApiError::Request {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_request_error_generic_message() {
        let err = ApiError::Request {
            status: StatusCode::NOT_FOUND,
            message: "Request failed with status 404".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 404");
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::from(parse_err);
        assert!(err.to_string().starts_with("JSON parse error:"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ApiError::Validation("rating must be between 1 and 5, got 9".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: rating must be between 1 and 5, got 9"
        );
    }

    #[test]
    fn test_token_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ApiError::from(TokenStoreError::Io {
            path: "/tmp/token.json".into(),
            source: io_err,
        });
        assert!(err.to_string().starts_with("Token store error:"));
    }
}

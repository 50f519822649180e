//! Typed REST client for the backend's admin surface.
//!
//! # Architecture
//!
//! - JSON request/response bodies mapped with `serde` (camelCase on the wire)
//! - Shared entities (products, orders, users) come from `delight_core::dto`;
//!   the admin-only shapes (dashboard, analytics, CRUD inputs) live here
//! - The bearer token is held in memory only; it is provisioned from
//!   configuration or handed over from a storefront login
//!
//! # Example
//!
//! ```rust,ignore
//! use delight_admin::api::AdminClient;
//! use delight_admin::config::AdminConfig;
//!
//! let config = AdminConfig::from_env()?;
//! let client = AdminClient::new(&config);
//!
//! let stats = client.dashboard().await?;
//! println!("{} orders, {} revenue", stats.total_orders, stats.total_revenue);
//! ```

mod client;
pub mod types;

pub use client::AdminClient;
pub use types::*;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the admin API.
#[derive(Debug, Error)]
pub enum AdminError {
    /// HTTP transport failed (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend rejected the request with a non-2xx status. A 403
    /// here usually means the token belongs to a non-admin account.
    #[error("{message}")]
    Request {
        /// HTTP status of the rejected request.
        status: StatusCode,
        /// Human-readable description of the rejection.
        message: String,
    },

    /// No bearer token is held; admin endpoints always require one.
    #[error("No admin token configured; set DELIGHT_ADMIN_TOKEN or log in first")]
    NoToken,
}

impl AdminError {
    /// HTTP status of the rejection, if this is a [`AdminError::Request`].
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

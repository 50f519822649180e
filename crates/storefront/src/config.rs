//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DELIGHT_API_BASE_URL` - Base URL of the store backend, including the
//!   API prefix (e.g., `http://localhost:8080/api`)
//!
//! ## Optional
//! - `DELIGHT_TOKEN_PATH` - Where the bearer token is persisted between
//!   sessions (default: `.delight/token.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_TOKEN_PATH: &str = ".delight/token.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the store backend, including the API prefix
    pub base_url: Url,
    /// Path of the file the bearer token is persisted to
    pub token_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DELIGHT_API_BASE_URL` is missing or does
    /// not parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("DELIGHT_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("DELIGHT_API_BASE_URL".to_string(), e.to_string())
            })?;
        let token_path = PathBuf::from(get_env_or_default("DELIGHT_TOKEN_PATH", DEFAULT_TOKEN_PATH));

        Ok(Self {
            base_url,
            token_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default_falls_back() {
        let value = get_env_or_default("DELIGHT_TEST_UNSET_VAR", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_missing_env_var_display() {
        let err = ConfigError::MissingEnvVar("DELIGHT_API_BASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: DELIGHT_API_BASE_URL"
        );
    }

    #[test]
    fn test_invalid_env_var_display() {
        let err = ConfigError::InvalidEnvVar(
            "DELIGHT_API_BASE_URL".to_string(),
            "relative URL without a base".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Invalid environment variable DELIGHT_API_BASE_URL: relative URL without a base"
        );
    }

    #[test]
    fn test_base_url_accepts_api_prefix() {
        let url: Url = "http://localhost:8080/api".parse().unwrap();
        assert_eq!(url.path(), "/api");
    }
}

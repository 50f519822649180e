//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DELIGHT_API_BASE_URL` - Base URL of the store backend, including the
//!   API prefix (e.g., `http://localhost:8080/api`)
//!
//! ## Optional
//! - `DELIGHT_ADMIN_TOKEN` - Bearer token of an admin account, for
//!   non-interactive use. When absent the caller must supply a token
//!   obtained from a login.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const MIN_TOKEN_LENGTH: usize = 32;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin client configuration.
///
/// Implements `Debug` manually to redact the admin token.
#[derive(Clone)]
pub struct AdminConfig {
    /// Base URL of the store backend, including the API prefix
    pub base_url: Url,
    /// Pre-provisioned admin bearer token, if configured
    pub admin_token: Option<SecretString>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "admin_token",
                &self.admin_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DELIGHT_API_BASE_URL` is missing or
    /// invalid, or if `DELIGHT_ADMIN_TOKEN` is set but fails validation
    /// (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("DELIGHT_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("DELIGHT_API_BASE_URL".to_string(), e.to_string())
            })?;

        let admin_token = match get_optional_env("DELIGHT_ADMIN_TOKEN") {
            Some(token) => {
                validate_secret_strength(&token, "DELIGHT_ADMIN_TOKEN")?;
                Some(SecretString::from(token))
            }
            None => None,
        };

        Ok(Self {
            base_url,
            admin_token,
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

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Reject tokens that look like placeholders or carry too little entropy
/// to be a real credential.
fn validate_secret_strength(value: &str, var_name: &str) -> Result<(), ConfigError> {
    let lowered = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lowered.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("looks like a placeholder (contains \"{pattern}\")"),
            ));
        }
    }

    if value.len() < MIN_TOKEN_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {MIN_TOKEN_LENGTH} characters (got {})",
                value.len()
            ),
        ));
    }

    let entropy = shannon_entropy(value);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("entropy too low ({entropy:.2} bits/char, need {MIN_ENTROPY_BITS_PER_CHAR})"),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_token_rejected() {
        let err = validate_secret_strength("your-admin-token-here-padded-out-long", "T");
        assert!(matches!(err, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_short_token_rejected() {
        let err = validate_secret_strength("aB3xQ9", "T");
        assert!(matches!(err, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_low_entropy_token_rejected() {
        let err = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "T");
        assert!(matches!(err, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_realistic_jwt_accepted() {
        // Shape of a real (expired) JWT: three base64url segments.
        let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiI5IiwiaWF0IjoxNzA5ODIxOTAzfQ.\
                     k4vR7mQ2pX8wN1cJ5tY0bG6hL3sD9fA2eU7iO4nM8qZ";
        assert!(validate_secret_strength(token, "T").is_ok());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = AdminConfig {
            base_url: "http://localhost:8080/api".parse().unwrap(),
            admin_token: Some(SecretString::from("eyJhbGciOiJIUzI1NiJ9.x.y")),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("eyJhbGci"));
    }

    #[test]
    fn test_shannon_entropy_bounds() {
        assert!(shannon_entropy("") < f64::EPSILON);
        assert!(shannon_entropy("aaaa") < 0.1);
        assert!(shannon_entropy("aXb3Yc9Zq1Wd5Ve7") > 3.0);
    }
}

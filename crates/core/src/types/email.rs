//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

// RFC 5321 path limit.
const MAX_LEN: usize = 254;

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input string exceeds the RFC 5321 length limit.
    #[error("email must be at most {MAX_LEN} characters")]
    TooLong,
    /// The input is not of the form `local@domain`.
    #[error("email must look like local@domain")]
    Malformed,
}

/// A structurally valid email address.
///
/// This is a pre-flight gate for login and registration forms, not RFC
/// 5322 parsing: the backend remains the authority on deliverability.
/// Accepted inputs are non-empty, at most 254 characters, free of
/// whitespace, and shaped `local@domain` with both sides non-empty.
///
/// ```
/// use delight_core::Email;
///
/// assert!(Email::parse("shopper@example.com").is_ok());
/// assert!(Email::parse("not-an-address").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] when the input is empty, over 254
    /// characters, or not shaped `local@domain`.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > MAX_LEN {
            return Err(EmailError::TooLong);
        }
        match s.split_once('@') {
            Some((local, domain))
                if !local.is_empty()
                    && !domain.is_empty()
                    && !s.chars().any(char::is_whitespace) =>
            {
                Ok(Self(s.to_owned()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_shapes() {
        for input in [
            "shopper@example.com",
            "first.last+tag@shop.example.co.uk",
            "a@b",
        ] {
            assert!(Email::parse(input).is_ok(), "rejected {input}");
        }
    }

    #[test]
    fn test_rejects_structural_junk() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("no-at-sign"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("@example.com"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("shopper@"), Err(EmailError::Malformed));
        assert_eq!(
            Email::parse("shop per@example.com"),
            Err(EmailError::Malformed)
        );
    }

    #[test]
    fn test_rejects_over_length() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::parse(&long), Err(EmailError::TooLong));
    }

    #[test]
    fn test_display_and_from_str_round_trip() {
        let email: Email = "shopper@example.com".parse().unwrap();
        assert_eq!(email.to_string(), "shopper@example.com");
        assert_eq!(email.as_str(), "shopper@example.com");
    }

    #[test]
    fn test_serializes_as_bare_string() {
        let email = Email::parse("shopper@example.com").unwrap();
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"shopper@example.com\""
        );
    }
}

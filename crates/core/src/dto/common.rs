//! Shared response shapes.

use serde::{Deserialize, Serialize};

/// A bare acknowledgement from the backend.
///
/// Some endpoints answer with `{"message": "..."}`, some with an empty
/// object, and some with no body at all; all three parse, defaulting
/// `message` to empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageResponse {
    /// Human-readable acknowledgement text.
    pub message: String,
}

impl<'de> Deserialize<'de> for MessageResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            message: String,
        }

        let inner = Option::<Inner>::deserialize(deserializer)?;
        Ok(inner.map_or_else(Self::default, |i| Self { message: i.message }))
    }
}

/// Destination bucket for `POST /files/upload/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Product,
    Category,
    Avatar,
}

impl UploadKind {
    /// Path segment used by the upload endpoint.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Category => "category",
            Self::Avatar => "avatar",
        }
    }
}

impl std::fmt::Display for UploadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response from a successful file upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public URL of the stored file.
    pub url: String,
}

//! On-disk persistence for the session bearer token.
//!
//! The token survives process restarts in a small JSON file holding a single
//! `token` key. Reads and writes are synchronous so a login or logout has
//! durably recorded the token by the time the call returns.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur reading or writing the token file.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Reading, writing, or deleting the file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path of the token file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file exists but does not hold the expected JSON shape.
    #[error("Malformed token file at {path}: {source}")]
    Malformed {
        /// Path of the token file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// Stored file shape: `{"token": "..."}`.
#[derive(Serialize, Deserialize)]
struct TokenFile {
    token: String,
}

/// File-backed store for the session bearer token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store persisting to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted token, if any.
    ///
    /// A missing file means no session is stored and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(&self) -> Result<Option<SecretString>, TokenStoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(TokenStoreError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let file: TokenFile =
            serde_json::from_str(&contents).map_err(|e| TokenStoreError::Malformed {
                path: self.path.clone(),
                source: e,
            })?;

        Ok(Some(SecretString::from(file.token)))
    }

    /// Persist a token, replacing any previous one.
    ///
    /// Parent directories are created as needed. The write has completed
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot
    /// be written.
    pub fn save(&self, token: &SecretString) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| TokenStoreError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let file = TokenFile {
            token: token.expose_secret().to_string(),
        };
        let json = serde_json::to_string(&file).map_err(|e| TokenStoreError::Malformed {
            path: self.path.clone(),
            source: e,
        })?;

        std::fs::write(&self.path, json).map_err(|e| TokenStoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Delete the persisted token.
    ///
    /// Deleting when no file exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

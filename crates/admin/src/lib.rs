//! Delight Display admin console library.
//!
//! A typed client for the backend's role-gated `/admin` surface plus the
//! catalog CRUD and file-upload endpoints. Authorization lives entirely
//! in the backend; this client just carries an admin bearer token.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;

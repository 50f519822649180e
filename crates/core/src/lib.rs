//! Delight Core - Shared types library.
//!
//! This crate provides common types used across all Delight Display components:
//! - `storefront` - Shopper-facing API client and store state container
//! - `admin` - Admin console API client
//! - `cli` - Command-line front end for both
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`dto`] - Wire-format entities shared by the storefront and admin clients

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod dto;
pub mod types;

pub use dto::*;
pub use types::*;

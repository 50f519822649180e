//! Delight Display storefront library.
//!
//! This crate provides the typed REST client for the store backend and the
//! store state container that sits on top of it, allowing both to be tested
//! and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod store;

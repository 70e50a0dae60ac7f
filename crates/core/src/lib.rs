//! Mobile Storefront Core - Canonical models.
//!
//! This crate provides the backend-agnostic shapes consumed by every part of
//! the mobile storefront:
//! - `storefront` - Per-domain API clients and payload transformers
//! - `cli` - Command-line access to the same API functions
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no vendor
//! wire formats. Transformers in the `storefront` crate produce these models
//! fresh on every call; nothing here is mutated in place.
//!
//! # Modules
//!
//! - [`types`] - Cart, profile, order, and product models

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

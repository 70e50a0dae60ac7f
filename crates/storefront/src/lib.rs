//! Mobile Storefront API layer.
//!
//! Per-domain HTTP clients for the storefront backend and the transformers
//! that turn its payloads into the canonical models from
//! `mobile_storefront_core`.
//!
//! # Example
//!
//! ```rust,ignore
//! use mobile_storefront::{ApiClients, ApiConfig, api};
//!
//! let mut clients = ApiClients::new(&ApiConfig::from_env()?);
//! clients.initialize_all()?;
//!
//! let token = api::auth::request_token(&clients.auth, email, &password).await?;
//! clients.authorize_all(&token)?;
//!
//! let cart = api::cart::fetch_cart(&clients.cart).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod magento;
pub mod registry;

pub use clients::ApiClients;
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use registry::{Domain, DomainClient, DomainClientRegistry, RegistryError, RegistryState};

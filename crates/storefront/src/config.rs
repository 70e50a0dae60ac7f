//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_API_BASE_URL` - Root URL shared by every domain
//!
//! ## Optional
//! - `STOREFRONT_AUTH_URL` - Base URL override for the auth domain
//! - `STOREFRONT_CART_URL` - Base URL override for the cart domain
//! - `STOREFRONT_ORDERS_URL` - Base URL override for the orders domain
//! - `STOREFRONT_PRODUCTS_URL` - Base URL override for the products domain

use thiserror::Error;
use url::Url;

use crate::registry::Domain;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Base URLs for every API domain.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub auth_url: Url,
    pub cart_url: Url,
    pub orders_url: Url,
    pub products_url: Url,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is missing or any URL is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is missing or any URL is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_key = "STOREFRONT_API_BASE_URL";
        let base = lookup(base_key).ok_or_else(|| ConfigError::MissingEnvVar(base_key.to_string()))?;
        let base_url = parse_url(base_key, &base)?;

        let domain_url = |key: &str| -> Result<Url, ConfigError> {
            lookup(key).map_or_else(|| Ok(base_url.clone()), |value| parse_url(key, &value))
        };

        Ok(Self {
            auth_url: domain_url("STOREFRONT_AUTH_URL")?,
            cart_url: domain_url("STOREFRONT_CART_URL")?,
            orders_url: domain_url("STOREFRONT_ORDERS_URL")?,
            products_url: domain_url("STOREFRONT_PRODUCTS_URL")?,
        })
    }

    /// Use one base URL for every domain.
    #[must_use]
    pub fn with_base_url(base_url: &Url) -> Self {
        Self {
            auth_url: base_url.clone(),
            cart_url: base_url.clone(),
            orders_url: base_url.clone(),
            products_url: base_url.clone(),
        }
    }

    /// Base URL for a domain.
    #[must_use]
    pub const fn base_url(&self, domain: Domain) -> &Url {
        match domain {
            Domain::Auth => &self.auth_url,
            Domain::Cart => &self.cart_url,
            Domain::Orders => &self.orders_url,
            Domain::Products => &self.products_url,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a URL and require an HTTP(S) scheme.
fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    match url.scheme() {
        "https" => Ok(url),
        "http" => {
            tracing::warn!(key, url = %url, "API base URL is not using HTTPS");
            Ok(url)
        }
        scheme => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported URL scheme: {scheme}"),
        )),
    }
}

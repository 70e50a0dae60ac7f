//! Per-domain HTTP client lifecycle.
//!
//! Each API domain (auth, cart, orders, products) owns one
//! [`DomainClientRegistry`]. The registry moves through three states:
//!
//! ```text
//! Uninitialized --initialize()--> Initialized --authorize(token)--> Authorized
//! ```
//!
//! Mutating operations take `&mut self`, so "initialize before use" and
//! "no concurrent re-initialization" are enforced by the borrow checker
//! instead of a lock. [`DomainClientRegistry::get_client`] hands out an owned
//! [`DomainClient`] snapshot that keeps working even if the registry is
//! re-initialized or re-authorized afterwards.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut cart = DomainClientRegistry::new(Domain::Cart, config.cart_url.clone());
//! cart.initialize()?;
//! cart.authorize(&token)?;
//!
//! let summary = api::cart::fetch_cart_summary(&cart).await?;
//! ```

mod augmentation;
mod client;

pub use augmentation::{
    APP_PLATFORM, APP_PLATFORM_HEADER, APP_VERSION, APP_VERSION_HEADER, Augmentation,
    BearerToken, RequestContext, SCOPE_HEADER, StaticHeader, VersionHeaders,
};
pub use client::DomainClient;

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

/// Client-wide request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

/// A bounded API area with its own base URL and client lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Auth,
    Cart,
    Orders,
    Products,
}

impl Domain {
    /// Every domain, in startup order.
    pub const ALL: [Self; 4] = [Self::Auth, Self::Cart, Self::Orders, Self::Products];

    /// Name sent in the `Scope` header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Cart => "cart",
            Self::Orders => "orders",
            Self::Products => "products",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by registry lifecycle operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// `get_client()` or `authorize()` was called before `initialize()`.
    #[error("{domain} API client not initialized")]
    NotInitialized { domain: Domain },

    /// An API function was handed the registry of another domain.
    #[error("expected the {expected} API client, got {actual}")]
    DomainMismatch { expected: Domain, actual: Domain },

    /// The credential cannot be sent as a header value.
    #[error("invalid credential for {domain} API client")]
    InvalidCredential { domain: Domain },

    /// The underlying HTTP client could not be built.
    #[error("failed to build {domain} API client: {source}")]
    Build {
        domain: Domain,
        #[source]
        source: reqwest::Error,
    },
}

/// Observable lifecycle state of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Initialized,
    Authorized,
}

/// Owns the HTTP client and header augmentations for one domain.
pub struct DomainClientRegistry {
    domain: Domain,
    base_url: Url,
    active: Option<ActiveClient>,
}

struct ActiveClient {
    http: reqwest::Client,
    augmentations: Vec<Arc<dyn Augmentation>>,
    /// Position of the bearer-token augmentation, once authorized.
    credential_slot: Option<usize>,
}

impl DomainClientRegistry {
    /// Create an uninitialized registry.
    #[must_use]
    pub const fn new(domain: Domain, base_url: Url) -> Self {
        Self {
            domain,
            base_url,
            active: None,
        }
    }

    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub const fn state(&self) -> RegistryState {
        match &self.active {
            None => RegistryState::Uninitialized,
            Some(active) if active.credential_slot.is_some() => RegistryState::Authorized,
            Some(_) => RegistryState::Initialized,
        }
    }

    /// Build the HTTP client and register the version headers.
    ///
    /// Calling this again builds a new client and replaces the current one,
    /// dropping any credential. Handles returned by earlier
    /// [`get_client`](Self::get_client) calls keep using the old client.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Build`] if the HTTP client cannot be built.
    pub fn initialize(&mut self) -> Result<(), RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| RegistryError::Build {
                domain: self.domain,
                source,
            })?;

        if self.active.is_some() {
            warn!(domain = %self.domain, "API client re-initialized, replacing previous client");
        }

        self.active = Some(ActiveClient {
            http,
            augmentations: vec![Arc::new(VersionHeaders::new(self.domain))],
            credential_slot: None,
        });

        info!(domain = %self.domain, base_url = %self.base_url, "API client initialized");
        Ok(())
    }

    /// Attach a bearer credential to every subsequent request.
    ///
    /// Re-authorizing replaces the previous credential in place rather than
    /// stacking a second one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotInitialized`] before `initialize()`, or
    /// [`RegistryError::InvalidCredential`] if the token is not a valid
    /// header value.
    pub fn authorize(&mut self, token: &SecretString) -> Result<(), RegistryError> {
        let domain = self.domain;
        let active = self
            .active
            .as_mut()
            .ok_or(RegistryError::NotInitialized { domain })?;

        let bearer: Arc<dyn Augmentation> = Arc::new(
            BearerToken::new(token).map_err(|_| RegistryError::InvalidCredential { domain })?,
        );

        if let Some(slot) = active.credential_slot
            && let Some(existing) = active.augmentations.get_mut(slot)
        {
            *existing = bearer;
            info!(%domain, "API client credential replaced");
        } else {
            active.credential_slot = Some(active.augmentations.len());
            active.augmentations.push(bearer);
            info!(%domain, "API client authorized");
        }

        Ok(())
    }

    /// Append a caller-supplied augmentation after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotInitialized`] before `initialize()`.
    pub fn register_augmentation(
        &mut self,
        augmentation: Arc<dyn Augmentation>,
    ) -> Result<(), RegistryError> {
        let domain = self.domain;
        let active = self
            .active
            .as_mut()
            .ok_or(RegistryError::NotInitialized { domain })?;

        tracing::debug!(%domain, augmentation = augmentation.name(), "augmentation registered");
        active.augmentations.push(augmentation);
        Ok(())
    }

    /// Get a handle to the active client.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotInitialized`] before `initialize()`.
    pub fn get_client(&self) -> Result<DomainClient, RegistryError> {
        let active = self.active.as_ref().ok_or(RegistryError::NotInitialized {
            domain: self.domain,
        })?;

        Ok(DomainClient::new(
            self.domain,
            active.http.clone(),
            self.base_url.clone(),
            active.augmentations.clone().into(),
        ))
    }

    /// Get the active client, checking that this registry serves `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DomainMismatch`] for the wrong registry, or
    /// [`RegistryError::NotInitialized`] before `initialize()`.
    pub fn client_for(&self, expected: Domain) -> Result<DomainClient, RegistryError> {
        if self.domain != expected {
            return Err(RegistryError::DomainMismatch {
                expected,
                actual: self.domain,
            });
        }
        self.get_client()
    }
}

impl std::fmt::Debug for DomainClientRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainClientRegistry")
            .field("domain", &self.domain)
            .field("base_url", &self.base_url.as_str())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

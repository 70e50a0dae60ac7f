//! The full set of domain registries.

use secrecy::SecretString;

use crate::config::ApiConfig;
use crate::registry::{Domain, DomainClientRegistry, RegistryError};

/// One registry per domain, built from a shared configuration.
///
/// Startup calls [`initialize_all`](Self::initialize_all) before any API
/// function runs; login calls [`authorize_all`](Self::authorize_all).
#[derive(Debug)]
pub struct ApiClients {
    pub auth: DomainClientRegistry,
    pub cart: DomainClientRegistry,
    pub orders: DomainClientRegistry,
    pub products: DomainClientRegistry,
}

impl ApiClients {
    /// Create uninitialized registries for every domain.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let registry = |domain| DomainClientRegistry::new(domain, config.base_url(domain).clone());

        Self {
            auth: registry(Domain::Auth),
            cart: registry(Domain::Cart),
            orders: registry(Domain::Orders),
            products: registry(Domain::Products),
        }
    }

    /// Registry for a domain.
    #[must_use]
    pub const fn registry(&self, domain: Domain) -> &DomainClientRegistry {
        match domain {
            Domain::Auth => &self.auth,
            Domain::Cart => &self.cart,
            Domain::Orders => &self.orders,
            Domain::Products => &self.products,
        }
    }

    fn registries_mut(&mut self) -> [&mut DomainClientRegistry; 4] {
        [
            &mut self.auth,
            &mut self.cart,
            &mut self.orders,
            &mut self.products,
        ]
    }

    /// Initialize every registry, in [`Domain::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns the first registry error; registries after it stay
    /// uninitialized.
    pub fn initialize_all(&mut self) -> Result<(), RegistryError> {
        for registry in self.registries_mut() {
            registry.initialize()?;
        }
        Ok(())
    }

    /// Attach a credential to every registry.
    ///
    /// # Errors
    ///
    /// Returns the first registry error, e.g. when called before
    /// [`initialize_all`](Self::initialize_all).
    pub fn authorize_all(&mut self, token: &SecretString) -> Result<(), RegistryError> {
        for registry in self.registries_mut() {
            registry.authorize(token)?;
        }
        Ok(())
    }
}

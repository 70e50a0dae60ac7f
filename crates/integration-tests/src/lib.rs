//! Integration tests for the mobile storefront API layer.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mobile-storefront-integration-tests
//! ```
//!
//! Every test starts its own `httpmock` server, so no backend is needed.
//!
//! # Test Categories
//!
//! - `registry_headers` - Header augmentation as seen on the wire
//! - `cart_api` - Cart fetches and error propagation
//! - `auth_api` - Login, profile validation and transformation
//! - `catalog_api` - Orders and products listings

use httpmock::MockServer;
use serde_json::{Value, json};
use url::Url;

use mobile_storefront::{ApiClients, ApiConfig, Domain, DomainClientRegistry};

/// Registries for every domain pointed at a mock server, not yet initialized.
///
/// # Panics
///
/// Panics if the mock server URL cannot be parsed.
#[must_use]
pub fn clients_for(server: &MockServer) -> ApiClients {
    let base_url = Url::parse(&server.base_url()).expect("mock server URL");
    ApiClients::new(&ApiConfig::with_base_url(&base_url))
}

/// An initialized registry for one domain pointed at a mock server.
///
/// # Panics
///
/// Panics if the registry cannot be initialized.
#[must_use]
pub fn initialized(server: &MockServer, domain: Domain) -> DomainClientRegistry {
    let mut registry = DomainClientRegistry::new(
        domain,
        Url::parse(&server.base_url()).expect("mock server URL"),
    );
    registry.initialize().expect("initialize registry");
    registry
}

/// The Coca-Cola cart line used across cart tests.
#[must_use]
pub fn cart_item_payload() -> Value {
    json!({
        "item_id": 1,
        "product_id": 1,
        "name": "Coca-Cola Classic",
        "image_url": "https://cdn.example.com/coca-cola.png",
        "price": 1.99,
        "special_price": 1.49,
        "qty": 2,
        "max_qty": 10,
        "in_stock": true,
        "added_at": "2024-01-15T10:00:00Z"
    })
}

/// A cart whose backend `items_count` differs from its line count.
#[must_use]
pub fn cart_payload() -> Value {
    json!({
        "id": 77,
        "customer_id": 1001,
        "items": [cart_item_payload()],
        "items_count": 2,
        "subtotal": 2.98,
        "tax_amount": 0.24,
        "shipping_amount": 0,
        "grand_total": 3.22,
        "currency_code": "USD",
        "updated_at": "2024-01-15T10:05:00Z"
    })
}

/// A valid customer payload.
#[must_use]
pub fn user_payload() -> Value {
    json!({
        "id": 1001,
        "email": "maria@example.com",
        "first_name": "Maria",
        "last_name": "Costa",
        "gender": 1,
        "is_email_verified": true,
        "is_phone_verified": true,
        "created_at": "2023-06-01T08:00:00Z",
        "updated_at": "2024-01-10T12:30:00Z"
    })
}

//! Domain API functions.
//!
//! Each function takes the registry of its domain, issues exactly one HTTP
//! call through the registry's client, and passes the response through the
//! matching transformer. Registries are injected rather than looked up, so
//! callers decide which instance (and which credential) a call uses.

pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;

/// Default page size for listings.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Query parameters for a paginated listing.
fn page_query(page: u32, page_size: u32) -> [(&'static str, String); 2] {
    [
        ("page", page.max(1).to_string()),
        ("page_size", page_size.to_string()),
    ]
}

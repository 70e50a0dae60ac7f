//! Cart domain API.

use tracing::instrument;

use mobile_storefront_core::{Cart, CartSummary};

use crate::error::ApiError;
use crate::magento::{MagentoCart, MagentoCartSummary, transform_cart, transform_cart_summary};
use crate::registry::{Domain, DomainClientRegistry};

/// Fetch the current customer's cart.
///
/// # Errors
///
/// Returns an error if the cart registry is not initialized, the request
/// fails, or the payload does not match the cart wire format.
#[instrument(skip(registry))]
pub async fn fetch_cart(registry: &DomainClientRegistry) -> Result<Cart, ApiError> {
    let client = registry.client_for(Domain::Cart)?;
    let raw: MagentoCart = client.get(&["cart"], &[]).await?;
    Ok(transform_cart(raw))
}

/// Fetch only the cart totals.
///
/// # Errors
///
/// Returns an error if the cart registry is not initialized, the request
/// fails, or the payload does not match the summary wire format.
#[instrument(skip(registry))]
pub async fn fetch_cart_summary(registry: &DomainClientRegistry) -> Result<CartSummary, ApiError> {
    let client = registry.client_for(Domain::Cart)?;
    let raw: MagentoCartSummary = client.get(&["cart", "summary"], &[]).await?;
    Ok(transform_cart_summary(raw))
}

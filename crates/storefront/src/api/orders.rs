//! Orders domain API.

use tracing::instrument;

use mobile_storefront_core::{Order, Page};

use super::page_query;
use crate::error::ApiError;
use crate::magento::{MagentoOrder, MagentoSearchResult, transform_order, transform_order_page};
use crate::registry::{Domain, DomainClientRegistry};

/// Fetch one page of the customer's orders (pages start at 1).
///
/// # Errors
///
/// Returns an error if the orders registry is not initialized, the request
/// fails, or the payload does not match the listing wire format.
#[instrument(skip(registry))]
pub async fn fetch_orders(
    registry: &DomainClientRegistry,
    page: u32,
    page_size: u32,
) -> Result<Page<Order>, ApiError> {
    let client = registry.client_for(Domain::Orders)?;
    let raw: MagentoSearchResult<MagentoOrder> =
        client.get(&["orders"], &page_query(page, page_size)).await?;
    Ok(transform_order_page(raw))
}

/// Fetch a single order.
///
/// # Errors
///
/// Returns an error if the orders registry is not initialized, the order
/// does not exist, or the payload does not match the order wire format.
#[instrument(skip(registry))]
pub async fn fetch_order(registry: &DomainClientRegistry, order_id: &str) -> Result<Order, ApiError> {
    let client = registry.client_for(Domain::Orders)?;
    let raw: MagentoOrder = client.get(&["orders", order_id], &[]).await?;
    Ok(transform_order(raw))
}

//! Products domain API.

use tracing::instrument;

use mobile_storefront_core::{Page, Product};

use super::page_query;
use crate::error::ApiError;
use crate::magento::{MagentoProduct, MagentoSearchResult, transform_product, transform_product_page};
use crate::registry::{Domain, DomainClientRegistry};

/// Fetch one page of the catalog (pages start at 1).
///
/// # Errors
///
/// Returns an error if the products registry is not initialized, the
/// request fails, or the payload does not match the listing wire format.
#[instrument(skip(registry))]
pub async fn fetch_products(
    registry: &DomainClientRegistry,
    page: u32,
    page_size: u32,
) -> Result<Page<Product>, ApiError> {
    let client = registry.client_for(Domain::Products)?;
    let raw: MagentoSearchResult<MagentoProduct> =
        client.get(&["products"], &page_query(page, page_size)).await?;
    Ok(transform_product_page(raw))
}

/// Fetch a single product.
///
/// # Errors
///
/// Returns an error if the products registry is not initialized, the
/// product does not exist, or the payload does not match the product wire
/// format.
#[instrument(skip(registry))]
pub async fn fetch_product(
    registry: &DomainClientRegistry,
    product_id: &str,
) -> Result<Product, ApiError> {
    let client = registry.client_for(Domain::Products)?;
    let raw: MagentoProduct = client.get(&["products", product_id], &[]).await?;
    Ok(transform_product(raw))
}

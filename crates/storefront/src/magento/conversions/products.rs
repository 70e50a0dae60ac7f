//! Product transformers.

use mobile_storefront_core::{Page, Product};

use crate::magento::types::{MagentoProduct, MagentoSearchResult};

/// Convert a product.
#[must_use]
pub fn transform_product(product: MagentoProduct) -> Product {
    Product {
        id: product.id.to_string(),
        sku: product.sku,
        name: product.name,
        description: product.description,
        price: product.price,
        promo_price: product.special_price,
        image: product.image_url,
        in_stock: product.in_stock,
        category_ids: product
            .category_ids
            .into_iter()
            .map(|id| id.to_string())
            .collect(),
    }
}

/// Convert a product listing.
#[must_use]
pub fn transform_product_page(result: MagentoSearchResult<MagentoProduct>) -> Page<Product> {
    Page {
        items: result.items.into_iter().map(transform_product).collect(),
        total_count: result.total_count,
    }
}

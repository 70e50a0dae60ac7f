//! Cart transformers.
//!
//! Aggregates are renamed, never recomputed: `items_count` is kept exactly as
//! sent even when it disagrees with the number of lines.

use mobile_storefront_core::{Cart, CartItem, CartSummary};

use crate::magento::types::{MagentoCart, MagentoCartItem, MagentoCartSummary};

/// Convert a cart line.
#[must_use]
pub fn transform_cart_item(item: MagentoCartItem) -> CartItem {
    CartItem {
        id: item.item_id.to_string(),
        product_id: item.product_id.to_string(),
        product_name: item.name,
        product_image: item.image_url,
        price: item.price,
        promo_price: item.special_price,
        quantity: item.qty,
        max_quantity: item.max_qty,
        in_stock: item.in_stock,
        added_at: item.added_at,
    }
}

/// Convert a full cart. Line order is preserved.
#[must_use]
pub fn transform_cart(cart: MagentoCart) -> Cart {
    Cart {
        id: cart.id.to_string(),
        user_id: cart.customer_id.to_string(),
        items: cart.items.into_iter().map(transform_cart_item).collect(),
        item_count: cart.items_count,
        subtotal: cart.subtotal,
        tax: cart.tax_amount,
        shipping: cart.shipping_amount,
        total: cart.grand_total,
        currency: cart.currency_code,
        updated_at: cart.updated_at,
    }
}

/// Convert a cart summary.
#[must_use]
pub fn transform_cart_summary(summary: MagentoCartSummary) -> CartSummary {
    CartSummary {
        item_count: summary.items_count,
        subtotal: summary.subtotal,
        tax: summary.tax_amount,
        shipping: summary.shipping_amount,
        total: summary.grand_total,
        currency: summary.currency_code,
    }
}

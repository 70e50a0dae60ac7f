//! Order transformers.

use tracing::warn;

use mobile_storefront_core::{Order, OrderItem, OrderStatus, Page};

use crate::magento::types::{MagentoOrder, MagentoOrderItem, MagentoSearchResult};

/// Map a Magento order status code.
#[must_use]
pub fn transform_order_status(status: &str) -> OrderStatus {
    match status {
        "pending" | "pending_payment" => OrderStatus::Pending,
        "processing" => OrderStatus::Processing,
        "complete" => OrderStatus::Completed,
        "canceled" => OrderStatus::Cancelled,
        "closed" => OrderStatus::Refunded,
        "holded" => OrderStatus::OnHold,
        other => {
            warn!(status = other, "Unknown order status");
            OrderStatus::Unknown
        }
    }
}

/// Convert an order line.
#[must_use]
pub fn transform_order_item(item: MagentoOrderItem) -> OrderItem {
    OrderItem {
        id: item.item_id.to_string(),
        product_id: item.product_id.to_string(),
        product_name: item.name,
        sku: item.sku,
        price: item.price,
        quantity: item.qty_ordered,
    }
}

/// Convert an order.
#[must_use]
pub fn transform_order(order: MagentoOrder) -> Order {
    Order {
        id: order.entity_id.to_string(),
        order_number: order.increment_id,
        user_id: order.customer_id.to_string(),
        status: transform_order_status(&order.status),
        items: order.items.into_iter().map(transform_order_item).collect(),
        subtotal: order.subtotal,
        tax: order.tax_amount,
        shipping: order.shipping_amount,
        total: order.grand_total,
        currency: order.order_currency_code,
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}

/// Convert an order listing.
#[must_use]
pub fn transform_order_page(result: MagentoSearchResult<MagentoOrder>) -> Page<Order> {
    Page {
        items: result.items.into_iter().map(transform_order).collect(),
        total_count: result.total_count,
    }
}

//! Cart models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line in a shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Cart line ID.
    pub id: String,
    /// ID of the product this line refers to.
    pub product_id: String,
    /// Product display name.
    pub product_name: String,
    /// Product image URL.
    pub product_image: String,
    /// Regular unit price.
    pub price: Decimal,
    /// Promotional unit price. The backend only sends one below `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_price: Option<Decimal>,
    /// Quantity in the cart (always positive).
    pub quantity: u32,
    /// Maximum orderable quantity, as capped by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// When the line was added (timestamp as sent by the backend).
    pub added_at: String,
}

impl CartItem {
    /// Unit price the customer actually pays.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.promo_price.unwrap_or(self.price)
    }

    /// Whether a promotional price applies to this line.
    #[must_use]
    pub const fn is_on_promo(&self) -> bool {
        self.promo_price.is_some()
    }
}

/// A customer's shopping cart.
///
/// `item_count` is the backend's own aggregate and is not derived from
/// `items`; the two can legitimately differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart ID.
    pub id: String,
    /// Owning customer ID.
    pub user_id: String,
    /// Cart lines in server order.
    pub items: Vec<CartItem>,
    /// Item count as aggregated by the backend.
    pub item_count: u32,
    /// Subtotal before tax and shipping.
    pub subtotal: Decimal,
    /// Tax amount.
    pub tax: Decimal,
    /// Shipping amount.
    pub shipping: Decimal,
    /// Grand total.
    pub total: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl Cart {
    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Totals-only projection of a [`Cart`], independently fetchable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub currency: String,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            item_count: cart.item_count,
            subtotal: cart.subtotal,
            tax: cart.tax,
            shipping: cart.shipping,
            total: cart.total,
            currency: cart.currency.clone(),
        }
    }
}

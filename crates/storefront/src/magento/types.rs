//! Wire types for Magento API payloads.
//!
//! These mirror the backend JSON exactly and are only ever deserialized.

use rust_decimal::Decimal;
use serde::Deserialize;

// =============================================================================
// Cart
// =============================================================================

/// A cart line as sent by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoCartItem {
    pub item_id: u64,
    pub product_id: u64,
    pub name: String,
    pub image_url: String,
    pub price: Decimal,
    #[serde(default)]
    pub special_price: Option<Decimal>,
    pub qty: u32,
    #[serde(default)]
    pub max_qty: Option<u32>,
    pub in_stock: bool,
    pub added_at: String,
}

/// `GET /cart` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoCart {
    pub id: u64,
    pub customer_id: u64,
    #[serde(default)]
    pub items: Vec<MagentoCartItem>,
    pub items_count: u32,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub shipping_amount: Decimal,
    pub grand_total: Decimal,
    pub currency_code: String,
    pub updated_at: String,
}

/// `GET /cart/summary` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoCartSummary {
    pub items_count: u32,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub shipping_amount: Decimal,
    pub grand_total: Decimal,
    pub currency_code: String,
}

// =============================================================================
// Customer
// =============================================================================

/// Customer address.
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// `GET /customers/me` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoUser {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub shop_type: Option<String>,
    #[serde(default)]
    pub address: Option<MagentoAddress>,
    #[serde(default)]
    pub taxvat: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    /// 1 = male, 2 = female, anything else = other.
    ///
    /// Kept untyped: some stores send the code as a string or drop in a
    /// label, and neither may fail the whole profile.
    #[serde(default)]
    pub gender: Option<serde_json::Value>,
    pub is_email_verified: bool,
    pub is_phone_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// Orders
// =============================================================================

/// An order line.
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoOrderItem {
    pub item_id: u64,
    pub product_id: u64,
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    pub qty_ordered: u32,
}

/// An order.
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoOrder {
    pub entity_id: u64,
    pub increment_id: String,
    pub customer_id: u64,
    pub status: String,
    #[serde(default)]
    pub items: Vec<MagentoOrderItem>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub shipping_amount: Decimal,
    pub grand_total: Decimal,
    pub order_currency_code: String,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// Products
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoProduct {
    pub id: u64,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub special_price: Option<Decimal>,
    pub image_url: String,
    pub in_stock: bool,
    #[serde(default)]
    pub category_ids: Vec<u64>,
}

// =============================================================================
// Listings
// =============================================================================

/// Paginated listing envelope (`items` plus `total_count`).
#[derive(Debug, Clone, Deserialize)]
pub struct MagentoSearchResult<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub total_count: u64,
}

//! Product model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Display name.
    pub name: String,
    /// Long description (may contain HTML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Regular price.
    pub price: Decimal,
    /// Promotional price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_price: Option<Decimal>,
    /// Primary image URL.
    pub image: String,
    pub in_stock: bool,
    /// IDs of the categories this product belongs to.
    pub category_ids: Vec<String>,
}

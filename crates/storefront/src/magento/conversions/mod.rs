//! Transformers from Magento wire types to canonical models.

pub mod cart;
pub mod orders;
pub mod products;
pub mod profile;

pub use cart::{transform_cart, transform_cart_item, transform_cart_summary};
pub use orders::{transform_order, transform_order_item, transform_order_page, transform_order_status};
pub use products::{transform_product, transform_product_page};
pub use profile::{transform_address, transform_user_profile};

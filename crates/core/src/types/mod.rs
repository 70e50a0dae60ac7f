//! Canonical types for the mobile storefront.
//!
//! Field names serialize in camelCase, which is what the UI layer consumes.

pub mod cart;
pub mod order;
pub mod page;
pub mod product;
pub mod profile;

pub use cart::{Cart, CartItem, CartSummary};
pub use order::{Order, OrderItem, OrderStatus};
pub use page::Page;
pub use product::Product;
pub use profile::{Address, Gender, ShopType, UserProfile};

//! Magento backend wire format.
//!
//! # Architecture
//!
//! - [`types`] mirrors the backend payloads field for field (snake_case,
//!   numeric identifiers, vendor enumerations)
//! - [`conversions`] holds the pure transformers from wire shapes to the
//!   canonical models in `mobile_storefront_core`
//! - [`validation`] checks raw payloads before they are trusted
//!
//! Transformers assume their input is well formed. Anything that needs
//! checking goes through validation first.

pub mod conversions;
pub mod types;
pub mod validation;

pub use conversions::*;
pub use types::*;
pub use validation::{ValidationError, validate_magento_user};

//! Customer profile transformers.

use tracing::warn;

use mobile_storefront_core::{Address, Gender, ShopType, UserProfile};

use crate::magento::types::{MagentoAddress, MagentoUser};

/// Convert a customer address.
#[must_use]
pub fn transform_address(address: MagentoAddress) -> Address {
    Address {
        street: address.street,
        city: address.city,
        state: address.state,
        zip_code: address.zip_code,
        country: address.country,
    }
}

/// Convert a customer record.
///
/// `gender` is always populated: a missing or unrecognized code becomes
/// [`Gender::Other`].
#[must_use]
pub fn transform_user_profile(user: MagentoUser) -> UserProfile {
    let shop_type = user.shop_type.as_deref().and_then(|value| {
        let parsed = ShopType::parse(value);
        if parsed.is_none() {
            warn!(shop_type = value, "Unknown shop type, dropping");
        }
        parsed
    });

    UserProfile {
        id: user.id.to_string(),
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        phone: user.phone,
        shop_type,
        address: user.address.map(transform_address),
        vat_number: user.taxvat,
        avatar: user.avatar_url,
        date_of_birth: user.dob,
        gender: Gender::from_code(user.gender.as_ref().and_then(serde_json::Value::as_i64)),
        is_email_verified: user.is_email_verified,
        is_phone_verified: user.is_phone_verified,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

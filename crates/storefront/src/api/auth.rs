//! Auth domain API: login and the signed-in customer's profile.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use mobile_storefront_core::UserProfile;

use crate::error::ApiError;
use crate::magento::{MagentoUser, transform_user_profile, validate_magento_user};
use crate::registry::{Domain, DomainClientRegistry};

/// Exchange customer credentials for an access token.
///
/// The backend answers with a bare JSON string. The returned token is what
/// callers hand to [`crate::ApiClients::authorize_all`].
///
/// # Errors
///
/// Returns an error if the auth registry is not initialized, the backend
/// rejects the credentials, or the response is not a JSON string.
#[instrument(skip(registry, password))]
pub async fn request_token(
    registry: &DomainClientRegistry,
    email: &str,
    password: &SecretString,
) -> Result<SecretString, ApiError> {
    let client = registry.client_for(Domain::Auth)?;
    let body = serde_json::json!({
        "username": email,
        "password": password.expose_secret(),
    });

    let token: String = client.post(&["customers", "token"], &body).await?;
    debug!("Customer token issued");
    Ok(SecretString::from(token))
}

/// Fetch the signed-in customer's profile.
///
/// The raw payload is validated before it is transformed.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] naming the first missing or mistyped
/// field, or any registry, transport, or parse error.
#[instrument(skip(registry))]
pub async fn fetch_profile(registry: &DomainClientRegistry) -> Result<UserProfile, ApiError> {
    let client = registry.client_for(Domain::Auth)?;
    let raw: serde_json::Value = client.get(&["customers", "me"], &[]).await?;

    validate_magento_user(&raw)?;

    let user: MagentoUser = serde_json::from_value(raw)?;
    Ok(transform_user_profile(user))
}

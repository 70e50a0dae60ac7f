//! Request augmentations.
//!
//! An augmentation receives the in-flight [`RequestContext`] and returns it
//! with headers added or overwritten. A registry applies its augmentations in
//! registration order over one header set, so for a repeated header name the
//! last augmentation wins.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::Domain;

/// Application version sent on every request.
pub const APP_VERSION: &str = "1.0.0";

/// Platform identifier sent on every request.
pub const APP_PLATFORM: &str = "mobile";

/// `App-Version` header.
pub const APP_VERSION_HEADER: &str = "app-version";

/// `App-Platform` header.
pub const APP_PLATFORM_HEADER: &str = "app-platform";

/// `Scope` header carrying the domain name.
pub const SCOPE_HEADER: &str = "scope";

/// An outgoing request before it is handed to the HTTP client.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl RequestContext {
    /// Create a context with no headers.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Header value as a string, if present and visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A header-injection rule applied to every outgoing request.
pub trait Augmentation: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Return the context with this augmentation's headers applied.
    fn apply(&self, ctx: RequestContext) -> RequestContext;
}

/// Adds `App-Version`, `App-Platform` and `Scope`.
#[derive(Debug, Clone, Copy)]
pub struct VersionHeaders {
    domain: Domain,
}

impl VersionHeaders {
    #[must_use]
    pub const fn new(domain: Domain) -> Self {
        Self { domain }
    }
}

impl Augmentation for VersionHeaders {
    fn name(&self) -> &'static str {
        "version-headers"
    }

    fn apply(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.headers.insert(
            HeaderName::from_static(APP_VERSION_HEADER),
            HeaderValue::from_static(APP_VERSION),
        );
        ctx.headers.insert(
            HeaderName::from_static(APP_PLATFORM_HEADER),
            HeaderValue::from_static(APP_PLATFORM),
        );
        ctx.headers.insert(
            HeaderName::from_static(SCOPE_HEADER),
            HeaderValue::from_static(self.domain.as_str()),
        );
        ctx
    }
}

/// Sets `Authorization: Bearer <token>`.
///
/// The header value is built once and marked sensitive so it never shows up
/// in `Debug` output.
#[derive(Clone)]
pub struct BearerToken {
    value: HeaderValue,
}

impl BearerToken {
    /// Build the augmentation from a credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains characters not allowed in a
    /// header value.
    pub fn new(token: &SecretString) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl Augmentation for BearerToken {
    fn name(&self) -> &'static str {
        "bearer-token"
    }

    fn apply(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.headers.insert(AUTHORIZATION, self.value.clone());
        ctx
    }
}

/// Sets one fixed header.
#[derive(Debug, Clone)]
pub struct StaticHeader {
    name: HeaderName,
    value: HeaderValue,
}

impl StaticHeader {
    #[must_use]
    pub const fn new(name: HeaderName, value: HeaderValue) -> Self {
        Self { name, value }
    }
}

impl Augmentation for StaticHeader {
    fn name(&self) -> &'static str {
        "static-header"
    }

    fn apply(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.headers.insert(self.name.clone(), self.value.clone());
        ctx
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ctx() -> RequestContext {
        RequestContext::new(Method::GET, Url::parse("https://api.example.com/cart").unwrap())
    }

    #[test]
    fn test_version_headers() {
        let ctx = VersionHeaders::new(Domain::Orders).apply(ctx());

        assert_eq!(ctx.header("App-Version"), Some("1.0.0"));
        assert_eq!(ctx.header("App-Platform"), Some("mobile"));
        assert_eq!(ctx.header("Scope"), Some("orders"));
        assert_eq!(ctx.header("Authorization"), None);
    }

    #[test]
    fn test_bearer_token() {
        let token = BearerToken::new(&SecretString::from("abc123")).unwrap();
        let ctx = token.apply(ctx());

        assert_eq!(ctx.header("authorization"), Some("Bearer abc123"));
        assert!(ctx.headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_bearer_token_rejects_control_characters() {
        assert!(BearerToken::new(&SecretString::from("abc\n123")).is_err());
    }

    #[test]
    fn test_bearer_token_debug_redacts() {
        let token = BearerToken::new(&SecretString::from("super_secret_token")).unwrap();
        let debug_output = format!("{token:?}");

        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }
}

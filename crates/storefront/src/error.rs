//! Unified error type for API functions.
//!
//! Every API function returns `Result<T, ApiError>`. Failures are surfaced to
//! the caller, never logged and swallowed; retry policy belongs to whoever
//! wraps these functions.

use thiserror::Error;

use crate::magento::ValidationError;
use crate::registry::RegistryError;

/// Errors that can occur when calling a domain API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registry misuse (not initialized, wrong domain, bad credential).
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Payload failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Returns true if the backend rejected the credential.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Returns true if the backend reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

//! Raw payload validation.
//!
//! Validation runs on the untyped JSON before it is deserialized and
//! transformed. It stops at the first violation and reports that field only.

use serde_json::{Map, Value};
use thiserror::Error;

/// A payload failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    field: Option<String>,
}

impl ValidationError {
    /// Create an error with an explicit message and optional field.
    #[must_use]
    pub fn new(message: impl Into<String>, field: Option<&str>) -> Self {
        Self {
            message: message.into(),
            field: field.map(str::to_owned),
        }
    }

    /// A required field is absent, null, or an empty string.
    #[must_use]
    pub fn missing(field: &str) -> Self {
        Self::new(format!("Missing required field: {field}"), Some(field))
    }

    /// A field is present with the wrong JSON type.
    #[must_use]
    pub fn invalid_type(field: &str, expected: &str) -> Self {
        Self::new(format!("Field {field} must be a {expected}"), Some(field))
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending field, when known.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

/// Fields that must be present, in check order.
const REQUIRED_USER_FIELDS: &[&str] = &["id", "email", "first_name", "last_name"];

/// Fields that must be present and boolean, checked after the above.
const REQUIRED_USER_FLAGS: &[&str] = &["is_email_verified", "is_phone_verified"];

/// Timestamps that must be present, checked last.
const REQUIRED_USER_TIMESTAMPS: &[&str] = &["created_at", "updated_at"];

/// Validate a raw customer payload.
///
/// Checks, in order: identifier, email, first and last name, both
/// verification flags (present and boolean), then creation and update
/// timestamps.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_magento_user(raw: &Value) -> Result<(), ValidationError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ValidationError::new("Customer payload must be a JSON object", None))?;

    for field in REQUIRED_USER_FIELDS {
        require_present(obj, field)?;
    }

    for field in REQUIRED_USER_FLAGS {
        require_bool(obj, field)?;
    }

    for field in REQUIRED_USER_TIMESTAMPS {
        require_present(obj, field)?;
    }

    Ok(())
}

fn require_present<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::missing(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::missing(field)),
        Some(value) => Ok(value),
    }
}

fn require_bool(obj: &Map<String, Value>, field: &str) -> Result<bool, ValidationError> {
    require_present(obj, field)?
        .as_bool()
        .ok_or_else(|| ValidationError::invalid_type(field, "boolean"))
}

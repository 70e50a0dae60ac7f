//! Customer profile models.

use serde::{Deserialize, Serialize};

/// Customer gender as shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    /// Map a numeric backend gender code.
    ///
    /// `1` is male, `2` is female. Every other code, and a missing code,
    /// is [`Gender::Other`].
    #[must_use]
    pub const fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => Self::Male,
            Some(2) => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Kind of shop account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopType {
    Individual,
    Business,
}

impl ShopType {
    /// Parse a vendor shop type value. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "individual" => Some(Self::Individual),
            "business" => Some(Self::Business),
            _ => None,
        }
    }
}

/// A postal address. Every field is required when the address is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// The signed-in customer's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Customer ID.
    pub id: String,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Account kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_type: Option<ShopType>,
    /// Primary address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// VAT registration number (business accounts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Date of birth as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Always present, even when the backend omits it.
    pub gender: Gender,
    pub is_email_verified: bool,
    pub is_phone_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl UserProfile {
    /// Get the customer's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Whether both email and phone have been verified.
    #[must_use]
    pub const fn is_fully_verified(&self) -> bool {
        self.is_email_verified && self.is_phone_verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_code() {
        assert_eq!(Gender::from_code(Some(1)), Gender::Male);
        assert_eq!(Gender::from_code(Some(2)), Gender::Female);
        assert_eq!(Gender::from_code(Some(0)), Gender::Other);
        assert_eq!(Gender::from_code(Some(3)), Gender::Other);
        assert_eq!(Gender::from_code(Some(-1)), Gender::Other);
        assert_eq!(Gender::from_code(None), Gender::Other);
    }

    #[test]
    fn test_shop_type_parse() {
        assert_eq!(ShopType::parse("individual"), Some(ShopType::Individual));
        assert_eq!(ShopType::parse("business"), Some(ShopType::Business));
        assert_eq!(ShopType::parse("Business"), None);
        assert_eq!(ShopType::parse(""), None);
    }

    #[test]
    fn test_full_name() {
        let mut profile = UserProfile {
            id: "1".to_string(),
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            phone: None,
            shop_type: None,
            address: None,
            vat_number: None,
            avatar: None,
            date_of_birth: None,
            gender: Gender::Other,
            is_email_verified: true,
            is_phone_verified: false,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-02T00:00:00Z".to_string(),
        };
        assert_eq!(profile.full_name(), "Ana Silva");
        assert!(!profile.is_fully_verified());

        profile.last_name = String::new();
        assert_eq!(profile.full_name(), "Ana");
    }
}

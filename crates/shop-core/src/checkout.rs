//! # Checkout Validation
//!
//! Customer info supplied at checkout time, and the pure validation
//! pass that runs before the session request is submitted. Field errors
//! are shown inline in the storefront and never sent upstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Customer-supplied shipping and contact fields.
///
/// Forwarded once to the session service; never persisted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub email: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}

/// A checkout form field that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    Email,
    Name,
    Address,
    City,
    PostalCode,
    Phone,
}

impl CheckoutField {
    /// Field name as used in the storefront form
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutField::Email => "email",
            CheckoutField::Name => "name",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::PostalCode => "postalCode",
            CheckoutField::Phone => "phone",
        }
    }
}

impl std::fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-to-message mapping produced by a validation pass.
///
/// An empty mapping means the record is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<CheckoutField, String>);

impl ValidationErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record an error for a field
    pub fn insert(&mut self, field: CheckoutField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Get the error message for a field, if any
    pub fn get(&self, field: CheckoutField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Check if the record passed validation
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over (field, message) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (CheckoutField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Postal-code convention for the shipping destination.
///
/// The storefront ships within Norway, but the convention is a rule
/// object rather than a hardcoded pattern so another market's format
/// can be swapped in.
pub trait PostalCodeRule: Send + Sync {
    /// Check a non-empty postal code against the convention
    fn matches(&self, code: &str) -> bool;

    /// Error message for a code that does not match
    fn message(&self) -> &str;
}

/// Norwegian postal codes: exactly 4 decimal digits
#[derive(Debug, Clone, Copy, Default)]
pub struct FourDigitPostalCode;

impl PostalCodeRule for FourDigitPostalCode {
    fn matches(&self, code: &str) -> bool {
        code.len() == 4 && code.chars().all(|c| c.is_ascii_digit())
    }

    fn message(&self) -> &str {
        "Postnummer må være 4 siffer"
    }
}

/// Checkout form validator.
///
/// All fields are checked independently (no short-circuit); the result
/// maps every failing field to its message.
pub struct Validator {
    postal_rule: Box<dyn PostalCodeRule>,
}

impl Validator {
    /// Create a validator with the Norwegian postal-code rule
    pub fn new() -> Self {
        Self {
            postal_rule: Box::new(FourDigitPostalCode),
        }
    }

    /// Builder: swap in a different postal-code convention
    pub fn with_postal_rule(mut self, rule: impl PostalCodeRule + 'static) -> Self {
        self.postal_rule = Box::new(rule);
        self
    }

    /// Validate a customer record. Pure; returns the error set.
    pub fn validate(&self, info: &CustomerInfo) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        let required = [
            (CheckoutField::Email, &info.email, "E-post er påkrevd"),
            (CheckoutField::Name, &info.name, "Navn er påkrevd"),
            (CheckoutField::Address, &info.address, "Adresse er påkrevd"),
            (CheckoutField::City, &info.city, "By er påkrevd"),
            (
                CheckoutField::PostalCode,
                &info.postal_code,
                "Postnummer er påkrevd",
            ),
            (CheckoutField::Phone, &info.phone, "Telefon er påkrevd"),
        ];

        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(field, message);
            }
        }

        if !info.email.trim().is_empty() && !is_valid_email(&info.email) {
            errors.insert(CheckoutField::Email, "Ugyldig e-postadresse");
        }

        if !info.postal_code.trim().is_empty() && !self.postal_rule.matches(&info.postal_code) {
            errors.insert(CheckoutField::PostalCode, self.postal_rule.message());
        }

        errors
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot with
/// characters on both sides in the domain part.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_customer() -> CustomerInfo {
        CustomerInfo {
            email: "ola@nordmann.no".to_string(),
            name: "Ola Nordmann".to_string(),
            address: "Karl Johans gate 1".to_string(),
            city: "Oslo".to_string(),
            postal_code: "0154".to_string(),
            phone: "+47 912 34 567".to_string(),
        }
    }

    #[test]
    fn test_valid_record_yields_no_errors() {
        let errors = Validator::new().validate(&valid_customer());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_email_yields_exactly_one_error() {
        let mut customer = valid_customer();
        customer.email = String::new();
        customer.name = "A".to_string();
        customer.address = "A".to_string();
        customer.city = "A".to_string();
        customer.postal_code = "0123".to_string();
        customer.phone = "1".to_string();

        let errors = Validator::new().validate(&customer);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(CheckoutField::Email), Some("E-post er påkrevd"));
    }

    #[test]
    fn test_short_postal_code_yields_exactly_one_error() {
        let mut customer = valid_customer();
        customer.postal_code = "123".to_string();

        let errors = Validator::new().validate(&customer);

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(CheckoutField::PostalCode),
            Some("Postnummer må være 4 siffer")
        );
    }

    #[test]
    fn test_postal_code_rejects_non_digits() {
        let mut customer = valid_customer();
        customer.postal_code = "01a4".to_string();

        let errors = Validator::new().validate(&customer);
        assert_eq!(errors.get(CheckoutField::PostalCode), Some("Postnummer må være 4 siffer"));
    }

    #[test]
    fn test_invalid_email_formats() {
        for bad in ["plainaddress", "a@b", "a@.no", "a@b.", "a b@c.no", "@b.no", "a@b@c.no"] {
            let mut customer = valid_customer();
            customer.email = bad.to_string();

            let errors = Validator::new().validate(&customer);
            assert_eq!(
                errors.get(CheckoutField::Email),
                Some("Ugyldig e-postadresse"),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_valid_email_formats() {
        for good in ["ola@nordmann.no", "a@b.c", "post+tag@sub.domain.no"] {
            let mut customer = valid_customer();
            customer.email = good.to_string();

            let errors = Validator::new().validate(&customer);
            assert!(errors.is_empty(), "expected {good:?} to be accepted");
        }
    }

    #[test]
    fn test_all_fields_checked_independently() {
        let errors = Validator::new().validate(&CustomerInfo::default());

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(CheckoutField::Name), Some("Navn er påkrevd"));
        assert_eq!(errors.get(CheckoutField::Phone), Some("Telefon er påkrevd"));
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let mut customer = valid_customer();
        customer.city = "   ".to_string();

        let errors = Validator::new().validate(&customer);
        assert_eq!(errors.get(CheckoutField::City), Some("By er påkrevd"));
    }

    #[test]
    fn test_pluggable_postal_rule() {
        struct FiveDigit;
        impl PostalCodeRule for FiveDigit {
            fn matches(&self, code: &str) -> bool {
                code.len() == 5 && code.chars().all(|c| c.is_ascii_digit())
            }
            fn message(&self) -> &str {
                "Postal code must be 5 digits"
            }
        }

        let mut customer = valid_customer();
        customer.postal_code = "12345".to_string();

        let validator = Validator::new().with_postal_rule(FiveDigit);
        assert!(validator.validate(&customer).is_empty());

        customer.postal_code = "0154".to_string();
        let errors = validator.validate(&customer);
        assert_eq!(
            errors.get(CheckoutField::PostalCode),
            Some("Postal code must be 5 digits")
        );
    }

    #[test]
    fn test_customer_info_json_field_names() {
        let json = serde_json::to_value(valid_customer()).unwrap();
        assert!(json.get("postalCode").is_some());
        assert!(json.get("postal_code").is_none());
    }
}

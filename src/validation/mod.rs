//! # Lead Validation
//!
//! Validation for prospective-customer intake payloads, run before any
//! network activity. The rule set is a data-driven table of
//! `(field, check)` pairs executed uniformly: every failing field
//! contributes exactly one error and collection never short-circuits, so a
//! form can show all broken fields at once.
//!
//! Key design points:
//! - Input is raw JSON (fields may be missing, wrong-typed, or extra);
//!   unknown keys are ignored.
//! - Field checks are independent of one another; there are no cross-field
//!   rules.
//! - Length checks apply to the string exactly as supplied, with no trimming.
//! - Enum matching is case-sensitive and exact.
//! - Pure: no I/O, no side effects.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::LeadRecord;

lazy_static! {
    /// Phone numbers: digits plus the separators a human types
    static ref PHONE_CHARSET_REGEX: Regex = Regex::new(r"^[0-9+\-\s()]+$").unwrap();
}

/// Allowed `businessType` values
pub const BUSINESS_TYPES: [&str; 4] = ["small_laundry", "chain", "dry_cleaner", "other"];

/// Allowed `interestedPlan` values
pub const INTERESTED_PLANS: [&str; 5] = ["free", "basic", "pro", "enterprise", "undecided"];

/// Allowed `expectedMonthlyOrders` values
pub const ORDER_VOLUMES: [&str; 5] = ["0-100", "100-500", "500-1000", "1000-5000", "5000+"];

/// Allowed `source` values
pub const LEAD_SOURCES: [&str; 4] = ["website", "pricing_page", "referral", "other"];

/// Sub-fields of the optional address record; each an optional string
const ADDRESS_FIELDS: [&str; 6] = ["line1", "line2", "city", "state", "pincode", "country"];

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

type FieldCheck = fn(Option<&Value>) -> Result<(), String>;

/// Rule table driving [`validate_lead`]. One entry per known field; order
/// here is the order errors are reported in.
const LEAD_FIELD_RULES: [(&str, FieldCheck); 11] = [
    ("name", check_name),
    ("email", check_email),
    ("phone", check_phone),
    ("businessName", check_business_name),
    ("businessType", check_business_type),
    ("address", check_address),
    ("interestedPlan", check_interested_plan),
    ("expectedMonthlyOrders", check_expected_monthly_orders),
    ("currentBranches", check_current_branches),
    ("message", check_message),
    ("source", check_source),
];

/// Validate a raw intake payload against the lead schema.
///
/// Returns the typed [`LeadRecord`] when every rule passes, or the full list
/// of field errors otherwise. Never performs I/O.
pub fn validate_lead(input: &Value) -> Result<LeadRecord, Vec<FieldError>> {
    let Some(fields) = input.as_object() else {
        return Err(vec![FieldError::new("", "Payload must be a JSON object")]);
    };

    let mut errors = Vec::new();
    for (field, check) in LEAD_FIELD_RULES {
        if let Err(message) = check(fields.get(field)) {
            errors.push(FieldError::new(field, message));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Every rule passed, so the typed decode cannot fail on a known field;
    // serde ignores unknown keys.
    serde_json::from_value(input.clone())
        .map_err(|e| vec![FieldError::new("", format!("Payload could not be decoded: {}", e))])
}

// Shared helpers

fn required_text(
    value: Option<&Value>,
    label: &str,
    min: usize,
    max: usize,
) -> Result<(), String> {
    let Some(value) = value else {
        return Err(format!("{} is required", label));
    };
    let Some(text) = value.as_str() else {
        return Err(format!("{} must be a string", label));
    };
    if text.is_empty() {
        return Err(format!("{} is required", label));
    }
    let length = text.chars().count();
    if length < min {
        return Err(format!("{} must be at least {} characters", label, min));
    }
    if length > max {
        return Err(format!("{} must not exceed {} characters", label, max));
    }
    Ok(())
}

fn optional_enum(value: Option<&Value>, label: &str, allowed: &[&str]) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    match value.as_str() {
        Some(text) if allowed.contains(&text) => Ok(()),
        _ => Err(format!("{} must be one of: {}", label, allowed.join(", "))),
    }
}

/// Structural email shape: exactly one `@`, a non-empty local part with no
/// embedded whitespace, and a domain part containing at least one `.`.
fn is_well_formed_email(raw: &str) -> bool {
    if raw.matches('@').count() != 1 {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.is_empty() || domain.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// Per-field checks

fn check_name(value: Option<&Value>) -> Result<(), String> {
    required_text(value, "Name", 2, 100)
}

fn check_email(value: Option<&Value>) -> Result<(), String> {
    let Some(value) = value else {
        return Err("Email is required".to_string());
    };
    match value.as_str() {
        Some(text) if is_well_formed_email(text) => Ok(()),
        _ => Err("Please enter a valid email address".to_string()),
    }
}

fn check_phone(value: Option<&Value>) -> Result<(), String> {
    let Some(value) = value else {
        return Err("Phone number is required".to_string());
    };
    let Some(text) = value.as_str() else {
        return Err("Phone number must be a string".to_string());
    };
    let length = text.chars().count();
    if length < 10 {
        return Err("Phone number must be at least 10 digits".to_string());
    }
    if length > 15 {
        return Err("Phone number must not exceed 15 digits".to_string());
    }
    if !PHONE_CHARSET_REGEX.is_match(text) {
        return Err("Please enter a valid phone number".to_string());
    }
    Ok(())
}

fn check_business_name(value: Option<&Value>) -> Result<(), String> {
    required_text(value, "Business name", 2, 200)
}

fn check_business_type(value: Option<&Value>) -> Result<(), String> {
    match value.and_then(Value::as_str) {
        Some(text) if BUSINESS_TYPES.contains(&text) => Ok(()),
        _ => Err("Please select a business type".to_string()),
    }
}

fn check_address(value: Option<&Value>) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    let Some(fields) = value.as_object() else {
        return Err("Address must be an object".to_string());
    };
    for key in ADDRESS_FIELDS {
        if let Some(sub) = fields.get(key) {
            if !sub.is_string() {
                return Err(format!("Address {} must be a string", key));
            }
        }
    }
    Ok(())
}

fn check_interested_plan(value: Option<&Value>) -> Result<(), String> {
    optional_enum(value, "Interested plan", &INTERESTED_PLANS)
}

fn check_expected_monthly_orders(value: Option<&Value>) -> Result<(), String> {
    optional_enum(value, "Expected monthly orders", &ORDER_VOLUMES)
}

fn check_current_branches(value: Option<&Value>) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    if !value.is_number() {
        return Err("Current branches must be a number".to_string());
    }
    let Some(branches) = value.as_u64() else {
        return Err("Current branches must be a whole number of at least 1".to_string());
    };
    if branches < 1 {
        return Err("Current branches must be at least 1".to_string());
    }
    if branches > u64::from(u32::MAX) {
        return Err("Current branches is out of range".to_string());
    }
    Ok(())
}

fn check_message(value: Option<&Value>) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    let Some(text) = value.as_str() else {
        return Err("Message must be a string".to_string());
    };
    if text.chars().count() > 1000 {
        return Err("Message must not exceed 1000 characters".to_string());
    }
    Ok(())
}

fn check_source(value: Option<&Value>) -> Result<(), String> {
    optional_enum(value, "Source", &LEAD_SOURCES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusinessType;
    use serde_json::json;

    fn valid_input() -> Value {
        json!({
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "9876543210",
            "businessName": "Test Business",
            "businessType": "small_laundry",
            "message": "Test message"
        })
    }

    #[test]
    fn test_valid_input_produces_typed_record() {
        let record = validate_lead(&valid_input()).unwrap();
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.business_type, BusinessType::SmallLaundry);
        assert_eq!(record.message.as_deref(), Some("Test message"));
        assert!(record.address.is_none());
    }

    #[test]
    fn test_missing_required_field_names_the_field() {
        let mut input = valid_input();
        input.as_object_mut().unwrap().remove("email");
        let errors = validate_lead(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_all_errors_collected_in_one_pass() {
        let input = json!({
            "email": "not-an-email",
            "phone": "123",
            "businessType": "franchise",
            "message": "m".repeat(1001)
        });
        let errors = validate_lead(&input).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["name", "email", "phone", "businessName", "businessType", "message"]
        );
    }

    #[test]
    fn test_non_object_payload_rejected() {
        assert!(validate_lead(&json!("just a string")).is_err());
        assert!(validate_lead(&json!(null)).is_err());
        assert!(validate_lead(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = valid_input();
        input.as_object_mut().unwrap().insert("utmCampaign".to_string(), json!("spring"));
        assert!(validate_lead(&input).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_well_formed_email("john@example.com"));
        assert!(is_well_formed_email("a1@b2.io"));
        assert!(!is_well_formed_email("plainaddress"));
        assert!(!is_well_formed_email("john@"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("a@@b.com"));
        assert!(!is_well_formed_email("a b@test.com"));
        assert!(!is_well_formed_email("a@test .com"));
        assert!(!is_well_formed_email("a@nodot"));
        assert!(!is_well_formed_email("a@.com"));
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(check_name(Some(&json!("J"))).is_err());
        assert!(check_name(Some(&json!(""))).is_err());
        assert!(check_name(Some(&json!("Jo"))).is_ok());
        assert!(check_name(Some(&json!("x".repeat(100)))).is_ok());
        assert!(check_name(Some(&json!("x".repeat(101)))).is_err());
        assert!(check_name(None).is_err());
        assert!(check_name(Some(&json!(42))).is_err());
    }

    #[test]
    fn test_name_length_is_not_trimmed() {
        // Raw length applies: two spaces satisfy the 2-char minimum.
        assert!(check_name(Some(&json!("  "))).is_ok());
    }

    #[test]
    fn test_phone_rules() {
        assert!(check_phone(Some(&json!("9876543210"))).is_ok());
        assert!(check_phone(Some(&json!("+91 (98) 765-4321"))).is_ok());
        assert!(check_phone(Some(&json!("987654321"))).is_err());
        assert!(check_phone(Some(&json!("9876543210123456"))).is_err());
        assert!(check_phone(Some(&json!("98765x4321"))).is_err());
        assert!(check_phone(None).is_err());
    }

    #[test]
    fn test_business_type_is_case_sensitive() {
        assert!(check_business_type(Some(&json!("chain"))).is_ok());
        assert!(check_business_type(Some(&json!("Chain"))).is_err());
        assert!(check_business_type(Some(&json!("CHAIN"))).is_err());
        assert!(check_business_type(Some(&json!(""))).is_err());
        assert!(check_business_type(None).is_err());
    }

    #[test]
    fn test_optional_enums() {
        assert!(check_interested_plan(None).is_ok());
        assert!(check_interested_plan(Some(&json!("pro"))).is_ok());
        assert!(check_interested_plan(Some(&json!("premium"))).is_err());
        assert!(check_expected_monthly_orders(Some(&json!("5000+"))).is_ok());
        assert!(check_expected_monthly_orders(Some(&json!("5000"))).is_err());
        assert!(check_source(Some(&json!("pricing_page"))).is_ok());
        assert!(check_source(Some(&json!("billboard"))).is_err());
    }

    #[test]
    fn test_explicit_null_is_rejected_even_for_optional_fields() {
        let mut input = valid_input();
        input.as_object_mut().unwrap().insert("source".to_string(), json!(null));
        let errors = validate_lead(&input).unwrap_err();
        assert_eq!(errors[0].field, "source");
    }

    #[test]
    fn test_current_branches() {
        assert!(check_current_branches(None).is_ok());
        assert!(check_current_branches(Some(&json!(1))).is_ok());
        assert!(check_current_branches(Some(&json!(12))).is_ok());
        assert!(check_current_branches(Some(&json!(0))).is_err());
        assert!(check_current_branches(Some(&json!(-3))).is_err());
        assert!(check_current_branches(Some(&json!(2.5))).is_err());
        assert!(check_current_branches(Some(&json!("2"))).is_err());
    }

    #[test]
    fn test_message_max_length() {
        assert!(check_message(None).is_ok());
        assert!(check_message(Some(&json!(""))).is_ok());
        assert!(check_message(Some(&json!("m".repeat(1000)))).is_ok());
        assert!(check_message(Some(&json!("m".repeat(1001)))).is_err());
    }

    #[test]
    fn test_address_subfields() {
        let mut input = valid_input();
        input.as_object_mut().unwrap().insert(
            "address".to_string(),
            json!({ "line1": "12 MG Road", "city": "Mumbai", "country": "India" }),
        );
        let record = validate_lead(&input).unwrap();
        let address = record.address.unwrap();
        assert_eq!(address.city.as_deref(), Some("Mumbai"));
        assert!(address.pincode.is_none());

        input
            .as_object_mut()
            .unwrap()
            .insert("address".to_string(), json!({ "pincode": 400001 }));
        let errors = validate_lead(&input).unwrap_err();
        assert_eq!(errors[0].field, "address");
    }

    #[test]
    fn test_full_record_round_trip() {
        let input = json!({
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "9876543210",
            "businessName": "Test Business",
            "businessType": "chain",
            "interestedPlan": "enterprise",
            "expectedMonthlyOrders": "1000-5000",
            "currentBranches": 4,
            "source": "referral"
        });
        let record = validate_lead(&input).unwrap();
        assert_eq!(record.current_branches, Some(4));
        assert_eq!(serde_json::to_value(&record).unwrap(), input);
    }
}

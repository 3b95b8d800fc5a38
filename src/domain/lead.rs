//! Lead intake domain types
//!
//! The prospective-customer payload submitted through the marketing site,
//! together with the enum value sets the validator enforces. Wire names are
//! camelCase; enum wire values are exact, case-sensitive strings.

use serde::{Deserialize, Serialize};

/// A validated prospective-customer intake payload.
///
/// Constructed transiently from raw form input by the lead validator; never
/// persisted by this crate. Identity (a lead ID) is assigned by the
/// collaborator on successful submission.
///
/// Optional fields that are absent are omitted from the serialized JSON
/// rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// Contact name, 2-100 characters
    pub name: String,

    /// Contact email, structurally well-formed
    pub email: String,

    /// Contact phone, 10-15 characters over `[0-9+\-\s()]`
    pub phone: String,

    /// Business name, 2-200 characters
    pub business_name: String,

    /// Kind of laundry business
    pub business_type: BusinessType,

    /// Optional business address; all sub-fields are optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Plan the prospect is interested in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interested_plan: Option<InterestedPlan>,

    /// Expected order volume bracket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_monthly_orders: Option<OrderVolume>,

    /// Number of branches currently operated, at least 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_branches: Option<u32>,

    /// Free-form message, at most 1000 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Where the lead came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<LeadSource>,
}

/// Optional business address attached to a lead. Every sub-field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Kind of laundry business a lead represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    SmallLaundry,
    Chain,
    DryCleaner,
    Other,
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessType::SmallLaundry => write!(f, "small_laundry"),
            BusinessType::Chain => write!(f, "chain"),
            BusinessType::DryCleaner => write!(f, "dry_cleaner"),
            BusinessType::Other => write!(f, "other"),
        }
    }
}

/// Plan a lead expressed interest in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestedPlan {
    Free,
    Basic,
    Pro,
    Enterprise,
    Undecided,
}

impl std::fmt::Display for InterestedPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterestedPlan::Free => write!(f, "free"),
            InterestedPlan::Basic => write!(f, "basic"),
            InterestedPlan::Pro => write!(f, "pro"),
            InterestedPlan::Enterprise => write!(f, "enterprise"),
            InterestedPlan::Undecided => write!(f, "undecided"),
        }
    }
}

/// Expected monthly order volume bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderVolume {
    #[serde(rename = "0-100")]
    UpTo100,
    #[serde(rename = "100-500")]
    From100To500,
    #[serde(rename = "500-1000")]
    From500To1000,
    #[serde(rename = "1000-5000")]
    From1000To5000,
    #[serde(rename = "5000+")]
    Above5000,
}

impl std::fmt::Display for OrderVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderVolume::UpTo100 => write!(f, "0-100"),
            OrderVolume::From100To500 => write!(f, "100-500"),
            OrderVolume::From500To1000 => write!(f, "500-1000"),
            OrderVolume::From1000To5000 => write!(f, "1000-5000"),
            OrderVolume::Above5000 => write!(f, "5000+"),
        }
    }
}

/// Where a lead originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Website,
    PricingPage,
    Referral,
    Other,
}

impl std::fmt::Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadSource::Website => write!(f, "website"),
            LeadSource::PricingPage => write!(f, "pricing_page"),
            LeadSource::Referral => write!(f, "referral"),
            LeadSource::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for LeadSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "website" => Ok(LeadSource::Website),
            "pricing_page" => Ok(LeadSource::PricingPage),
            "referral" => Ok(LeadSource::Referral),
            "other" => Ok(LeadSource::Other),
            _ => Err(format!(
                "unknown lead source '{}', expected one of: website, pricing_page, referral, other",
                s
            )),
        }
    }
}

/// What the collaborator returns when a lead is accepted.
///
/// The lead ID is informational; neither the validator nor the submission
/// state machine consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub lead_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_record() -> LeadRecord {
        LeadRecord {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "9876543210".to_string(),
            business_name: "Test Business".to_string(),
            business_type: BusinessType::SmallLaundry,
            address: None,
            interested_plan: None,
            expected_monthly_orders: None,
            current_branches: None,
            message: None,
            source: None,
        }
    }

    #[test]
    fn test_optional_fields_are_omitted_not_null() {
        let json = serde_json::to_value(minimal_record()).unwrap();
        let map = json.as_object().unwrap();
        assert!(!map.contains_key("address"));
        assert!(!map.contains_key("message"));
        assert!(!map.contains_key("interestedPlan"));
        assert!(map.contains_key("businessName"));
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(
            serde_json::to_value(BusinessType::SmallLaundry).unwrap(),
            json!("small_laundry")
        );
        assert_eq!(serde_json::to_value(BusinessType::DryCleaner).unwrap(), json!("dry_cleaner"));
        assert_eq!(serde_json::to_value(OrderVolume::Above5000).unwrap(), json!("5000+"));
        assert_eq!(serde_json::to_value(OrderVolume::From1000To5000).unwrap(), json!("1000-5000"));
        assert_eq!(serde_json::to_value(LeadSource::PricingPage).unwrap(), json!("pricing_page"));
        assert_eq!(serde_json::to_value(InterestedPlan::Undecided).unwrap(), json!("undecided"));
    }

    #[test]
    fn test_enum_display_matches_wire_value() {
        assert_eq!(BusinessType::SmallLaundry.to_string(), "small_laundry");
        assert_eq!(OrderVolume::UpTo100.to_string(), "0-100");
        assert_eq!(LeadSource::Website.to_string(), "website");
        assert_eq!(InterestedPlan::Pro.to_string(), "pro");
    }

    #[test]
    fn test_record_round_trip_with_address() {
        let mut record = minimal_record();
        record.address = Some(Address {
            line1: Some("12 MG Road".to_string()),
            city: Some("Mumbai".to_string()),
            country: Some("India".to_string()),
            ..Address::default()
        });
        record.current_branches = Some(3);
        record.source = Some(LeadSource::Referral);

        let json = serde_json::to_string(&record).unwrap();
        let back: LeadRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_receipt_deserialization() {
        let json = r#"{"leadId":"abc123","message":"Lead captured"}"#;
        let receipt: SubmissionReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.lead_id, "abc123");
        assert_eq!(receipt.message, "Lead captured");
    }
}

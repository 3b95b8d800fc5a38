//! Billing plan domain types
//!
//! Plans as served by the collaborator's public billing endpoint. Numeric
//! limits use `-1` as the unlimited sentinel, mirroring the backend.

use serde::{Deserialize, Serialize};

/// A subscription plan shown on the pricing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPlan {
    #[serde(rename = "_id")]
    pub id: String,

    /// Machine name (`free`, `basic`, `pro`, `enterprise`)
    pub name: String,

    pub display_name: String,

    pub description: String,

    pub price: PlanPrice,

    pub features: PlanFeatures,

    #[serde(default)]
    pub is_popular: bool,

    /// Marketing ribbon, e.g. "Most Popular"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Plan pricing in the smallest displayed unit (whole rupees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPrice {
    pub monthly: i64,
    pub yearly: i64,
}

/// Per-plan limits and feature flags. A limit of `-1` means unlimited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFeatures {
    pub max_orders: i64,
    pub max_staff: i64,
    pub max_customers: i64,
    pub max_branches: i64,
    pub custom_domain: bool,
    pub advanced_analytics: bool,
    pub api_access: bool,
    pub white_label: bool,
    pub priority_support: bool,
    pub custom_branding: bool,
    pub campaigns: bool,
    pub loyalty_points: bool,
    pub inventory_management: bool,
    pub multi_location: bool,
    pub custom_reports: bool,
    pub mobile_app: bool,
    pub sms_notifications: bool,
    pub email_marketing: bool,
    pub pos_integration: bool,
    pub accounting_integration: bool,
}

/// Whether a numeric plan limit means "unlimited"
pub fn is_unlimited(limit: i64) -> bool {
    limit < 0
}

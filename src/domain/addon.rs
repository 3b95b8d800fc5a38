//! Add-on marketplace domain types
//!
//! Add-ons as served by the collaborator's public marketplace endpoint.
//! Free-form backend configuration (`config`) stays untyped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable add-on listed on the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    #[serde(rename = "_id")]
    pub id: String,

    /// Machine name, e.g. `extra-branch`
    pub name: String,

    pub slug: String,

    pub display_name: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    pub category: AddOnCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub pricing: AddOnPricing,

    pub billing_cycle: BillingCycle,

    /// Backend-defined limits/feature payload; shape varies per add-on
    #[serde(default)]
    pub config: serde_json::Value,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub benefits: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub use_cases: Vec<String>,

    pub status: AddOnStatus,

    #[serde(default)]
    pub is_popular: bool,

    #[serde(default)]
    pub is_recommended: bool,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub trial_days: u32,

    #[serde(default)]
    pub max_quantity: u32,

    #[serde(default)]
    pub show_on_marketplace: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Add-on pricing; at least one of the cycles is populated
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time: Option<i64>,
}

/// Marketplace category an add-on belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOnCategory {
    Capacity,
    Feature,
    Usage,
    Branding,
    Integration,
    Support,
}

impl std::fmt::Display for AddOnCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddOnCategory::Capacity => write!(f, "capacity"),
            AddOnCategory::Feature => write!(f, "feature"),
            AddOnCategory::Usage => write!(f, "usage"),
            AddOnCategory::Branding => write!(f, "branding"),
            AddOnCategory::Integration => write!(f, "integration"),
            AddOnCategory::Support => write!(f, "support"),
        }
    }
}

impl std::str::FromStr for AddOnCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "capacity" => Ok(AddOnCategory::Capacity),
            "feature" => Ok(AddOnCategory::Feature),
            "usage" => Ok(AddOnCategory::Usage),
            "branding" => Ok(AddOnCategory::Branding),
            "integration" => Ok(AddOnCategory::Integration),
            "support" => Ok(AddOnCategory::Support),
            _ => Err(format!("unknown add-on category '{}'", s)),
        }
    }
}

/// How an add-on is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingCycle {
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "yearly")]
    Yearly,
    #[serde(rename = "one-time")]
    OneTime,
    #[serde(rename = "usage-based")]
    UsageBased,
}

/// Publication state of an add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOnStatus {
    Draft,
    Active,
    Hidden,
    Deprecated,
}

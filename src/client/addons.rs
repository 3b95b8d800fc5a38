//! Add-ons marketplace endpoints
//!
//! `GET /public/addons/marketplace` and `GET /public/addons/{id}`, plus the
//! display helpers the marketing site uses to render prices and categories.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::domain::{AddOn, AddOnCategory, AddOnPricing};
use crate::errors::Result;

/// Path of the marketplace listing endpoint
pub const MARKETPLACE_PATH: &str = "/public/addons/marketplace";

/// Sort orders the marketplace endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnSort {
    Popular,
    PriceLow,
    PriceHigh,
    Newest,
    Name,
}

impl std::fmt::Display for AddOnSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddOnSort::Popular => write!(f, "popular"),
            AddOnSort::PriceLow => write!(f, "price_low"),
            AddOnSort::PriceHigh => write!(f, "price_high"),
            AddOnSort::Newest => write!(f, "newest"),
            AddOnSort::Name => write!(f, "name"),
        }
    }
}

impl std::str::FromStr for AddOnSort {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "popular" => Ok(AddOnSort::Popular),
            "price_low" => Ok(AddOnSort::PriceLow),
            "price_high" => Ok(AddOnSort::PriceHigh),
            "newest" => Ok(AddOnSort::Newest),
            "name" => Ok(AddOnSort::Name),
            _ => Err(format!(
                "unknown sort order '{}', expected one of: popular, price_low, price_high, newest, name",
                s
            )),
        }
    }
}

/// Marketplace listing filters; every field is optional and unset fields are
/// omitted from the query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddOnFilters {
    pub category: Option<AddOnCategory>,
    pub search: Option<String>,
    pub sort_by: Option<AddOnSort>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub price_range: Option<String>,
    pub featured: Option<bool>,
}

impl AddOnFilters {
    /// Render the filters as query pairs, in the order the site sends them
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(price_range) = &self.price_range {
            pairs.push(("priceRange", price_range.clone()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        pairs
    }
}

/// Pagination block returned with marketplace listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnPage {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    pub limit: u32,
}

/// A marketplace listing: one page of add-ons plus pagination
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListing {
    pub add_ons: Vec<AddOn>,
    #[serde(default)]
    pub pagination: Option<AddOnPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddOnDetailsData {
    add_on: AddOn,
}

impl ApiClient {
    /// Fetch marketplace add-ons matching the given filters
    pub async fn marketplace_add_ons(&self, filters: &AddOnFilters) -> Result<MarketplaceListing> {
        let response = self.get(MARKETPLACE_PATH).query(&filters.to_query()).send().await?;
        Ok(self.handle_envelope(response).await?.1)
    }

    /// Fetch a single add-on by ID
    pub async fn add_on_details(&self, add_on_id: &str) -> Result<AddOn> {
        let data: AddOnDetailsData =
            self.get_data(&format!("/public/addons/{}", add_on_id)).await?;
        Ok(data.add_on)
    }
}

// Display helpers

/// Format a whole-rupee amount with Indian digit grouping, e.g. `₹1,23,456`.
pub fn format_currency(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    // Indian grouping: rightmost group of three, then groups of two.
    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Human-readable price label for an add-on, preferring monthly pricing
pub fn format_add_on_price(pricing: &AddOnPricing) -> String {
    if let Some(monthly) = pricing.monthly {
        return format!("{}/month", format_currency(monthly));
    }
    if let Some(yearly) = pricing.yearly {
        return format!("{}/year", format_currency(yearly));
    }
    if let Some(one_time) = pricing.one_time {
        return format!("{} one-time", format_currency(one_time));
    }
    "Contact us".to_string()
}

/// Display metadata for a marketplace category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Display metadata used by the marketplace category chips
pub fn category_info(category: AddOnCategory) -> CategoryInfo {
    match category {
        AddOnCategory::Capacity => CategoryInfo {
            label: "Capacity",
            color: "#3B82F6",
            description: "Scale your business with additional resources",
        },
        AddOnCategory::Feature => CategoryInfo {
            label: "Features",
            color: "#8B5CF6",
            description: "Unlock advanced features for your operations",
        },
        AddOnCategory::Usage => CategoryInfo {
            label: "Usage",
            color: "#F59E0B",
            description: "Pay-as-you-use services and communications",
        },
        AddOnCategory::Branding => CategoryInfo {
            label: "Branding",
            color: "#EC4899",
            description: "Customize your platform with your brand",
        },
        AddOnCategory::Integration => CategoryInfo {
            label: "Integration",
            color: "#6366F1",
            description: "Connect with third-party tools and services",
        },
        AddOnCategory::Support => CategoryInfo {
            label: "Support",
            color: "#10B981",
            description: "Enhanced support and assistance",
        },
    }
}

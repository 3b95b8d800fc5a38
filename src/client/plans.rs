//! Billing plans endpoint
//!
//! `GET /public/billing/plans`: the plan catalog rendered on the pricing
//! page.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::domain::BillingPlan;
use crate::errors::Result;

/// Path of the public billing plans endpoint
pub const PLANS_PATH: &str = "/public/billing/plans";

#[derive(Debug, Deserialize)]
struct PlansData {
    plans: Vec<BillingPlan>,
}

impl ApiClient {
    /// Fetch all publicly listed billing plans
    pub async fn list_plans(&self) -> Result<Vec<BillingPlan>> {
        let data: PlansData = self.get_data(PLANS_PATH).await?;
        Ok(data.plans)
    }
}

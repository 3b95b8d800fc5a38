//! Payment link and hosted-checkout endpoints
//!
//! The client resolves a payment link by token and asks the collaborator to
//! create hosted-checkout sessions. Redirecting the browser to the checkout
//! provider is the caller's concern.

use serde::Serialize;

use crate::client::ApiClient;
use crate::domain::{CheckoutSession, InterestedPlan, PaymentLink, PlanBillingCycle};
use crate::errors::Result;

/// Request body for a direct checkout started from the pricing page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectCheckoutRequest {
    pub plan: InterestedPlan,
    pub billing_cycle: PlanBillingCycle,
    pub name: String,
    pub email: String,
    pub business_name: String,
}

impl ApiClient {
    /// Resolve a payment link by its token
    pub async fn payment_details(&self, token: &str) -> Result<PaymentLink> {
        self.get_data(&format!("/public/pay/{}", token)).await
    }

    /// Create a hosted-checkout session for an existing payment link
    pub async fn create_checkout(&self, token: &str) -> Result<CheckoutSession> {
        self.post_data(&format!("/public/pay/{}/create-checkout", token), &serde_json::json!({}))
            .await
    }

    /// Create a hosted-checkout session directly from plan selection,
    /// without a pre-issued payment link
    pub async fn create_direct_checkout(
        &self,
        request: &DirectCheckoutRequest,
    ) -> Result<CheckoutSession> {
        self.post_data("/public/create-direct-checkout", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_checkout_request_shape() {
        let request = DirectCheckoutRequest {
            plan: InterestedPlan::Pro,
            billing_cycle: PlanBillingCycle::Monthly,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            business_name: "Test Business".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["plan"], serde_json::json!("pro"));
        assert_eq!(json["billingCycle"], serde_json::json!("monthly"));
        assert_eq!(json["businessName"], serde_json::json!("Test Business"));
    }
}

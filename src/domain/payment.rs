//! Payment link domain types
//!
//! A payment link is created by the sales team for a converted lead; the
//! marketing site resolves it by token and hands off to the hosted checkout
//! provider. The redirect itself happens in the browser and is out of scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved payment link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLink {
    pub token: String,

    pub status: PaymentStatus,

    pub plan: PaymentPlanSummary,

    pub billing_cycle: PlanBillingCycle,

    pub amount: PaymentAmount,

    /// ISO 4217 code, e.g. `INR`
    pub currency: String,

    pub expires_at: DateTime<Utc>,

    pub lead: PaymentLeadSummary,
}

/// Lifecycle of a payment link. Checkout sessions can only be created while
/// `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Expired,
    Cancelled,
}

/// Billing cycle attached to a payment link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanBillingCycle {
    Monthly,
    Yearly,
}

/// Plan summary shown on the payment page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanSummary {
    pub name: String,
    pub display_name: String,
}

/// Price breakdown in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAmount {
    pub subtotal: i64,
    pub tax: i64,
    pub discount: i64,
    pub total: i64,
}

/// Lead summary shown on the payment page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLeadSummary {
    pub name: String,
    pub email: String,
    pub business_name: String,
}

/// A hosted-checkout session handle returned by the collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub session_id: String,
}

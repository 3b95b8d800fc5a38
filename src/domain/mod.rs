//! Domain types for the Washboard public API
//!
//! Pure wire models shared by the validator, the submission driver, and the
//! API client. These types carry no infrastructure concerns; serde attributes
//! pin the collaborator's camelCase JSON shape.

pub mod addon;
pub mod blog;
pub mod lead;
pub mod payment;
pub mod plan;

pub use addon::{AddOn, AddOnCategory, AddOnPricing, AddOnStatus, BillingCycle};
pub use blog::{BlogAuthor, BlogCategory, BlogCategoryRef, BlogPost};
pub use lead::{
    Address, BusinessType, InterestedPlan, LeadRecord, LeadSource, OrderVolume,
    SubmissionReceipt,
};
pub use payment::{
    CheckoutSession, PaymentAmount, PaymentLeadSummary, PaymentLink, PaymentPlanSummary,
    PaymentStatus, PlanBillingCycle,
};
pub use plan::{is_unlimited, BillingPlan, PlanFeatures, PlanPrice};

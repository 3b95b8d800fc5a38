//! # Washboard
//!
//! Washboard is the client toolkit for the public API of the Washboard
//! laundry-platform marketing site. It owns the pieces of that site with a
//! real contract: exhaustive validation of prospective-customer lead
//! payloads, the finite state machine gating a lead submission, and one
//! configured HTTP client covering the collaborator's public surface
//! (leads, billing plans, add-ons marketplace, blog content, and
//! hosted-checkout sessions).
//!
//! ## Architecture
//!
//! ```text
//! raw form input → Lead Validator → LeadRecord → Submission Driver → Collaborator API
//!                       ↓                              ↓
//!                 field errors              idle/submitting/success/error
//! ```
//!
//! Validation is pure and collects every field error in one pass; the
//! submission driver performs exactly one outbound attempt per `submit()`
//! and normalizes transport and business failures into a single
//! user-facing error state.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use washboard::{validate_lead, ApiClient, ClientConfig, Result, SubmissionDriver};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let input = serde_json::json!({
//!         "name": "John Doe",
//!         "email": "john@example.com",
//!         "phone": "9876543210",
//!         "businessName": "Test Business",
//!         "businessType": "small_laundry"
//!     });
//!
//!     let record = validate_lead(&input).expect("lead is well-formed");
//!
//!     let client = ApiClient::new(ClientConfig::default())?;
//!     let driver = SubmissionDriver::new(client);
//!     let receipt = driver.submit(&record).await?;
//!     println!("lead accepted: {}", receipt.lead_id);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod submission;
pub mod validation;

// Re-export commonly used types and traits
pub use client::{ApiClient, ClientConfig};
pub use config::AppConfig;
pub use domain::{LeadRecord, SubmissionReceipt};
pub use errors::{Error, Result};
pub use observability::init_logging;
pub use submission::{LeadGateway, SubmissionDriver, SubmissionState};
pub use validation::{validate_lead, FieldError};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

//! Lead submission endpoint
//!
//! `POST /public/leads`: the only write the marketing site performs against
//! the collaborator on its own behalf. The client is also the production
//! [`LeadGateway`] used by the submission driver.

use async_trait::async_trait;
use tracing::info;

use crate::client::ApiClient;
use crate::domain::{LeadRecord, SubmissionReceipt};
use crate::errors::Result;
use crate::submission::LeadGateway;

/// Path of the lead submission endpoint
pub const LEADS_PATH: &str = "/public/leads";

impl ApiClient {
    /// Submit a validated lead to the collaborator.
    ///
    /// One outbound call, no retries; the submission driver owns retry
    /// policy (a retry is a fresh call).
    pub async fn submit_lead(&self, record: &LeadRecord) -> Result<SubmissionReceipt> {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct LeadCreated {
            lead_id: String,
        }

        let (message, created): (String, LeadCreated) =
            self.post_data_with_message(LEADS_PATH, record).await?;

        info!(lead_id = %created.lead_id, "Lead accepted by collaborator");
        Ok(SubmissionReceipt { lead_id: created.lead_id, message })
    }
}

#[async_trait]
impl LeadGateway for ApiClient {
    async fn submit_lead(&self, record: &LeadRecord) -> Result<SubmissionReceipt> {
        ApiClient::submit_lead(self, record).await
    }
}

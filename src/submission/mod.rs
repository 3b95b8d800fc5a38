//! # Submission Driver
//!
//! Drives a single lead submission through its finite state machine:
//!
//! ```text
//! idle       --submit()------> submitting
//! submitting --resolve ok----> success
//! submitting --resolve fail--> error
//! success    --reset()-------> idle
//! error      --reset()-------> idle
//! error      --submit()------> submitting   (retry)
//! submitting --submit()------> rejected, no outbound call
//! ```
//!
//! The `submitting` guard is the only concurrency control: it exists to stop
//! a double-click from starting a second outbound call for the same form,
//! not to coordinate distinct records. One outbound attempt per `submit()`,
//! never retried automatically; the HTTP client's deadline surfaces as an
//! `error` outcome rather than cancellation.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{LeadRecord, SubmissionReceipt};
use crate::errors::{Error, Result};

/// State of one submission attempt, observable by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    /// Carries the user-facing message: the collaborator's text for business
    /// failures, fixed fallback text for transport failures
    Error(String),
}

impl SubmissionState {
    fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Error(_) => "error",
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The outbound seam to the collaborator. Implemented by [`crate::client::ApiClient`]
/// in production and by controllable fakes in tests.
#[async_trait]
pub trait LeadGateway: Send + Sync {
    async fn submit_lead(&self, record: &LeadRecord) -> Result<SubmissionReceipt>;
}

/// Manages [`SubmissionState`] for one form instance and performs the
/// gated outbound call.
///
/// State lives behind a `std::sync::Mutex` that is never held across an
/// await, so a driver can be shared (`Arc`) with a UI task polling
/// [`SubmissionDriver::state`].
#[derive(Debug)]
pub struct SubmissionDriver<G> {
    gateway: G,
    state: Mutex<SubmissionState>,
}

impl<G: LeadGateway> SubmissionDriver<G> {
    /// Create a driver in the `idle` state
    pub fn new(gateway: G) -> Self {
        Self { gateway, state: Mutex::new(SubmissionState::Idle) }
    }

    /// Current state snapshot
    pub fn state(&self) -> SubmissionState {
        self.state.lock().expect("submission state lock poisoned").clone()
    }

    /// Submit a validated record to the collaborator.
    ///
    /// Rejected without any outbound call while a submission is in flight,
    /// or after a success that has not been `reset()`. Otherwise performs
    /// exactly one attempt and lands in `success` or `error`.
    pub async fn submit(&self, record: &LeadRecord) -> Result<SubmissionReceipt> {
        {
            let mut state = self.state.lock().expect("submission state lock poisoned");
            match *state {
                SubmissionState::Submitting => {
                    warn!("submit() ignored: a submission is already in flight");
                    return Err(Error::SubmissionInFlight);
                }
                SubmissionState::Success => {
                    warn!("submit() rejected: previous submission succeeded, reset() first");
                    return Err(Error::AlreadySucceeded);
                }
                SubmissionState::Idle | SubmissionState::Error(_) => {
                    *state = SubmissionState::Submitting;
                }
            }
        }

        let attempt_id = Uuid::new_v4();
        debug!(attempt_id = %attempt_id, business = %record.business_name, "Submitting lead");

        let outcome = self.gateway.submit_lead(record).await;

        let mut state = self.state.lock().expect("submission state lock poisoned");
        match outcome {
            Ok(receipt) => {
                info!(attempt_id = %attempt_id, lead_id = %receipt.lead_id, "Lead submitted");
                *state = SubmissionState::Success;
                Ok(receipt)
            }
            Err(error) => {
                let message = error.submission_message();
                warn!(attempt_id = %attempt_id, error = %error, "Lead submission failed");
                *state = SubmissionState::Error(message);
                Err(error)
            }
        }
    }

    /// Return to `idle` so another record can be submitted.
    ///
    /// Valid from `success` and `error`; a no-op from `idle`. Calling this
    /// while a submission is in flight is a programming error and fails.
    pub fn reset(&self) -> Result<()> {
        let mut state = self.state.lock().expect("submission state lock poisoned");
        match *state {
            SubmissionState::Submitting => Err(Error::ResetWhileSubmitting),
            SubmissionState::Idle => Ok(()),
            SubmissionState::Success | SubmissionState::Error(_) => {
                debug!(from = %*state, "Submission state reset");
                *state = SubmissionState::Idle;
                Ok(())
            }
        }
    }
}

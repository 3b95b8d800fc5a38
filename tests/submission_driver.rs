//! Integration tests for the submission state machine
//!
//! Covers the concurrency guard (a submission in flight blocks re-entry
//! without a second outbound call), the retry path from `error`, and the
//! reset contract: first against a hand-controlled gateway, then end to end
//! against a wiremock collaborator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::{mpsc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use washboard::{
    ApiClient, ClientConfig, Error, LeadGateway, LeadRecord, Result, SubmissionDriver,
    SubmissionReceipt, SubmissionState,
};

fn record() -> LeadRecord {
    serde_json::from_value(json!({
        "name": "John Doe",
        "email": "john@example.com",
        "phone": "9876543210",
        "businessName": "Test Business",
        "businessType": "small_laundry"
    }))
    .unwrap()
}

/// Gateway whose outcomes are fed one at a time through a channel, so a test
/// can hold a submission in flight for as long as it needs.
#[derive(Clone)]
struct GatedGateway {
    calls: Arc<AtomicUsize>,
    outcomes: Arc<Mutex<mpsc::UnboundedReceiver<Result<SubmissionReceipt>>>>,
}

impl GatedGateway {
    fn new() -> (Self, mpsc::UnboundedSender<Result<SubmissionReceipt>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let gateway =
            Self { calls: Arc::new(AtomicUsize::new(0)), outcomes: Arc::new(Mutex::new(rx)) };
        (gateway, tx)
    }
}

#[async_trait]
impl LeadGateway for GatedGateway {
    async fn submit_lead(&self, _record: &LeadRecord) -> Result<SubmissionReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut outcomes = self.outcomes.lock().await;
        outcomes.recv().await.expect("test closed the outcome channel early")
    }
}

fn receipt() -> SubmissionReceipt {
    SubmissionReceipt { lead_id: "abc123".to_string(), message: "Lead captured".to_string() }
}

async fn wait_for_state<G: LeadGateway>(driver: &SubmissionDriver<G>, expected: SubmissionState) {
    for _ in 0..500 {
        if driver.state() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("driver never reached state '{}'", expected);
}

// Property 8: re-entrant submission while one is in flight is rejected,
// triggers no second outbound call, and leaves the state untouched until the
// first call resolves.
#[tokio::test]
async fn in_flight_submission_blocks_reentry_without_second_call() {
    let (gateway, outcomes) = GatedGateway::new();
    let calls = gateway.calls.clone();
    let driver = Arc::new(SubmissionDriver::new(gateway));

    let background = {
        let driver = driver.clone();
        let record = record();
        tokio::spawn(async move { driver.submit(&record).await })
    };
    wait_for_state(&driver, SubmissionState::Submitting).await;

    let rejected = driver.submit(&record()).await.unwrap_err();
    assert!(matches!(rejected, Error::SubmissionInFlight));
    assert_eq!(driver.state(), SubmissionState::Submitting);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    outcomes.send(Ok(receipt())).unwrap();
    let first = background.await.unwrap().unwrap();
    assert_eq!(first.lead_id, "abc123");
    assert_eq!(driver.state(), SubmissionState::Success);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// Property 9: from `error`, submit() goes straight back through
// `submitting`, and a subsequent success lands in `success`.
#[tokio::test]
async fn retry_after_error_reaches_success() {
    let (gateway, outcomes) = GatedGateway::new();
    let calls = gateway.calls.clone();
    let driver = SubmissionDriver::new(gateway);

    outcomes.send(Err(Error::api("Duplicate lead"))).unwrap();
    driver.submit(&record()).await.unwrap_err();
    assert_eq!(driver.state(), SubmissionState::Error("Duplicate lead".to_string()));

    outcomes.send(Ok(receipt())).unwrap();
    driver.submit(&record()).await.unwrap();
    assert_eq!(driver.state(), SubmissionState::Success);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// Property 10: reset() from success or error returns to idle, and a
// validated record can then be resubmitted through a fresh transition.
#[tokio::test]
async fn reset_contract_allows_fresh_submission() {
    let (gateway, outcomes) = GatedGateway::new();
    let driver = SubmissionDriver::new(gateway);

    outcomes.send(Ok(receipt())).unwrap();
    driver.submit(&record()).await.unwrap();
    assert_eq!(driver.state(), SubmissionState::Success);

    driver.reset().unwrap();
    assert_eq!(driver.state(), SubmissionState::Idle);

    outcomes.send(Err(Error::transport("connection refused"))).unwrap();
    driver.submit(&record()).await.unwrap_err();
    assert!(matches!(driver.state(), SubmissionState::Error(_)));

    driver.reset().unwrap();
    assert_eq!(driver.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn reset_while_submitting_fails_loudly() {
    let (gateway, outcomes) = GatedGateway::new();
    let driver = Arc::new(SubmissionDriver::new(gateway));

    let background = {
        let driver = driver.clone();
        let record = record();
        tokio::spawn(async move { driver.submit(&record).await })
    };
    wait_for_state(&driver, SubmissionState::Submitting).await;

    assert!(matches!(driver.reset().unwrap_err(), Error::ResetWhileSubmitting));
    assert_eq!(driver.state(), SubmissionState::Submitting);

    outcomes.send(Ok(receipt())).unwrap();
    background.await.unwrap().unwrap();
}

// End to end against a mock collaborator: first attempt fails with a
// business error, the manual retry succeeds.
#[tokio::test]
async fn driver_end_to_end_retry_against_mock_collaborator() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/public/leads"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "success": false,
            "message": "A lead with this email already exists"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/public/leads"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Lead captured",
            "data": { "leadId": "lead_42" }
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(ClientConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
        verbose: false,
    })
    .unwrap();
    let driver = SubmissionDriver::new(client);

    driver.submit(&record()).await.unwrap_err();
    assert_eq!(
        driver.state(),
        SubmissionState::Error("A lead with this email already exists".to_string())
    );

    let receipt = driver.submit(&record()).await.unwrap();
    assert_eq!(receipt.lead_id, "lead_42");
    assert_eq!(receipt.message, "Lead captured");
    assert_eq!(driver.state(), SubmissionState::Success);
}

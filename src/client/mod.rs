//! HTTP client for the Washboard public API
//!
//! Provides one configured `reqwest`-based client for every call the
//! marketing site makes to its backend collaborator. Base URL and timeout
//! are injected at construction; there is no global client state.
//!
//! All collaborator responses share one envelope shape:
//! `{ success, message, data?, errors? }`. A `success: false` envelope is a
//! business failure and surfaces as [`Error::Api`]; transport problems
//! surface as [`Error::Transport`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ApiConfig;
use crate::errors::{Error, Result};
use crate::validation::FieldError;

pub mod addons;
pub mod blog;
pub mod leads;
pub mod payments;
pub mod plans;

pub use addons::{
    category_info, format_add_on_price, format_currency, AddOnFilters, AddOnPage, AddOnSort,
    CategoryInfo, MarketplaceListing,
};
pub use blog::BlogQuery;
pub use payments::DirectCheckoutRequest;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the collaborator API (e.g. "http://localhost:5000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Enable verbose request/response logging
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_API_URL.to_string(),
            timeout_seconds: crate::config::DEFAULT_TIMEOUT_SECONDS,
            verbose: false,
        }
    }
}

impl From<&ApiConfig> for ClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_seconds: config.timeout_seconds,
            verbose: false,
        }
    }
}

/// Response envelope every collaborator endpoint uses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub data: Option<T>,

    /// Field-level errors attached to business failures
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// HTTP client for the Washboard public API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build a GET request
    pub fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("GET {}", url);

        self.client.get(&url)
    }

    /// Build a POST request
    pub fn post(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("POST {}", url);

        self.client.post(&url)
    }

    /// Send a GET request and unwrap the envelope's `data` payload
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).send().await?;
        Ok(self.handle_envelope(response).await?.1)
    }

    /// Send a POST request with a JSON body and unwrap the envelope's `data`
    /// payload
    pub async fn post_data<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        Ok(self.post_data_with_message(path, body).await?.1)
    }

    /// Send a POST request and return both the envelope message and its
    /// `data` payload
    pub async fn post_data_with_message<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(String, R)> {
        if self.config.verbose {
            let body_json = serde_json::to_string_pretty(body)
                .unwrap_or_else(|_| "<unable to serialize>".to_string());
            trace!("Request body:\n{}", body_json);
        }

        let response = self.post(path).json(body).send().await?;
        self.handle_envelope(response).await
    }

    /// Send a POST request and check envelope success, discarding any payload
    pub async fn post_ack<T: Serialize>(&self, path: &str, body: &T) -> Result<()> {
        let response = self.post(path).json(body).send().await?;
        self.checked_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Decode a checked envelope and unwrap its `data` payload
    async fn handle_envelope<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<(String, T)> {
        let envelope = self.checked_envelope(response).await?;
        let data = envelope
            .data
            .ok_or_else(|| Error::api("Response envelope is missing its data payload"))?;
        Ok((envelope.message, data))
    }

    /// Decode a collaborator response, normalizing failures.
    ///
    /// The collaborator reports business failures in the envelope rather
    /// than the HTTP status, so the body is decoded first and the status
    /// only matters when no envelope can be read from it.
    async fn checked_envelope<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<ApiEnvelope<T>> {
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;

        if self.config.verbose {
            trace!("Response body:\n{}", body);
        }

        let envelope: ApiEnvelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(Error::transport(format!(
                    "HTTP {}: {}",
                    status,
                    if body.is_empty() { "<empty body>" } else { body.as_str() }
                )));
            }
            Err(e) => {
                return Err(Error::serialization(
                    e,
                    format!("Failed to decode response from {}", status),
                ));
            }
        };

        if !envelope.success {
            let message = if envelope.message.is_empty() {
                format!("Request failed with status {}", status)
            } else {
                envelope.message
            };
            return Err(Error::Api { message, field_errors: envelope.errors });
        }

        Ok(envelope)
    }
}

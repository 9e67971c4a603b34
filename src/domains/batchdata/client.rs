//! HTTP client for the BatchData API.
//!
//! Every logical operation is a single JSON `POST` to one of a fixed set of
//! endpoints. There is no retry: the first failure is returned to the caller.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use super::error::{BatchDataError, BatchDataResult};
use crate::core::config::BatchDataConfig;

/// BatchData endpoints reachable through the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AddressVerify,
    AddressAutocomplete,
    AddressGeocode,
    AddressReverseGeocode,
    PropertyLookup,
    PropertySearch,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::AddressVerify => "/address/verify",
            Self::AddressAutocomplete => "/address/autocomplete",
            Self::AddressGeocode => "/address/geocode",
            Self::AddressReverseGeocode => "/address/reverse-geocode",
            Self::PropertyLookup => "/property/lookup/sync",
            Self::PropertySearch => "/property/search/sync",
        }
    }
}

/// Executes one request document against one endpoint.
///
/// Tool handlers depend on this trait rather than on [`BatchDataClient`] so that
/// the transport can be replaced in tests.
#[async_trait]
pub trait PropertyApi: Send + Sync {
    /// POST `body` to `endpoint` and return the parsed JSON response.
    async fn execute(&self, endpoint: Endpoint, body: &Value) -> BatchDataResult<Value>;
}

/// reqwest-backed [`PropertyApi`] holding the process-wide base URL and credential.
#[derive(Clone)]
pub struct BatchDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for BatchDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchDataClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl BatchDataClient {
    /// Build a client from configuration.
    pub fn new(config: &BatchDataConfig) -> BatchDataResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl PropertyApi for BatchDataClient {
    #[instrument(skip(self, body), fields(endpoint = endpoint.path()))]
    async fn execute(&self, endpoint: Endpoint, body: &Value) -> BatchDataResult<Value> {
        let response = self
            .http
            .post(self.url(endpoint))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "BatchData responded");

        if !status.is_success() {
            return Err(BatchDataError::ApiRequest {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

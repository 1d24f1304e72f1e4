//! KeyCRM buyer API client.
//!
//! Thin HTTP wrapper for `POST /v1/buyer`. The access token only ever lives
//! on the server; browsers talk to `/api/leads` instead.

use std::time::Duration;

use super::config::CrmConfig;
use super::types::{BuyerRequest, CrmError, LeadSink};

// =============================================================================
// CLIENT
// =============================================================================

pub struct CrmClient {
    http: reqwest::Client,
    buyer_url: String,
    api_token: String,
}

impl CrmClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: CrmConfig) -> Result<Self, CrmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CrmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, buyer_url: config.buyer_url(), api_token: config.api_token })
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, CrmError> {
        Self::new(CrmConfig::from_env()?)
    }

    #[must_use]
    pub fn buyer_url(&self) -> &str {
        &self.buyer_url
    }

    /// Send a single buyer record. Attempted exactly once.
    ///
    /// # Errors
    ///
    /// [`CrmError::Request`] when no response arrived, [`CrmError::Rejected`]
    /// for any non-2xx status.
    pub async fn send_buyer(&self, buyer: &BuyerRequest) -> Result<(), CrmError> {
        let response = self
            .http
            .post(&self.buyer_url)
            .header(reqwest::header::AUTHORIZATION, &self.api_token)
            .json(buyer)
            .send()
            .await
            .map_err(|e| CrmError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(CrmError::Rejected { status: status.as_u16(), body })
    }
}

#[async_trait::async_trait]
impl LeadSink for CrmClient {
    async fn create_buyer(&self, buyer: &BuyerRequest) -> Result<(), CrmError> {
        self.send_buyer(buyer).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

//! CRM wire types, inbound lead payload, and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by CRM configuration and client operations.
#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API token environment variable is not set.
    #[error("missing API token: env var {var} not set")]
    MissingToken { var: String },

    /// The HTTP request never produced a response (DNS, connect, timeout).
    #[error("CRM request failed: {0}")]
    Request(String),

    /// The CRM answered with a non-success HTTP status.
    #[error("CRM rejected lead: status {status}")]
    Rejected { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// INBOUND
// =============================================================================

/// Lead payload posted by the landing page to `POST /api/leads`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// OUTBOUND
// =============================================================================

/// Body of `POST /v1/buyer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerRequest {
    pub title: String,
    pub description: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl BuyerRequest {
    /// Map a landing-page lead onto the CRM buyer shape.
    ///
    /// Field values are forwarded as entered; the title embeds the name.
    #[must_use]
    pub fn from_lead(lead: &LeadRequest) -> Self {
        Self {
            title: lead_title(&lead.name),
            description: lead.message.clone(),
            contact: Contact { name: lead.name.clone(), email: lead.email.clone(), phone: lead.phone.clone() },
        }
    }
}

#[must_use]
pub fn lead_title(name: &str) -> String {
    format!("Лид с сайта ({name})")
}

// =============================================================================
// TRAIT
// =============================================================================

/// Anything that can accept a buyer record. Implemented by the real CRM
/// client and by test doubles.
#[async_trait::async_trait]
pub trait LeadSink: Send + Sync {
    async fn create_buyer(&self, buyer: &BuyerRequest) -> Result<(), CrmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submission only makes
//! sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A request that got an answer and a request that never got one are kept
//! apart, because the page shows different text for each. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::LeadSubmission;
use crate::state::lead::LeadOutcome;

pub const LEADS_ENDPOINT: &str = "/api/leads";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadSubmitError {
    /// The server answered with a non-2xx status.
    Rejected(u16),
    /// The request failed before any response arrived.
    Transport(String),
}

impl std::fmt::Display for LeadSubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(status) => write!(f, "{}", lead_failed_message(*status)),
            Self::Transport(e) => write!(f, "lead request failed: {e}"),
        }
    }
}

#[must_use]
pub fn lead_failed_message(status: u16) -> String {
    format!("lead submission failed: {status}")
}

/// Collapse a submit result into the outcome the form state understands.
#[must_use]
pub fn outcome_of(result: &Result<(), LeadSubmitError>) -> LeadOutcome {
    match result {
        Ok(()) => LeadOutcome::Sent,
        Err(LeadSubmitError::Rejected(status)) => LeadOutcome::Rejected { status: *status },
        Err(LeadSubmitError::Transport(_)) => LeadOutcome::ConnectionFailed,
    }
}

/// Post a lead to `/api/leads`. Any 2xx is success.
///
/// # Errors
///
/// [`LeadSubmitError::Rejected`] for non-2xx responses,
/// [`LeadSubmitError::Transport`] when the fetch itself fails.
pub async fn submit_lead(lead: &LeadSubmission) -> Result<(), LeadSubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LEADS_ENDPOINT)
            .json(lead)
            .map_err(|e| LeadSubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| LeadSubmitError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(LeadSubmitError::Rejected(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lead;
        Err(LeadSubmitError::Transport("not available on server".to_owned()))
    }
}

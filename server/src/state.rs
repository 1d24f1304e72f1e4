//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional CRM sink and the lead rate limiter. There is no
//! database: leads are forwarded and forgotten.

use std::sync::Arc;

use crate::crm::LeadSink;
use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// CRM sink. `None` if `CRM_API_TOKEN` is not configured.
    pub crm: Option<Arc<dyn LeadSink>>,
    /// In-memory rate limiter for lead submissions.
    pub rate_limiter: RateLimiter,
    /// Key rate limiting on `X-Forwarded-For` instead of the socket peer.
    /// Read once at startup from `TRUST_FORWARDED_FOR`.
    pub trust_forwarded_for: bool,
}

impl AppState {
    #[must_use]
    pub fn new(crm: Option<Arc<dyn LeadSink>>, rate_limiter: RateLimiter) -> Self {
        Self { crm, rate_limiter, trust_forwarded_for: false }
    }

    #[must_use]
    pub fn with_trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::crm::{BuyerRequest, CrmError};
    use crate::rate_limit::RateLimitConfig;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that mutate process environment variables.
    ///
    /// Any test calling `std::env::set_var`/`remove_var` must hold this
    /// guard for as long as the mutated values matter.
    pub fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// What the mock CRM should answer.
    #[derive(Clone, Copy)]
    pub enum MockReply {
        Accept,
        Reject(u16),
        Unreachable,
    }

    /// Records every buyer it receives and replies with a fixed outcome.
    pub struct MockCrm {
        reply: MockReply,
        pub received: Mutex<Vec<BuyerRequest>>,
    }

    impl MockCrm {
        #[must_use]
        pub fn new(reply: MockReply) -> Self {
            Self { reply, received: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait::async_trait]
    impl LeadSink for MockCrm {
        async fn create_buyer(&self, buyer: &BuyerRequest) -> Result<(), CrmError> {
            self.received
                .lock()
                .expect("mock mutex should lock")
                .push(buyer.clone());
            match self.reply {
                MockReply::Accept => Ok(()),
                MockReply::Reject(status) => Err(CrmError::Rejected { status, body: "{}".into() }),
                MockReply::Unreachable => Err(CrmError::Request("connection refused".into())),
            }
        }
    }

    /// Create a test `AppState` with no CRM configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, RateLimiter::with_config(RateLimitConfig::default()))
    }

    /// Create a test `AppState` backed by a mock CRM.
    #[must_use]
    pub fn test_app_state_with_crm(crm: Arc<MockCrm>) -> AppState {
        AppState::new(Some(crm as Arc<dyn LeadSink>), RateLimiter::with_config(RateLimitConfig::default()))
    }

    /// Create a test `AppState` with a custom limiter config.
    #[must_use]
    pub fn test_app_state_with_limits(crm: Arc<MockCrm>, config: RateLimitConfig) -> AppState {
        AppState::new(Some(crm as Arc<dyn LeadSink>), RateLimiter::with_config(config))
    }
}

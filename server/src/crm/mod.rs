//! CRM integration: forwarding landing-page leads to KeyCRM.
//!
//! DESIGN
//! ======
//! The browser never sees the CRM credential. It posts the four form fields
//! to this service, which reshapes them into a buyer record and forwards it
//! once. Handlers depend on the `LeadSink` trait so tests can swap in mocks.

pub mod client;
pub mod config;
pub mod types;

pub use client::CrmClient;
pub use types::{BuyerRequest, CrmError, LeadRequest, LeadSink};

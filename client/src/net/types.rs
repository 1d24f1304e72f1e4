//! Wire types shared with the server's `/api/leads` endpoint.

use serde::{Deserialize, Serialize};

/// Lead payload posted to `/api/leads`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

//! Lead form progress.
//!
//! DESIGN
//! ======
//! The form is a small state machine: `Idle → Sending → {Sent, Rejected,
//! ConnectionFailed}`. `begin_submit` refuses to start a second request
//! while one is in flight, and only a successful send clears the fields.
//! The status text keeps showing the last settled result until the next
//! one arrives.

#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use crate::net::types::LeadSubmission;

pub const SENT_TEXT: &str = "✅ Заявка отправлена!";
pub const REJECTED_TEXT: &str = "❌ Ошибка отправки";
pub const CONNECTION_FAILED_TEXT: &str = "⚠️ Сбой соединения";

/// Delay before the modal closes after a successful send.
pub const CLOSE_AFTER_SENT_MS: u32 = 2_000;

/// Current values of the four form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeadStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    /// The request reached the server, which answered non-2xx.
    Rejected,
    /// The request never produced a response.
    ConnectionFailed,
}

impl LeadStatus {
    /// Text shown in the `#status` node.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Idle | Self::Sending => "",
            Self::Sent => SENT_TEXT,
            Self::Rejected => REJECTED_TEXT,
            Self::ConnectionFailed => CONNECTION_FAILED_TEXT,
        }
    }
}

/// How a submission attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadOutcome {
    Sent,
    Rejected { status: u16 },
    ConnectionFailed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormState {
    pub fields: LeadFields,
    pub status: LeadStatus,
    /// Last non-pending status; drives the status text.
    last_settled: LeadStatus,
}

impl LeadFormState {
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.status == LeadStatus::Sending
    }

    /// Snapshot the fields for sending and mark the form busy.
    ///
    /// Returns `None` if a submission is already pending.
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        if self.in_flight() {
            return None;
        }
        self.status = LeadStatus::Sending;
        Some(LeadSubmission {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            phone: self.fields.phone.clone(),
            message: self.fields.message.clone(),
        })
    }

    /// Record the result of the pending submission.
    pub fn settle(&mut self, outcome: LeadOutcome) {
        self.status = match outcome {
            LeadOutcome::Sent => {
                self.fields = LeadFields::default();
                LeadStatus::Sent
            }
            LeadOutcome::Rejected { .. } => LeadStatus::Rejected,
            LeadOutcome::ConnectionFailed => LeadStatus::ConnectionFailed,
        };
        self.last_settled = self.status;
    }

    /// Text for the `#status` node. While sending, the previous result
    /// stays visible.
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        self.last_settled.text()
    }
}

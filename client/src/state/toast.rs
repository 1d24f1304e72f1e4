//! Transient toast notifications.
//!
//! No queue and no deduplication: every call adds an independent toast.
//! Each toast walks `Entering → Shown → Leaving` and is then removed; the
//! timers that drive it live in `util::notify`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Delay before a new toast slides in.
pub const ENTER_DELAY_MS: u32 = 100;
/// Time from creation until the toast starts sliding out.
pub const VISIBLE_MS: u32 = 3_000;
/// Slide-out duration before removal.
pub const EXIT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Parse a severity tag; anything unrecognized is `Info`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    /// Rendered off-screen, waiting to slide in.
    #[default]
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    #[must_use]
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.severity.as_str())
    }

    /// Inline style: fixed top-right, colored by severity, translated by phase.
    #[must_use]
    pub fn style(&self) -> String {
        let transform = match self.phase {
            ToastPhase::Shown => "translateX(0)",
            ToastPhase::Entering | ToastPhase::Leaving => "translateX(100%)",
        };
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 12px 24px; border-radius: 8px; color: white; \
             font-weight: 500; z-index: 9999; transition: transform 0.3s ease; transform: {transform}; \
             background-color: {};",
            self.severity.background()
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast in the `Entering` phase and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), severity, phase: ToastPhase::Entering });
        id
    }

    /// Move a toast to `phase`. Returns `false` if it is already gone.
    pub fn set_phase(&mut self, id: u64, phase: ToastPhase) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = phase;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }
}

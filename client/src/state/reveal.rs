//! Scroll-reveal bookkeeping.
//!
//! Elements tagged `.animate-card` / `.animate-step` start hidden and are
//! revealed once, the first time they intersect the viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

pub const HIDDEN_CLASS: &str = "opacity-0";
pub const REVEAL_SELECTOR: &str = ".animate-card, .animate-step";
/// Attribute used to key observed elements for one-shot tracking.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";
pub const THRESHOLD: f64 = 0.2;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    Card,
    Step,
}

impl RevealKind {
    /// Classify by the element's marker class. Cards win if both are set.
    #[must_use]
    pub fn from_classes(is_card: bool, is_step: bool) -> Option<Self> {
        if is_card {
            Some(Self::Card)
        } else if is_step {
            Some(Self::Step)
        } else {
            None
        }
    }

    #[must_use]
    pub fn animation_class(self) -> &'static str {
        match self {
            Self::Card => "animate-fade-in-up",
            Self::Step => "animate-fade-in-left",
        }
    }
}

/// Parse a `data-delay` value in milliseconds.
///
/// Leading digits are taken (`"150ms"` → 150); anything unparseable or
/// missing is 0.
#[must_use]
pub fn parse_delay(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Remembers which elements have been revealed so each fires at most once.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Claim the reveal for `key`. Returns `true` only the first time.
    pub fn claim(&mut self, key: &str) -> bool {
        self.revealed.insert(key.to_owned())
    }

    #[must_use]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

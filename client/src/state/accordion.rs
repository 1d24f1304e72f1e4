//! Exclusive accordion: at most one panel open across the group.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<String>,
}

impl AccordionState {
    /// Toggle the panel named by a trigger's `data-target`.
    ///
    /// Clicking the open panel closes it; clicking any other panel closes
    /// whatever was open and opens that one.
    pub fn toggle(&mut self, target: &str) {
        if self.is_open(target) {
            self.open = None;
        } else {
            self.open = Some(target.to_owned());
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn is_open(&self, target: &str) -> bool {
        self.open.as_deref() == Some(target)
    }

    #[must_use]
    pub fn open_panel(&self) -> Option<&str> {
        self.open.as_deref()
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        usize::from(self.open.is_some())
    }
}

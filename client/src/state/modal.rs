//! Lead modal visibility.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Where a click inside the modal layer landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop element itself (`#modal`).
    Backdrop,
    /// The dialog box or any of its descendants.
    Content,
}

impl ClickTarget {
    /// Classify a click from whether its target is the element the handler
    /// is bound to.
    #[must_use]
    pub fn from_target_is_current(is_current: bool) -> Self {
        if is_current { Self::Backdrop } else { Self::Content }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// CSS `display` value for the modal root.
    #[must_use]
    pub fn display(&self) -> &'static str {
        if self.open { "block" } else { "none" }
    }

    /// Outside-click dismissal: only a click on the backdrop closes.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }
}

//! Aggregate view state for the landing page chrome.
//!
//! Held in one `RwSignal<LandingState>` provided via context. Components
//! project it into classes and styles; nothing here touches the DOM.

use super::accordion::AccordionState;
use super::modal::ModalState;
use super::system::SelectorState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingState {
    pub selector: SelectorState,
    pub accordion: AccordionState,
    pub modal: ModalState,
    pub navbar_scrolled: bool,
    pub mobile_menu_open: bool,
}

impl LandingState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Class string for the navbar root.
    #[must_use]
    pub fn navbar_class(&self) -> &'static str {
        if self.navbar_scrolled { "navbar scrolled" } else { "navbar" }
    }

    /// Class string for the mobile menu container.
    #[must_use]
    pub fn mobile_menu_class(&self) -> &'static str {
        if self.mobile_menu_open { "mobile-menu md:hidden" } else { "mobile-menu md:hidden hidden" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_quiet() {
        let state = LandingState::default();
        assert!(!state.modal.is_open());
        assert_eq!(state.accordion.open_count(), 0);
        assert_eq!(state.navbar_class(), "navbar");
        assert!(state.mobile_menu_class().ends_with("hidden"));
    }

    #[test]
    fn mobile_menu_toggles() {
        let mut state = LandingState::default();
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);
        assert_eq!(state.mobile_menu_class(), "mobile-menu md:hidden");
        state.toggle_mobile_menu();
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn navbar_class_tracks_scroll_flag() {
        let mut state = LandingState::default();
        state.navbar_scrolled = true;
        assert_eq!(state.navbar_class(), "navbar scrolled");
    }
}

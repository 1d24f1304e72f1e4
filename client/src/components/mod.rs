//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections while reading/writing shared
//! state from Leptos context providers (`RwSignal<LandingState>`,
//! `RwSignal<LeadFormState>`, `RwSignal<ToastState>`, `Capabilities`).

pub mod accordion;
pub mod contact_form;
pub mod lead_modal;
pub mod navbar;
pub mod system_selector;
pub mod toast_stack;

//! Typed view state for the landing page.
//!
//! DESIGN
//! ======
//! Every piece of interactive UI state (selected system, open accordion
//! panel, modal visibility, form progress, toasts) lives in a plain value
//! held by an `RwSignal`. Classes, inline styles, and text are derived from
//! these values at render time, so no state is read back out of the DOM.

pub mod accordion;
pub mod landing;
pub mod lead;
pub mod modal;
pub mod navbar;
pub mod reveal;
pub mod system;
pub mod toast;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Pure helpers compile everywhere; DOM glue is gated on
//! the `hydrate` feature and no-ops during SSR.

pub mod capabilities;
pub mod debounce;
pub mod effects;
pub mod notify;
pub mod tasks;
pub mod viewport;

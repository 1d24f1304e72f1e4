//! Optional browser capabilities.
//!
//! The page works without the Lucide icon script and without
//! `IntersectionObserver`. Both are probed once at startup and handed to
//! components through context; a missing capability degrades to a no-op or
//! to the fallback path instead of an error.

#[cfg(test)]
#[path = "capabilities_test.rs"]
mod capabilities_test;

use std::sync::Arc;

/// Re-renders icon placeholders (`<i data-lucide="...">`) into SVG.
pub trait IconRenderer: Send + Sync {
    fn render(&self);
}

/// Used when no icon library is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIcons;

impl IconRenderer for NoopIcons {
    fn render(&self) {}
}

/// Calls `window.lucide.createIcons()` when the script has loaded.
///
/// The global is looked up on every render because the script tag is
/// deferred and may arrive after hydration.
#[derive(Debug, Default, Clone, Copy)]
pub struct LucideIcons;

impl IconRenderer for LucideIcons {
    fn render(&self) {
        #[cfg(feature = "hydrate")]
        browser::create_lucide_icons();
    }
}

#[derive(Clone)]
pub struct Capabilities {
    pub icons: Arc<dyn IconRenderer>,
    pub intersection_observer: bool,
}

impl Capabilities {
    /// Nothing available. This is what SSR renders with.
    #[must_use]
    pub fn none() -> Self {
        Self { icons: Arc::new(NoopIcons), intersection_observer: false }
    }

    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self {
                icons: Arc::new(LucideIcons),
                intersection_observer: browser::has_global("IntersectionObserver"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::none()
        }
    }

    #[must_use]
    pub fn with_icons(mut self, icons: Arc<dyn IconRenderer>) -> Self {
        self.icons = icons;
        self
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("intersection_observer", &self.intersection_observer)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};

    pub(super) fn has_global(name: &str) -> bool {
        web_sys::window()
            .and_then(|window| js_sys::Reflect::has(&window, &JsValue::from_str(name)).ok())
            .unwrap_or(false)
    }

    pub(super) fn create_lucide_icons() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(lucide) = js_sys::Reflect::get(&window, &JsValue::from_str("lucide")) else {
            return;
        };
        if lucide.is_undefined() || lucide.is_null() {
            return;
        }
        let Ok(create) = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons")) else {
            return;
        };
        let Some(create) = create.dyn_ref::<js_sys::Function>() else {
            return;
        };
        if let Err(e) = create.call0(&lucide) {
            log::warn!("lucide.createIcons failed: {e:?}");
        }
    }
}

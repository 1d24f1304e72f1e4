//! Decorative button effects: click ripple, hover scale, and the canned
//! notifications some buttons raise.
//!
//! Listeners are delegated from `document` so buttons rendered after
//! hydration get the same behavior without rebinding.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::state::toast::Severity;

pub const BUTTON_SELECTOR: &str = "button, .btn";
pub const HOVER_SELECTOR: &str = ".card, .system-btn";
pub const RIPPLE_STYLE_ID: &str = "ripple-styles";
pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const HOVER_SCALE: &str = "scale(1.05)";
pub const REST_SCALE: &str = "scale(1)";

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

/// Square ripple centred on the click point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

/// `offset_x`/`offset_y` are the click position relative to the button's
/// top-left corner.
#[must_use]
pub fn ripple_geometry(width: f64, height: f64, offset_x: f64, offset_y: f64) -> RippleGeometry {
    let size = width.max(height);
    RippleGeometry { size, left: offset_x - size / 2.0, top: offset_y - size / 2.0 }
}

/// Toast raised by a button with the given label, if any.
#[must_use]
pub fn button_notification(label: &str) -> Option<(&'static str, Severity)> {
    let label = label.trim();
    if label.contains("Замовити") || label.contains("консультацію") {
        Some(("Дякуємо за інтерес! З вами незабаром зв'яжуться.", Severity::Success))
    } else if label.contains("партнером") {
        Some(("Заявка на партнерство відправлена!", Severity::Success))
    } else if label.contains("Скачати") || label.contains("Завантажити") {
        Some(("Завантаження розпочато...", Severity::Info))
    } else {
        None
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{install_click_effects, install_hover_effects};

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, HtmlElement, MouseEvent};

    use super::{
        BUTTON_SELECTOR, HOVER_SCALE, HOVER_SELECTOR, REST_SCALE, RIPPLE_KEYFRAMES, RIPPLE_LIFETIME_MS,
        RIPPLE_STYLE_ID, button_notification, ripple_geometry,
    };
    use crate::state::toast::ToastState;
    use crate::util::notify::show_notification;
    use crate::util::tasks::DelayedTask;

    /// Ripple on every button click; canned toasts for matching labels.
    pub fn install_click_effects(toasts: RwSignal<ToastState>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let doc = document.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Some(button) = target.closest(BUTTON_SELECTOR).ok().flatten() {
                if let Ok(button) = button.dyn_into::<HtmlElement>() {
                    spawn_ripple(&doc, &button, &ev);
                }
            }
            // Only the element actually clicked counts for the label match.
            if target.matches(BUTTON_SELECTOR).unwrap_or(false) {
                let label = target.text_content().unwrap_or_default();
                if let Some((message, severity)) = button_notification(&label) {
                    show_notification(toasts, message, severity);
                }
            }
        });
        if let Err(e) = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("click effects not installed: {e:?}");
        }
        on_click.forget();
    }

    fn spawn_ripple(document: &Document, button: &HtmlElement, ev: &MouseEvent) {
        ensure_ripple_styles(document);
        let rect = button.get_bounding_client_rect();
        let geometry = ripple_geometry(
            rect.width(),
            rect.height(),
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
        );
        let Ok(ripple) = document.create_element("span") else {
            return;
        };
        let _ = ripple.set_attribute("style", &geometry.style());
        let style = button.style();
        let _ = style.set_property("position", "relative");
        let _ = style.set_property("overflow", "hidden");
        if button.append_child(&ripple).is_err() {
            return;
        }
        DelayedTask::schedule(RIPPLE_LIFETIME_MS, move || ripple.remove()).detach();
    }

    // Inserted once per document.
    fn ensure_ripple_styles(document: &Document) {
        if document.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
            return;
        }
        let Some(head) = document.head() else {
            return;
        };
        let Ok(style) = document.create_element("style") else {
            return;
        };
        style.set_id(RIPPLE_STYLE_ID);
        style.set_text_content(Some(RIPPLE_KEYFRAMES));
        let _ = head.append_child(&style);
    }

    /// Scale cards and selector buttons up slightly while hovered.
    pub fn install_hover_effects() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(HOVER_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            for (event, scale) in [("mouseenter", HOVER_SCALE), ("mouseleave", REST_SCALE)] {
                let target = el.clone();
                let handler = Closure::<dyn FnMut()>::new(move || {
                    let _ = target.style().set_property("transform", scale);
                });
                let _ = el.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
                handler.forget();
            }
        }
    }
}

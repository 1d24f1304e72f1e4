//! Scroll-driven behavior: reveal-on-scroll, lazy images, smooth anchor
//! scrolling, and the debounced navbar scroll flag.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Element id referenced by a same-page anchor, or `None` when the href is
/// not a usable fragment (`"#"` alone, or not starting with `#`).
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Key for the `n`th element tagged for reveal tracking.
#[must_use]
pub fn reveal_key(n: u32) -> String {
    format!("reveal-{n}")
}

#[cfg(feature = "hydrate")]
pub use browser::{init_lazy_images, init_scroll_animations, install_navbar_scroll, install_smooth_scrolling};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};

    use leptos::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    };

    use super::{anchor_target, reveal_key};
    use crate::state::landing::LandingState;
    use crate::state::navbar::{SCROLL_DEBOUNCE_MS, is_scrolled};
    use crate::state::reveal::{
        HIDDEN_CLASS, REVEAL_KEY_ATTR, REVEAL_SELECTOR, ROOT_MARGIN, RevealKind, RevealTracker, THRESHOLD,
        parse_delay,
    };
    use crate::util::debounce::Debounced;
    use crate::util::tasks::DelayedTask;

    const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
    const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

    thread_local! {
        static REVEALED: RefCell<RevealTracker> = RefCell::new(RevealTracker::default());
        static NEXT_REVEAL_KEY: Cell<u32> = const { Cell::new(0) };
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn query_all(document: &Document, selector: &str) -> Vec<Element> {
        let Ok(nodes) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    fn new_observer(callback: &EntriesCallback, init: Option<&IntersectionObserverInit>) -> Option<IntersectionObserver> {
        let result = match init {
            Some(init) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init),
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
        };
        result.map_err(|e| log::warn!("IntersectionObserver unavailable: {e:?}")).ok()
    }

    fn intersecting(entries: &js_sys::Array) -> Vec<Element> {
        entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(IntersectionObserverEntry::is_intersecting)
            .map(|entry| entry.target())
            .collect()
    }

    fn ensure_reveal_key(element: &Element) -> String {
        if let Some(key) = element.get_attribute(REVEAL_KEY_ATTR) {
            return key;
        }
        let key = reveal_key(NEXT_REVEAL_KEY.with(|next| {
            let n = next.get();
            next.set(n + 1);
            n
        }));
        let _ = element.set_attribute(REVEAL_KEY_ATTR, &key);
        key
    }

    fn apply_reveal(element: &Element) {
        let classes = element.class_list();
        let Some(kind) = RevealKind::from_classes(classes.contains("animate-card"), classes.contains("animate-step"))
        else {
            return;
        };
        let _ = classes.remove_1(HIDDEN_CLASS);
        let _ = classes.add_1(kind.animation_class());
    }

    /// Observe every not-yet-revealed card and step. Safe to call again
    /// after new content is rendered: elements already revealed are skipped
    /// and each element animates at most once.
    ///
    /// Without `IntersectionObserver` everything is shown immediately.
    pub fn init_scroll_animations(intersection_supported: bool) {
        let Some(document) = document() else {
            return;
        };
        let elements = query_all(&document, REVEAL_SELECTOR);

        if !intersection_supported {
            for element in &elements {
                let _ = element.class_list().remove_1(HIDDEN_CLASS);
                if let Some(el) = element.dyn_ref::<HtmlElement>() {
                    let _ = el.style().set_property("opacity", "1");
                }
            }
            return;
        }

        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for element in intersecting(&entries) {
                observer.unobserve(&element);
                let key = element.get_attribute(REVEAL_KEY_ATTR).unwrap_or_default();
                if !REVEALED.with(|revealed| revealed.borrow_mut().claim(&key)) {
                    continue;
                }
                let delay = parse_delay(element.get_attribute("data-delay").as_deref());
                DelayedTask::schedule(delay, move || apply_reveal(&element)).detach();
            }
        });
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(THRESHOLD));
        init.set_root_margin(ROOT_MARGIN);
        let Some(observer) = new_observer(&callback, Some(&init)) else {
            return;
        };
        callback.forget();

        for element in &elements {
            let key = ensure_reveal_key(element);
            if REVEALED.with(|revealed| revealed.borrow().is_revealed(&key)) {
                continue;
            }
            observer.observe(element);
        }
    }

    /// Swap `data-src` into `src` as images scroll into view. Without
    /// `IntersectionObserver` images keep whatever `src` they have.
    pub fn init_lazy_images(intersection_supported: bool) {
        if !intersection_supported {
            return;
        }
        let Some(document) = document() else {
            return;
        };
        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for element in intersecting(&entries) {
                if let Some(src) = element.get_attribute("data-src") {
                    if let Some(img) = element.dyn_ref::<HtmlImageElement>() {
                        img.set_src(&src);
                    }
                }
                let _ = element.class_list().remove_1("lazy");
                observer.unobserve(&element);
            }
        });
        let Some(observer) = new_observer(&callback, None) else {
            return;
        };
        callback.forget();
        for img in query_all(&document, LAZY_IMAGE_SELECTOR) {
            observer.observe(&img);
        }
    }

    /// Same-page anchors scroll smoothly to their target. Anchors whose
    /// target does not exist keep their default behavior.
    pub fn install_smooth_scrolling() {
        let Some(document) = document() else {
            return;
        };
        let doc = document.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            let Some(anchor) = ev
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten())
            else {
                return;
            };
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            ev.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
        if let Err(e) = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("smooth scrolling not installed: {e:?}");
        }
        on_click.forget();
    }

    /// Keep `LandingState::navbar_scrolled` in sync with the scroll offset,
    /// trailing-debounced so a burst of scroll events updates it once.
    pub fn install_navbar_scroll(landing: RwSignal<LandingState>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let debounced = Debounced::new(SCROLL_DEBOUNCE_MS, move |scroll_y: f64| {
            landing.try_update(|state| state.navbar_scrolled = is_scrolled(scroll_y));
        });
        let win = window.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            debounced.call(win.scroll_y().unwrap_or(0.0));
        });
        if let Err(e) = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
            log::warn!("navbar scroll listener not installed: {e:?}");
        }
        on_scroll.forget();
    }
}

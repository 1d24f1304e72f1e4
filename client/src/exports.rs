//! `window.GravityBoxFunctions`: the page's helpers exposed to other
//! scripts.
//!
//! - `showNotification(message, type?)` shows a toast (`type` defaults to
//!   info). Arguments of the wrong JS type are coerced, never thrown on.
//! - `initSystemSwitching()` resets the selector to its default system.
//! - `initAccordion()` closes every panel.
//! - `initScrollAnimations()` observes cards and steps added since the last
//!   scan; already revealed elements are left alone.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::state::landing::LandingState;
use crate::state::toast::ToastState;
use crate::util::capabilities::Capabilities;
use crate::util::notify::{notification_args, show_notification};
use crate::util::viewport::init_scroll_animations;

pub const NAMESPACE: &str = "GravityBoxFunctions";

pub fn install(landing: RwSignal<LandingState>, toasts: RwSignal<ToastState>, caps: Capabilities) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let namespace = js_sys::Object::new();

    let show = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
        let (message, severity) = notification_args(message.as_string(), kind.as_string());
        show_notification(toasts, &message, severity);
    });
    set_member(&namespace, "showNotification", &show.into_js_value());

    let icons = caps.icons.clone();
    let reset_selector = Closure::<dyn Fn()>::new(move || {
        landing.try_update(|state| state.selector.reset());
        icons.render();
    });
    set_member(&namespace, "initSystemSwitching", &reset_selector.into_js_value());

    let close_accordion = Closure::<dyn Fn()>::new(move || {
        landing.try_update(|state| state.accordion.close_all());
    });
    set_member(&namespace, "initAccordion", &close_accordion.into_js_value());

    let intersection_supported = caps.intersection_observer;
    let rescan = Closure::<dyn Fn()>::new(move || init_scroll_animations(intersection_supported));
    set_member(&namespace, "initScrollAnimations", &rescan.into_js_value());

    set_member(&window, NAMESPACE, &namespace);
}

fn set_member(target: &JsValue, name: &str, value: &JsValue) {
    if let Err(e) = js_sys::Reflect::set(target, &JsValue::from_str(name), value) {
        log::warn!("could not export {name}: {e:?}");
    }
}

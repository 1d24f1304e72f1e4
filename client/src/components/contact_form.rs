//! Inline contact form (`form[data-contact-form]`).
//!
//! Collected values are only logged; the visitor gets a thank-you toast and
//! the form is cleared. Leads that must reach the CRM go through the modal.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::state::toast::{Severity, ToastState};
use crate::util::notify::show_notification;

pub const THANK_YOU_TEXT: &str = "Дякуємо! Ваша заявка відправлена.";

/// Form values keyed by input name, as they would be posted.
#[must_use]
pub fn contact_payload(name: &str, phone: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "phone": phone })
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = contact_payload(&name.get_untracked(), &phone.get_untracked());
        #[cfg(feature = "hydrate")]
        log::info!("contact form submitted: {payload}");
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
        show_notification(toasts, THANK_YOU_TEXT, Severity::Success);
        name.set(String::new());
        phone.set(String::new());
    };

    view! {
        <form data-contact-form="" class="grid md:grid-cols-3 gap-4" on:submit=on_submit>
            <input
                name="name"
                type="text"
                required
                placeholder="Ваше ім'я"
                class="rounded-lg px-4 py-3 text-gray-900"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                name="phone"
                type="tel"
                required
                placeholder="Телефон"
                class="rounded-lg px-4 py-3 text-gray-900"
                prop:value=move || phone.get()
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <button type="submit" class="btn bg-orange-500 text-white font-semibold rounded-lg px-6 py-3">
                "Відправити"
            </button>
        </form>
    }
}

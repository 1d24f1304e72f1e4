//! Lead-capture modal.
//!
//! The form posts to the server's lead proxy, which holds the CRM
//! credential. While a submission is pending the submit button is disabled
//! and further submits are ignored. After a successful send the modal
//! closes itself; reopening it before then cancels the pending close.

use leptos::prelude::*;

use crate::state::landing::LandingState;
use crate::state::lead::LeadFormState;
use crate::state::modal::ClickTarget;
use crate::util::tasks::cancel_named;

/// Name of the delayed auto-close task.
pub const MODAL_CLOSE_TASK: &str = "lead-modal-close";

/// Show the modal and cancel any pending auto-close.
pub fn open_lead_modal(landing: RwSignal<LandingState>) {
    cancel_named(MODAL_CLOSE_TASK);
    landing.update(|state| state.modal.open());
}

/// Button that opens the lead modal.
#[component]
pub fn OpenModalButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingState>>();
    let class = if class.is_empty() {
        "btn bg-orange-500 hover:bg-orange-600 text-white font-semibold px-8 py-3 rounded-lg".to_owned()
    } else {
        class
    };

    view! {
        <button type="button" id=id class=class on:click=move |_| open_lead_modal(landing)>
            {label}
        </button>
    }
}

#[component]
pub fn LeadModal() -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingState>>();
    let lead = expect_context::<RwSignal<LeadFormState>>();

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        let target = ClickTarget::from_target_is_current(ev.target() == ev.current_target());
        landing.update(|state| state.modal.handle_click(target));
    };
    let on_close = move |_| landing.update(|state| state.modal.close());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = lead.try_update(LeadFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{outcome_of, submit_lead};
            use crate::state::lead::{CLOSE_AFTER_SENT_MS, LeadOutcome};
            use crate::util::tasks::schedule_named;

            let result = submit_lead(&submission).await;
            if let Err(e) = &result {
                log::warn!("lead submission failed: {e}");
            }
            let outcome = outcome_of(&result);
            lead.update(|state| state.settle(outcome));
            if outcome == LeadOutcome::Sent {
                schedule_named(MODAL_CLOSE_TASK, CLOSE_AFTER_SENT_MS, move || {
                    landing.try_update(|state| state.modal.close());
                });
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    view! {
        <div
            id="modal"
            class="modal fixed inset-0 bg-black/60 z-50"
            style:display=move || landing.with(|state| state.modal.display())
            on:click=on_backdrop
        >
            <div class="modal-content bg-white text-gray-900 rounded-2xl max-w-md mx-auto mt-24 p-8 relative">
                <button type="button" id="closeModal" class="close absolute top-4 right-4 text-2xl" on:click=on_close>
                    "×"
                </button>
                <h3 class="text-2xl font-bold mb-6">"Залиште заявку"</h3>
                <form id="leadForm" class="space-y-4" on:submit=on_submit>
                    <input
                        name="name"
                        type="text"
                        required
                        placeholder="Ім'я"
                        class="w-full border rounded-lg px-4 py-2"
                        prop:value=move || lead.with(|state| state.fields.name.clone())
                        on:input=move |ev| lead.update(|state| state.fields.name = event_target_value(&ev))
                    />
                    <input
                        name="email"
                        type="email"
                        placeholder="Email"
                        class="w-full border rounded-lg px-4 py-2"
                        prop:value=move || lead.with(|state| state.fields.email.clone())
                        on:input=move |ev| lead.update(|state| state.fields.email = event_target_value(&ev))
                    />
                    <input
                        name="phone"
                        type="tel"
                        required
                        placeholder="Телефон"
                        class="w-full border rounded-lg px-4 py-2"
                        prop:value=move || lead.with(|state| state.fields.phone.clone())
                        on:input=move |ev| lead.update(|state| state.fields.phone = event_target_value(&ev))
                    />
                    <textarea
                        name="message"
                        placeholder="Повідомлення"
                        class="w-full border rounded-lg px-4 py-2"
                        prop:value=move || lead.with(|state| state.fields.message.clone())
                        on:input=move |ev| lead.update(|state| state.fields.message = event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        class="w-full bg-orange-500 text-white font-semibold py-3 rounded-lg"
                        disabled=move || lead.with(LeadFormState::in_flight)
                    >
                        "Відправити"
                    </button>
                </form>
                <p id="status" class="mt-4 text-center">{move || lead.with(LeadFormState::status_text)}</p>
            </div>
        </div>
    }
}

//! FAQ accordion. At most one panel is open; opening one closes the rest.

use leptos::prelude::*;

use crate::state::landing::LandingState;

#[derive(Clone, Copy, Debug)]
pub struct FaqItem {
    /// Panel element id, referenced by the trigger's `data-target`.
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[component]
pub fn Accordion(items: &'static [FaqItem]) -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingState>>();

    view! {
        <div class="accordion space-y-2">
            {items
                .iter()
                .map(|item| {
                    let target = item.id;
                    let is_open = move || landing.with(|state| state.accordion.is_open(target));
                    view! {
                        <div class="accordion-item border-b border-orange-700">
                            <button
                                type="button"
                                class="accordion-trigger w-full flex justify-between items-center py-4 text-left"
                                class:open=is_open
                                data-target=target
                                on:click=move |_| landing.update(|state| state.accordion.toggle(target))
                            >
                                <span class="font-medium">{item.question}</span>
                                <span class="accordion-icon">"+"</span>
                            </button>
                            <div id=target class="accordion-content" class:open=is_open>
                                <p class="pb-4 text-orange-200">{item.answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

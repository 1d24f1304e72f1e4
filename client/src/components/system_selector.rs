//! Hero-panel system selector.
//!
//! Clicking a system button highlights it and swaps the active icon and
//! label. The icon lives in a host span whose markup is replaced on change
//! and then handed to the icon renderer, since the icon library replaces
//! placeholder elements outside Leptos' control.

use leptos::prelude::*;

use crate::state::landing::LandingState;
use crate::state::system::SystemId;
use crate::util::capabilities::Capabilities;

#[component]
pub fn SystemSelector() -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingState>>();
    let caps = expect_context::<Capabilities>();
    let icon_host = NodeRef::<leptos::html::Span>::new();

    Effect::new(move || {
        let markup = landing.with(|state| state.selector.icon_markup());
        if let Some(host) = icon_host.get() {
            host.set_inner_html(&markup);
            caps.icons.render();
        }
    });

    let initial_icon = landing.with_untracked(|state| state.selector.icon_markup());

    view! {
        <div class="system-selector bg-orange-900/60 rounded-2xl p-6 shadow-xl">
            <div class="flex items-center gap-3 mb-6">
                <span class="active-system-icon" node_ref=icon_host inner_html=initial_icon></span>
                <span id="active-system-label" class="text-lg font-semibold text-white">
                    {move || landing.with(|state| state.selector.active().info().label)}
                </span>
            </div>
            <div class="grid grid-cols-2 gap-4">
                {SystemId::ALL
                    .into_iter()
                    .map(|id| {
                        let info = id.info();
                        view! {
                            <button
                                type="button"
                                class=move || landing.with(|state| state.selector.button_class(id))
                                data-system=id.as_str()
                                on:click=move |_| {
                                    landing.update(|state| {
                                        state.selector.select(id.as_str());
                                    });
                                }
                            >
                                <i data-lucide=info.icon class="w-6 h-6 mx-auto"></i>
                                <span class="block text-xs mt-2">{info.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

//! Top navigation bar with the mobile menu toggle.

use leptos::prelude::*;

use crate::state::landing::LandingState;

const LINKS: &[(&str, &str)] = &[
    ("#systems", "Системи"),
    ("#process", "Як це працює"),
    ("#gallery", "Наші роботи"),
    ("#faq", "Питання"),
    ("#contact", "Контакти"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingState>>();
    let toggle_menu = move |_| landing.update(LandingState::toggle_mobile_menu);

    view! {
        <nav class=move || landing.with(LandingState::navbar_class)>
            <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                <a href="#top" class="text-2xl font-bold text-orange-400">"Gravity Box"</a>
                <div class="hidden md:flex gap-8">
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="hover:text-orange-400">{*label}</a> })
                        .collect_view()}
                </div>
                <button type="button" id="mobile-menu-btn" class="md:hidden" on:click=toggle_menu>
                    <i data-lucide="menu" class="w-6 h-6"></i>
                </button>
            </div>
            <div id="mobile-menu" class=move || landing.with(LandingState::mobile_menu_class)>
                {LINKS
                    .iter()
                    .map(|(href, label)| view! { <a href=*href class="block px-6 py-3">{*label}</a> })
                    .collect_view()}
            </div>
        </nav>
    }
}

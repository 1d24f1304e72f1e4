//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;
use crate::state::landing::LandingState;
use crate::state::lead::LeadFormState;
use crate::state::toast::ToastState;
use crate::util::capabilities::Capabilities;

/// HTML shell rendered by the server around the app.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="uk">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <script src="https://unpkg.com/lucide@latest" defer></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component: provides shared state and routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(LandingState::default()));
    provide_context(RwSignal::new(LeadFormState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(Capabilities::detect());

    view! {
        <Stylesheet id="leptos" href="/pkg/gravitybox.css" />
        <Title text="Gravity Box" />
        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}

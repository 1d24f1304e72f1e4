//! Renders active toasts. Clicking a toast dismisses it early.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};
use crate::util::notify::dismiss_notification;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <For
            each=move || toasts.with(|state| state.toasts.iter().map(|t| t.id).collect::<Vec<_>>())
            key=|id| *id
            children=move |id: u64| {
                let (message, class) = toasts
                    .with_untracked(|state| state.get(id).map(|t| (t.message.clone(), t.class())))
                    .unwrap_or_default();
                view! {
                    <div
                        class=class
                        role="status"
                        style=move || toasts.with(|state| state.get(id).map(Toast::style).unwrap_or_default())
                        on:click=move |_| dismiss_notification(toasts, id)
                    >
                        {message}
                    </div>
                }
            }
        />
    }
}

//! Toast notifications.
//!
//! A toast lives in `ToastState`; its lifecycle is three delayed steps
//! (slide in, slide out, remove) kept in a per-toast `TaskSlots` entry so a
//! manual dismissal cancels whatever is still pending.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::state::toast::{ENTER_DELAY_MS, EXIT_MS, Severity, ToastPhase, ToastState, VISIBLE_MS};
use crate::util::tasks::{DelayedTask, TaskSlots};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    Show,
    Leave,
    Remove,
}

/// Offsets from creation at which each step runs.
#[must_use]
pub fn lifecycle_plan() -> [(u32, LifecycleStep); 3] {
    [
        (ENTER_DELAY_MS, LifecycleStep::Show),
        (VISIBLE_MS, LifecycleStep::Leave),
        (VISIBLE_MS + EXIT_MS, LifecycleStep::Remove),
    ]
}

/// Apply one step to the state. Returns whether the toast was still there.
pub fn apply_step(state: &mut ToastState, id: u64, step: LifecycleStep) -> bool {
    match step {
        LifecycleStep::Show => state.set_phase(id, ToastPhase::Shown),
        LifecycleStep::Leave => state.set_phase(id, ToastPhase::Leaving),
        LifecycleStep::Remove => {
            let present = state.get(id).is_some();
            state.remove(id);
            present
        }
    }
}

/// Coerce loosely typed `showNotification(message, type)` arguments: a
/// missing or non-string message becomes empty, a missing or unknown type
/// becomes info.
#[must_use]
pub fn notification_args(message: Option<String>, kind: Option<String>) -> (String, Severity) {
    let severity = kind.as_deref().map_or(Severity::Info, Severity::parse);
    (message.unwrap_or_default(), severity)
}

thread_local! {
    static TOAST_TASKS: RefCell<TaskSlots<u64>> = RefCell::new(TaskSlots::new());
}

/// Show a toast and schedule its lifecycle. Returns the toast id, or `None`
/// if the toast signal has been disposed.
pub fn show_notification(toasts: RwSignal<ToastState>, message: &str, severity: Severity) -> Option<u64> {
    let id = toasts.try_update(|state| state.push(message, severity))?;
    let tasks = lifecycle_plan()
        .into_iter()
        .map(|(delay_ms, step)| {
            DelayedTask::schedule(delay_ms, move || {
                toasts.try_update(|state| apply_step(state, id, step));
                if step == LifecycleStep::Remove {
                    release_later(id);
                }
            })
        })
        .collect();
    TOAST_TASKS.with(|slots| slots.borrow_mut().replace(id, tasks));
    Some(id)
}

/// Remove a toast now and cancel its remaining lifecycle.
pub fn dismiss_notification(toasts: RwSignal<ToastState>, id: u64) {
    TOAST_TASKS.with(|slots| slots.borrow_mut().cancel(&id));
    toasts.try_update(|state| state.remove(id));
}

#[must_use]
pub fn has_pending_lifecycle(id: u64) -> bool {
    TOAST_TASKS.with(|slots| slots.borrow().is_pending(&id))
}

// The final step runs inside its own timer callback; dropping the timer
// there would free the closure mid-call, so the slot is released on the
// next tick.
fn release_later(id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        TOAST_TASKS.with(|slots| slots.borrow_mut().release(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    TOAST_TASKS.with(|slots| slots.borrow_mut().release(&id));
}

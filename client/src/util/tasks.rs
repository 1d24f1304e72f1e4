//! Delayed tasks with cancellation handles.
//!
//! DESIGN
//! ======
//! Every timer on the page (toast lifecycle, ripple cleanup, modal
//! auto-close, debounce) is a `DelayedTask`. Dropping the handle cancels the
//! callback, so whoever owns the handle decides how long it may stay
//! pending. `detach` is for fire-and-forget work that must run regardless.
//!
//! Off the browser there is no timer source: tasks are recorded but their
//! callbacks never run.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// A callback scheduled to run once after `delay_ms`.
#[must_use = "dropping a DelayedTask cancels it"]
pub struct DelayedTask {
    delay_ms: u32,
    #[cfg(feature = "hydrate")]
    timeout: Option<Timeout>,
}

impl DelayedTask {
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { delay_ms, timeout: Some(Timeout::new(delay_ms, callback)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(callback);
            Self { delay_ms }
        }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Cancel the callback if it has not fired yet.
    pub fn cancel(self) {
        drop(self);
    }

    /// Let the callback run even though the handle goes away.
    pub fn detach(self) {
        #[cfg(feature = "hydrate")]
        {
            let mut this = self;
            if let Some(timeout) = this.timeout.take() {
                let _ = timeout.forget();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
        }
    }
}

impl std::fmt::Debug for DelayedTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelayedTask").field("delay_ms", &self.delay_ms).finish_non_exhaustive()
    }
}

/// Pending tasks grouped under a key. Replacing or cancelling a key drops
/// (and so cancels) whatever was scheduled under it before.
///
/// Entries whose callbacks already fired stay until the key is replaced,
/// cancelled, or released; dropping a fired task is harmless.
#[derive(Debug)]
pub struct TaskSlots<K> {
    slots: HashMap<K, Vec<DelayedTask>>,
}

impl<K: Eq + Hash> TaskSlots<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { slots: HashMap::new() }
    }

    pub fn replace(&mut self, key: K, tasks: Vec<DelayedTask>) {
        self.slots.insert(key, tasks);
    }

    /// Cancel everything under `key`. Returns whether anything was pending.
    pub fn cancel(&mut self, key: &K) -> bool {
        self.slots.remove(key).is_some_and(|tasks| !tasks.is_empty())
    }

    /// Forget `key` once its tasks have all run.
    ///
    /// Must not be called from inside one of those tasks' callbacks; defer
    /// it to a later tick instead.
    pub fn release(&mut self, key: &K) {
        self.slots.remove(key);
    }

    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.slots.get(key).is_some_and(|tasks| !tasks.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K: Eq + Hash> Default for TaskSlots<K> {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static NAMED_TASKS: RefCell<TaskSlots<&'static str>> = RefCell::new(TaskSlots::new());
}

/// Schedule `callback` under a page-wide name, cancelling any earlier task
/// with the same name.
pub fn schedule_named(name: &'static str, delay_ms: u32, callback: impl FnOnce() + 'static) {
    let task = DelayedTask::schedule(delay_ms, callback);
    NAMED_TASKS.with(|slots| slots.borrow_mut().replace(name, vec![task]));
}

/// Cancel the named task. Returns whether one was pending.
pub fn cancel_named(name: &'static str) -> bool {
    NAMED_TASKS.with(|slots| slots.borrow_mut().cancel(&name))
}

#[must_use]
pub fn is_named_pending(name: &'static str) -> bool {
    NAMED_TASKS.with(|slots| slots.borrow().is_pending(&name))
}

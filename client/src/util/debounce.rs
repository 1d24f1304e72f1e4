//! Trailing-edge debounce.
//!
//! `TrailingDebounce` is the bookkeeping: every push bumps a generation and
//! remembers the latest value; a timer firing with a stale generation finds
//! nothing to deliver. `Debounced` wires that to a `DelayedTask` in the
//! browser so only the last call of a burst reaches the handler, after
//! `wait_ms` of quiet.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Debug)]
pub struct TrailingDebounce<T> {
    generation: u64,
    latest: Option<T>,
}

impl<T> TrailingDebounce<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { generation: 0, latest: None }
    }

    /// Record a call. Returns the generation a timer should fire with.
    pub fn push(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.latest = Some(value);
        self.generation
    }

    /// Take the pending value if `generation` is still the newest call.
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.latest.take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.latest.is_some()
    }
}

impl<T> Default for TrailingDebounce<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::Debounced;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::TrailingDebounce;
    use crate::util::tasks::DelayedTask;

    pub struct Debounced<T: 'static> {
        wait_ms: u32,
        state: Rc<RefCell<TrailingDebounce<T>>>,
        pending: RefCell<Option<DelayedTask>>,
        handler: Rc<dyn Fn(T)>,
    }

    impl<T: 'static> Debounced<T> {
        pub fn new(wait_ms: u32, handler: impl Fn(T) + 'static) -> Self {
            Self {
                wait_ms,
                state: Rc::new(RefCell::new(TrailingDebounce::new())),
                pending: RefCell::new(None),
                handler: Rc::new(handler),
            }
        }

        pub fn call(&self, value: T) {
            let generation = self.state.borrow_mut().push(value);
            let state = Rc::clone(&self.state);
            let handler = Rc::clone(&self.handler);
            let task = DelayedTask::schedule(self.wait_ms, move || {
                let ready = state.borrow_mut().fire(generation);
                if let Some(value) = ready {
                    handler(value);
                }
            });
            // Replacing the handle cancels the previous timer.
            *self.pending.borrow_mut() = Some(task);
        }
    }
}

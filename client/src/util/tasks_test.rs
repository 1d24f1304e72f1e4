use super::*;

#[test]
fn schedule_keeps_delay() {
    let task = DelayedTask::schedule(250, || {});
    assert_eq!(task.delay_ms(), 250);
    task.cancel();
}

#[test]
fn callbacks_never_run_off_browser() {
    use std::rc::Rc;
    use std::cell::Cell;

    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    DelayedTask::schedule(0, move || flag.set(true)).detach();
    assert!(!ran.get());
}

#[test]
fn slots_replace_and_cancel() {
    let mut slots = TaskSlots::new();
    assert!(!slots.is_pending(&1_u64));

    slots.replace(1_u64, vec![DelayedTask::schedule(100, || {}), DelayedTask::schedule(3_000, || {})]);
    assert!(slots.is_pending(&1));
    assert_eq!(slots.len(), 1);

    slots.replace(1, vec![DelayedTask::schedule(10, || {})]);
    assert_eq!(slots.len(), 1, "replacing reuses the key");

    assert!(slots.cancel(&1));
    assert!(!slots.cancel(&1), "second cancel finds nothing");
    assert!(slots.is_empty());
}

#[test]
fn slots_release_forgets_key() {
    let mut slots = TaskSlots::new();
    slots.replace("toast", vec![DelayedTask::schedule(300, || {})]);
    slots.release(&"toast");
    assert!(!slots.is_pending(&"toast"));
}

#[test]
fn empty_task_list_is_not_pending() {
    let mut slots: TaskSlots<u8> = TaskSlots::default();
    slots.replace(7, Vec::new());
    assert!(!slots.is_pending(&7));
    assert!(!slots.cancel(&7));
}

#[test]
fn named_tasks_cancel_previous() {
    schedule_named("test-named-close", 2_000, || {});
    assert!(is_named_pending("test-named-close"));
    schedule_named("test-named-close", 2_000, || {});
    assert!(cancel_named("test-named-close"));
    assert!(!is_named_pending("test-named-close"));
}

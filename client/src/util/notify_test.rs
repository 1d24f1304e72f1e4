use super::*;

#[test]
fn plan_matches_toast_timing() {
    let plan = lifecycle_plan();
    assert_eq!(plan[0], (100, LifecycleStep::Show));
    assert_eq!(plan[1], (3_000, LifecycleStep::Leave));
    assert_eq!(plan[2], (3_300, LifecycleStep::Remove));
}

#[test]
fn steps_walk_a_toast_through_its_phases() {
    let mut state = ToastState::default();
    let id = state.push("Привіт", Severity::Success);
    assert_eq!(state.get(id).map(|t| t.phase), Some(ToastPhase::Entering));

    assert!(apply_step(&mut state, id, LifecycleStep::Show));
    assert_eq!(state.get(id).map(|t| t.phase), Some(ToastPhase::Shown));

    assert!(apply_step(&mut state, id, LifecycleStep::Leave));
    assert_eq!(state.get(id).map(|t| t.phase), Some(ToastPhase::Leaving));

    assert!(apply_step(&mut state, id, LifecycleStep::Remove));
    assert!(state.get(id).is_none());
}

#[test]
fn steps_after_dismissal_are_no_ops() {
    let mut state = ToastState::default();
    let id = state.push("gone", Severity::Info);
    state.remove(id);
    assert!(!apply_step(&mut state, id, LifecycleStep::Show));
    assert!(!apply_step(&mut state, id, LifecycleStep::Remove));
    assert!(state.toasts.is_empty());
}

#[test]
fn show_then_dismiss_cancels_lifecycle() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let id = show_notification(toasts, "Завантаження розпочато...", Severity::Info).expect("signal alive");
        assert!(has_pending_lifecycle(id));
        assert_eq!(toasts.with_untracked(|s| s.toasts.len()), 1);

        dismiss_notification(toasts, id);
        assert!(!has_pending_lifecycle(id));
        assert!(toasts.with_untracked(|s| s.toasts.is_empty()));
    });
}

#[test]
fn toasts_stack_in_creation_order() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let first = show_notification(toasts, "one", Severity::Info).expect("signal alive");
        let second = show_notification(toasts, "two", Severity::Error).expect("signal alive");
        assert_ne!(first, second);
        let messages = toasts.with_untracked(|s| s.toasts.iter().map(|t| t.message.clone()).collect::<Vec<_>>());
        assert_eq!(messages, vec!["one".to_string(), "two".to_string()]);
    });
}

#[test]
fn loose_notification_args_are_coerced() {
    assert_eq!(
        notification_args(Some("Готово".into()), Some("success".into())),
        ("Готово".to_string(), Severity::Success)
    );
    assert_eq!(notification_args(Some("hi".into()), None), ("hi".to_string(), Severity::Info));
    assert_eq!(notification_args(None, Some("warning".into())), (String::new(), Severity::Info));
    assert_eq!(notification_args(None, None), (String::new(), Severity::Info));
}

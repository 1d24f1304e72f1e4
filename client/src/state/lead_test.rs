use super::*;

fn filled() -> LeadFormState {
    LeadFormState {
        fields: LeadFields {
            name: "Ivan".into(),
            email: "i@x.com".into(),
            phone: "123".into(),
            message: "hi".into(),
        },
        ..LeadFormState::default()
    }
}

#[test]
fn begin_submit_snapshots_fields() {
    let mut state = filled();
    let submission = state.begin_submit().unwrap();
    assert_eq!(
        submission,
        LeadSubmission { name: "Ivan".into(), email: "i@x.com".into(), phone: "123".into(), message: "hi".into() }
    );
    assert!(state.in_flight());
}

#[test]
fn second_submit_while_pending_is_refused() {
    let mut state = filled();
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
}

#[test]
fn success_clears_fields_and_sets_text() {
    let mut state = filled();
    state.begin_submit();
    state.settle(LeadOutcome::Sent);
    assert_eq!(state.fields, LeadFields::default());
    assert_eq!(state.status_text(), SENT_TEXT);
    assert!(!state.in_flight());
}

#[test]
fn http_failure_keeps_fields() {
    let mut state = filled();
    state.begin_submit();
    state.settle(LeadOutcome::Rejected { status: 500 });
    assert_eq!(state.fields, filled().fields);
    assert_eq!(state.status_text(), REJECTED_TEXT);
}

#[test]
fn transport_failure_text_differs_from_http_failure() {
    let mut state = filled();
    state.begin_submit();
    state.settle(LeadOutcome::ConnectionFailed);
    assert_eq!(state.status_text(), CONNECTION_FAILED_TEXT);
    assert_ne!(CONNECTION_FAILED_TEXT, REJECTED_TEXT);
    assert_eq!(state.fields, filled().fields);
}

#[test]
fn can_resubmit_after_failure() {
    let mut state = filled();
    state.begin_submit();
    state.settle(LeadOutcome::Rejected { status: 502 });
    assert!(state.begin_submit().is_some());
}

#[test]
fn idle_and_sending_show_no_text() {
    assert_eq!(LeadStatus::Idle.text(), "");
    assert_eq!(LeadStatus::Sending.text(), "");
    assert_eq!(LeadFormState::default().status_text(), "");
}

#[test]
fn previous_result_stays_visible_while_sending() {
    let mut state = filled();
    state.begin_submit();
    assert_eq!(state.status_text(), "", "nothing settled yet");
    state.settle(LeadOutcome::Rejected { status: 500 });

    assert!(state.begin_submit().is_some());
    assert!(state.in_flight());
    assert_eq!(state.status_text(), REJECTED_TEXT);

    state.settle(LeadOutcome::Sent);
    assert_eq!(state.status_text(), SENT_TEXT);
}

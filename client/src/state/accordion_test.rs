use super::*;

#[test]
fn starts_with_everything_closed() {
    let state = AccordionState::default();
    assert_eq!(state.open_count(), 0);
    assert_eq!(state.open_panel(), None);
}

#[test]
fn clicking_closed_panel_opens_exactly_it() {
    let mut state = AccordionState::default();
    state.toggle("faq-1");
    assert!(state.is_open("faq-1"));
    assert_eq!(state.open_count(), 1);

    state.toggle("faq-2");
    assert!(state.is_open("faq-2"));
    assert!(!state.is_open("faq-1"));
    assert_eq!(state.open_count(), 1);
}

#[test]
fn clicking_open_panel_closes_it() {
    let mut state = AccordionState::default();
    state.toggle("faq-3");
    state.toggle("faq-3");
    assert_eq!(state.open_count(), 0);
    assert!(!state.is_open("faq-3"));
}

#[test]
fn close_all_clears_open_panel() {
    let mut state = AccordionState::default();
    state.toggle("faq-1");
    state.close_all();
    assert_eq!(state.open_panel(), None);
}

#[test]
fn alternating_clicks_never_open_two() {
    let mut state = AccordionState::default();
    for target in ["a", "b", "b", "c", "a", "a", "c"] {
        state.toggle(target);
        assert!(state.open_count() <= 1);
    }
    assert!(state.is_open("c"));
}

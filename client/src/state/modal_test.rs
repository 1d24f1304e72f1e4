use super::*;

#[test]
fn modal_starts_hidden() {
    let state = ModalState::default();
    assert!(!state.is_open());
    assert_eq!(state.display(), "none");
}

#[test]
fn open_and_close_set_display() {
    let mut state = ModalState::default();
    state.open();
    assert_eq!(state.display(), "block");
    state.close();
    assert_eq!(state.display(), "none");
}

#[test]
fn backdrop_click_closes() {
    let mut state = ModalState::default();
    state.open();
    state.handle_click(ClickTarget::Backdrop);
    assert!(!state.is_open());
}

#[test]
fn content_click_keeps_modal_open() {
    let mut state = ModalState::default();
    state.open();
    state.handle_click(ClickTarget::Content);
    assert!(state.is_open());
}

#[test]
fn click_target_classification() {
    assert_eq!(ClickTarget::from_target_is_current(true), ClickTarget::Backdrop);
    assert_eq!(ClickTarget::from_target_is_current(false), ClickTarget::Content);
}

use super::*;

#[test]
fn single_call_fires_with_its_value() {
    let mut debounce = TrailingDebounce::new();
    let generation = debounce.push(42.0_f64);
    assert!(debounce.is_pending());
    assert_eq!(debounce.fire(generation), Some(42.0));
    assert!(!debounce.is_pending());
}

#[test]
fn burst_delivers_only_the_last_value() {
    let mut debounce = TrailingDebounce::new();
    let first = debounce.push(10.0_f64);
    let second = debounce.push(80.0);
    let last = debounce.push(150.0);

    assert_eq!(debounce.fire(first), None);
    assert_eq!(debounce.fire(second), None);
    assert_eq!(debounce.fire(last), Some(150.0));
}

#[test]
fn value_is_delivered_once() {
    let mut debounce = TrailingDebounce::new();
    let generation = debounce.push("scroll");
    assert_eq!(debounce.fire(generation), Some("scroll"));
    assert_eq!(debounce.fire(generation), None);
}

#[test]
fn stale_timer_after_delivery_is_ignored() {
    let mut debounce = TrailingDebounce::default();
    let old = debounce.push(1_u32);
    let new = debounce.push(2);
    assert_eq!(debounce.fire(new), Some(2));
    assert_eq!(debounce.fire(old), None);
}

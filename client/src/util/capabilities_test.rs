use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingIcons {
    renders: AtomicUsize,
}

impl IconRenderer for CountingIcons {
    fn render(&self) {
        self.renders.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn none_has_no_observer() {
    let caps = Capabilities::none();
    assert!(!caps.intersection_observer);
    caps.icons.render();
}

#[test]
fn detect_off_browser_matches_none() {
    let caps = Capabilities::detect();
    assert!(!caps.intersection_observer);
}

#[test]
fn custom_renderer_is_called_through_capabilities() {
    let counter = Arc::new(CountingIcons::default());
    let caps = Capabilities::none().with_icons(counter.clone());
    caps.icons.render();
    caps.clone().icons.render();
    assert_eq!(counter.renders.load(Ordering::SeqCst), 2);
}

#[test]
fn lucide_renderer_tolerates_missing_script() {
    LucideIcons.render();
}

#[test]
fn debug_omits_renderer() {
    let text = format!("{:?}", Capabilities::default());
    assert!(text.contains("intersection_observer: false"));
}

//! Navbar scroll styling.

/// Vertical offset (px) past which the navbar gets its `scrolled` style.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Trailing debounce window for the scroll listener.
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

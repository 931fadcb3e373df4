//! Smooth Scrolling

use web_sys::{Element, ScrollBehavior, ScrollToOptions};

/// Document offset that puts an element `offset` pixels below the viewport top.
pub fn scroll_target(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    element_top + scroll_y - offset
}

pub fn smooth_scroll_to(element: &Element, offset: f64) {
    let Some(win) = web_sys::window() else { return };
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let top = scroll_target(element.get_bounding_client_rect().top(), scroll_y, offset);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(120.0, 800.0, 0.0), 920.0);
        // Leave room for a fixed header
        assert_eq!(scroll_target(120.0, 800.0, 70.0), 850.0);
        assert_eq!(scroll_target(-300.0, 800.0, 0.0), 500.0);
    }
}

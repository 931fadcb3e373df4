//! Progress Bar Animations
//!
//! Two flavours: a linear one-percent-per-frame walk, and a one second
//! cubic ease-out. Both always finish on the exact target width.

use web_sys::HtmlElement;

use crate::dom::{set_width_percent, width_percent};
use crate::easing::{ease_between, progress_fraction};
use crate::frame::{next_frame, now};

/// Length of the eased progress animation
pub const EASE_DURATION_MS: f64 = 1000.0;

/// Width one percent closer to `target`.
pub fn step_toward(current: i64, target: i64) -> i64 {
    use std::cmp::Ordering::*;
    match current.cmp(&target) {
        Less => current + 1,
        Greater => current - 1,
        Equal => current,
    }
}

/// Walk `bar` toward `target_percent`, one percent per animation frame.
pub async fn animate_progress_bar(bar: HtmlElement, target_percent: i64) {
    let mut current = width_percent(&bar).unwrap_or(0);
    while current != target_percent {
        current = step_toward(current, target_percent);
        set_width_percent(&bar, current);
        next_frame().await;
    }
    set_width_percent(&bar, target_percent);
}

/// Ease `bar` from its current width to `new_percent` over [`EASE_DURATION_MS`].
pub async fn update_progress_with_animation(bar: HtmlElement, new_percent: f64) {
    let start_percent = width_percent(&bar).unwrap_or(0) as f64;
    let started_at = now();
    loop {
        let elapsed = next_frame().await - started_at;
        if progress_fraction(elapsed, EASE_DURATION_MS) >= 1.0 {
            break;
        }
        set_width_percent(&bar, ease_between(start_percent, new_percent, elapsed, EASE_DURATION_MS));
    }
    set_width_percent(&bar, new_percent);
}

//! Page Bootstrap
//!
//! Wires every effect and handler to the page once the document is ready.
//! Runs once per page load; running it again would bind handlers twice.

use std::rc::Rc;

use leptos::task::spawn_local;
use web_sys::{Element, HtmlElement};

use web_motion::counter::DEFAULT_COUNTER_DURATION_MS;
use web_motion::dom::{query_all, set_width_percent, width_percent};
use web_motion::{
    add_ripple_effect, animate_counter, dom_ready, inject_keyframes, observe_cards, parse_int_prefix, sleep,
    update_progress_with_animation,
};

use crate::config::UiConfig;
use crate::handlers::enroll::PATH_ID_ATTR;
use crate::handlers::{enhance_enroll_button, enhance_generate_form};

pub const ENROLL_BUTTON_ID: &str = "enroll-btn";
pub const ENROLL_BUTTONS: &str = "#enroll-btn, [data-path-id]";
pub const RIPPLE_BUTTONS: &str = ".btn-primary, .btn-success";
pub const PROGRESS_BARS: &str = ".progress-fill";
pub const COUNTERS: &str = ".stat-value, .h4";

/// Number a stat element should count up to, if its text starts with a
/// positive integer.
pub fn counter_target(text: &str) -> Option<i64> {
    parse_int_prefix(text.trim()).filter(|n| *n > 0)
}

/// Enhance the page. Resolves once everything is bound; running
/// animations continue on their own tasks.
pub async fn run() {
    dom_ready().await;

    let config = Rc::new(UiConfig::from_document());
    log::set_max_level(config.log_level);
    log::info!("Enhancing learning paths page");

    inject_keyframes();
    if let Err(err) = observe_cards() {
        log::warn!("Card reveal unavailable: {err:?}");
    }

    for button in query_all::<HtmlElement>(ENROLL_BUTTONS) {
        if button.id() == ENROLL_BUTTON_ID || button.has_attribute(PATH_ID_ATTR) {
            enhance_enroll_button(button, config.clone());
        }
    }

    enhance_generate_form(config.clone());

    for button in query_all::<HtmlElement>(RIPPLE_BUTTONS) {
        add_ripple_effect(&button);
    }

    animate_progress_bars(config.progress_stagger_ms);
    animate_counters();
}

fn animate_progress_bars(stagger_ms: u32) {
    let bars: Vec<(HtmlElement, i64)> = query_all::<HtmlElement>(PROGRESS_BARS)
        .into_iter()
        .filter_map(|bar| {
            let percent = width_percent(&bar).unwrap_or(0);
            (percent > 0).then_some((bar, percent))
        })
        .collect();
    if bars.is_empty() {
        return;
    }

    for (bar, _) in &bars {
        set_width_percent(bar, 0);
    }
    spawn_local(async move {
        sleep(stagger_ms).await;
        for (bar, percent) in bars {
            spawn_local(update_progress_with_animation(bar, percent as f64));
        }
    });
}

fn animate_counters() {
    for element in query_all::<Element>(COUNTERS) {
        let text = element.text_content().unwrap_or_default();
        if let Some(target) = counter_target(&text) {
            spawn_local(animate_counter(element, target, DEFAULT_COUNTER_DURATION_MS));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_target() {
        assert_eq!(counter_target(" 128 "), Some(128));
        assert_eq!(counter_target("12 tutorials"), Some(12));
        assert_eq!(counter_target("0"), None);
        assert_eq!(counter_target("-3"), None);
        assert_eq!(counter_target("Beginner"), None);
        assert_eq!(counter_target(""), None);
    }
}

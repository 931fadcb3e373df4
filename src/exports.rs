//! JavaScript Interface
//!
//! Helpers other page scripts may call, exported under camelCase names.

use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::components::{self, DEFAULT_SKELETON_COUNT};
use crate::config::{UiConfig, DEFAULT_TOAST_DURATION_MS};
use crate::handlers;
use crate::models::{Severity, Toast};

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, severity: Option<String>, duration_ms: Option<u32>) {
    let severity = severity.as_deref().map(Severity::from_name).unwrap_or_default();
    let toast = Toast::new(message, severity).lasting(duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS));
    spawn_local(components::show_toast(toast));
}

#[wasm_bindgen(js_name = smoothScrollTo)]
pub fn smooth_scroll_to(element: Element, offset: Option<f64>) {
    web_motion::smooth_scroll_to(&element, offset.unwrap_or(0.0));
}

#[wasm_bindgen(js_name = animateProgressBar)]
pub fn animate_progress_bar(bar: HtmlElement, target_percent: i32) {
    spawn_local(web_motion::animate_progress_bar(bar, i64::from(target_percent)));
}

#[wasm_bindgen(js_name = updateProgressWithAnimation)]
pub fn update_progress_with_animation(bar: HtmlElement, new_percent: f64) {
    spawn_local(web_motion::update_progress_with_animation(bar, new_percent));
}

#[wasm_bindgen(js_name = createConfetti)]
pub fn create_confetti() {
    web_motion::create_confetti();
}

#[wasm_bindgen(js_name = enhanceEnrollButton)]
pub fn enhance_enroll_button(button: Option<HtmlElement>) {
    if let Some(button) = button {
        handlers::enhance_enroll_button(button, Rc::new(UiConfig::from_document()));
    }
}

#[wasm_bindgen(js_name = showSkeleton)]
pub fn show_skeleton(container: HtmlElement, count: Option<u32>) {
    let count = count.map_or(DEFAULT_SKELETON_COUNT, |n| n as usize);
    components::show_skeleton(container, count);
}

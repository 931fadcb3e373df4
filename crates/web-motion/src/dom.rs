//! DOM Helpers
//!
//! Query, style and string-parsing helpers shared by the effects.

use std::fmt::Display;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn collect_nodes<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// All elements in the document matching `selector`, cast to `T`.
/// Nodes that are not a `T` are skipped.
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(collect_nodes)
        .unwrap_or_default()
}

/// Like [`query_all`], scoped to the descendants of `parent`.
pub fn query_all_in<T: JsCast>(parent: &Element, selector: &str) -> Vec<T> {
    parent
        .query_selector_all(selector)
        .map(collect_nodes)
        .unwrap_or_default()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Inline `width` of `el` as an integer percentage (`"42.5%"` -> 42).
pub fn width_percent(el: &HtmlElement) -> Option<i64> {
    el.style()
        .get_property_value("width")
        .ok()
        .and_then(|width| parse_int_prefix(&width))
}

pub fn set_width_percent(el: &HtmlElement, percent: impl Display) {
    set_style(el, "width", &format!("{percent}%"));
}

/// Leading integer of `s`, read the way `parseInt(s, 10)` reads it:
/// leading whitespace skipped, optional sign, then decimal digits up to the
/// first non-digit. `None` when no digit follows.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Resolves once the document has been parsed.
///
/// Returns immediately when `DOMContentLoaded` has already fired.
pub async fn dom_ready() {
    let Some(doc) = document() else { return };
    if doc.ready_state() != "loading" {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let _ = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    });
    let _ = JsFuture::from(promise).await;
}

//! Click Ripple
//!
//! Spawns an expanding circle from the click point. The `.ripple` class
//! (page stylesheet) owns the expansion animation.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;

/// How long a ripple node stays in the button
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Placement of a ripple inside its button, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Square centred on the click, sized to the button's larger side.
    pub fn from_click(
        rect_left: f64,
        rect_top: f64,
        width: f64,
        height: f64,
        client_x: f64,
        client_y: f64,
    ) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }
}

fn spawn_ripple(button: &HtmlElement, geometry: RippleGeometry) -> Result<(), JsValue> {
    let doc = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;
    let ripple: HtmlElement = doc.create_element("span")?.dyn_into()?;

    let size = format!("{}px", geometry.size);
    let style = ripple.style();
    style.set_property("width", &size)?;
    style.set_property("height", &size)?;
    style.set_property("left", &format!("{}px", geometry.left))?;
    style.set_property("top", &format!("{}px", geometry.top))?;
    ripple.class_list().add_1("ripple")?;

    button.append_child(&ripple)?;
    Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    Ok(())
}

/// Attach the ripple effect to `button`. Every click spawns a new ripple.
pub fn add_ripple_effect(button: &HtmlElement) {
    let target = button.clone();
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let geometry = RippleGeometry::from_click(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
        );
        if let Err(err) = spawn_ripple(&target, geometry) {
            log::debug!("ripple skipped: {err:?}");
        }
    });
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_centred_on_click() {
        // 200x40 button at (100, 50), clicked at its centre
        let g = RippleGeometry::from_click(100.0, 50.0, 200.0, 40.0, 200.0, 70.0);
        assert_eq!(g.size, 200.0);
        assert_eq!(g.left, 0.0);
        assert_eq!(g.top, -80.0);
    }

    #[test]
    fn test_ripple_uses_larger_side() {
        let tall = RippleGeometry::from_click(0.0, 0.0, 30.0, 90.0, 15.0, 45.0);
        assert_eq!(tall.size, 90.0);
        assert_eq!(tall.left, -30.0);
        assert_eq!(tall.top, 0.0);
    }
}

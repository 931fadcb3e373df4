//! Confetti
//!
//! A burst of round particles falling from the top of the viewport.
//! Particles are removed on a fixed timer, independent of their fall time.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

pub const CONFETTI_COLORS: [&str; 5] = ["#0084ff", "#00c6ff", "#22c55e", "#fbbf24", "#ef4444"];
pub const CONFETTI_COUNT: usize = 50;
/// Every particle is removed after this long, even if still falling
pub const CONFETTI_LIFETIME_MS: u32 = 5000;
pub const MIN_FALL_SECS: f64 = 2.0;
pub const MAX_FALL_SECS: f64 = 5.0;
const FULL_TURN_DEG: f64 = 360.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiParticle {
    pub color: &'static str,
    /// Horizontal start, percent of viewport width
    pub left_percent: f64,
    pub fall_secs: f64,
    pub rotation_deg: f64,
}

impl ConfettiParticle {
    /// Draw a particle from `random`, a source of uniform values in [0, 1).
    pub fn sample(mut random: impl FnMut() -> f64) -> Self {
        let slot = (random() * CONFETTI_COLORS.len() as f64) as usize;
        Self {
            color: CONFETTI_COLORS[slot.min(CONFETTI_COLORS.len() - 1)],
            left_percent: random() * 100.0,
            fall_secs: MIN_FALL_SECS + random() * (MAX_FALL_SECS - MIN_FALL_SECS),
            rotation_deg: FULL_TURN_DEG,
        }
    }

    /// Inline style declarations for the particle node.
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", "fixed".into()),
            ("width", "10px".into()),
            ("height", "10px".into()),
            ("background-color", self.color.into()),
            ("left", format!("{}%", self.left_percent)),
            ("top", "-10px".into()),
            ("border-radius", "50%".into()),
            ("pointer-events", "none".into()),
            ("z-index", "9999".into()),
            ("--confetti-spin", format!("{}deg", self.rotation_deg)),
            ("animation", format!("confettiFall {}s linear forwards", self.fall_secs)),
        ]
    }

    fn render(&self, doc: &Document) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
        let style = el.style();
        for (property, value) in self.style_properties() {
            style.set_property(property, &value)?;
        }
        Ok(el)
    }
}

/// Drop [`CONFETTI_COUNT`] particles over the page.
pub fn create_confetti() {
    let Some(doc) = dom::document() else { return };
    let Some(body) = doc.body() else { return };

    for _ in 0..CONFETTI_COUNT {
        let particle = ConfettiParticle::sample(js_sys::Math::random);
        let placed = particle
            .render(&doc)
            .and_then(|el| body.append_child(&el).map(|_| el));
        match placed {
            Ok(el) => {
                Timeout::new(CONFETTI_LIFETIME_MS, move || el.remove()).forget();
            }
            Err(err) => log::debug!("confetti particle skipped: {err:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_sample_bounds() {
        let low = ConfettiParticle::sample(sequence(&[0.0]));
        assert_eq!(low.color, "#0084ff");
        assert_eq!(low.left_percent, 0.0);
        assert_eq!(low.fall_secs, MIN_FALL_SECS);

        let high = ConfettiParticle::sample(sequence(&[0.999_999]));
        assert_eq!(high.color, "#ef4444");
        assert!(high.left_percent < 100.0);
        assert!(high.fall_secs < MAX_FALL_SECS);
    }

    #[test]
    fn test_sample_picks_from_palette() {
        let p = ConfettiParticle::sample(sequence(&[0.45, 0.5, 0.5]));
        assert_eq!(p.color, "#22c55e");
        assert_eq!(p.left_percent, 50.0);
        assert_eq!(p.fall_secs, 3.5);
        assert_eq!(p.rotation_deg, 360.0);
    }

    #[test]
    fn test_slowest_fall_fits_removal_timer() {
        // Removal ignores fall time; slow frames can still cut a particle short
        let slow = ConfettiParticle::sample(sequence(&[0.2, 0.3, 0.99]));
        assert!(slow.fall_secs * 1000.0 <= f64::from(CONFETTI_LIFETIME_MS));
        assert!(slow.fall_secs > 4.9);
    }

    #[test]
    fn test_style_carries_animation() {
        let p = ConfettiParticle::sample(sequence(&[0.0, 0.25, 0.0]));
        let style = p.style_properties();
        let animation = style.iter().find(|(k, _)| *k == "animation").unwrap();
        assert_eq!(animation.1, "confettiFall 2s linear forwards");
        let left = style.iter().find(|(k, _)| *k == "left").unwrap();
        assert_eq!(left.1, "25%");
    }
}

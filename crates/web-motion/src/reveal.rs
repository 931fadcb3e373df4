//! Scroll Reveal
//!
//! Cards start faded and shifted down, then slide into place the first
//! time they enter the viewport. Once revealed a card is unobserved and
//! never hidden again.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, set_style};

pub const REVEAL_SELECTOR: &str = ".path-card, .step-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Revealed,
}

impl Visibility {
    /// State after an intersection report. `Revealed` is absorbing.
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            Visibility::Hidden if intersecting => Visibility::Revealed,
            other => other,
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            Visibility::Hidden => "0",
            Visibility::Revealed => "1",
        }
    }

    pub fn transform(self) -> &'static str {
        match self {
            Visibility::Hidden => "translateY(20px)",
            Visibility::Revealed => "translateY(0)",
        }
    }

    fn apply(self, card: &HtmlElement) {
        set_style(card, "opacity", self.opacity());
        set_style(card, "transform", self.transform());
    }
}

/// Hide every reveal card and watch for it to scroll into view.
pub fn observe_cards() -> Result<(), JsValue> {
    let cards: Vec<HtmlElement> = dom::query_all(REVEAL_SELECTOR);
    if cards.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if Visibility::Hidden.observe(entry.is_intersecting()) != Visibility::Revealed {
                    continue;
                }
                let target = entry.target();
                if let Some(card) = target.dyn_ref::<HtmlElement>() {
                    Visibility::Revealed.apply(card);
                }
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    on_intersect.forget();

    for card in &cards {
        Visibility::Hidden.apply(card);
        set_style(card, "transition", REVEAL_TRANSITION);
        observer.observe(card);
    }
    log::debug!("observing {} cards for reveal", cards.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_on_first_intersection() {
        assert_eq!(Visibility::Hidden.observe(false), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.observe(true), Visibility::Revealed);
    }

    #[test]
    fn test_revealed_card_never_hides() {
        let mut state = Visibility::Hidden.observe(true);
        for intersecting in [false, true, false, false] {
            state = state.observe(intersecting);
            assert_eq!(state, Visibility::Revealed);
        }
        assert_eq!(state.opacity(), "1");
        assert_eq!(state.transform(), "translateY(0)");
    }
}

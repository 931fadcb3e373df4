//! Loading Overlay
//!
//! Full-screen `#loading-overlay` shown while a path is being generated.
//! Every method is a no-op when the page has no overlay.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use web_motion::dom::{self, set_style};

pub const OVERLAY_ID: &str = "loading-overlay";
pub const GENERATED_TITLE: &str = "Path Generated Successfully!";
const CHECKMARK_HTML: &str = r#"<div class="checkmark"><i class="fas fa-check"></i></div>"#;

pub struct LoadingOverlay(Option<HtmlElement>);

impl LoadingOverlay {
    pub fn find() -> Self {
        let overlay = dom::document()
            .and_then(|doc| doc.get_element_by_id(OVERLAY_ID))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Self(overlay)
    }

    pub fn show(&self) {
        if let Some(overlay) = &self.0 {
            set_style(overlay, "display", "flex");
        }
    }

    pub fn hide(&self) {
        if let Some(overlay) = &self.0 {
            set_style(overlay, "display", "none");
        }
    }

    /// Swap the spinner for a success title and checkmark.
    pub fn show_success(&self) {
        let Some(overlay) = &self.0 else { return };
        if let Ok(Some(spinner)) = overlay.query_selector(".spinner") {
            if let Some(spinner) = spinner.dyn_ref::<HtmlElement>() {
                set_style(spinner, "display", "none");
            }
        }
        if let Ok(Some(title)) = overlay.query_selector("h3") {
            title.set_text_content(Some(GENERATED_TITLE));
        }
        if let Ok(Some(detail)) = overlay.query_selector("p") {
            detail.set_inner_html(CHECKMARK_HTML);
        }
    }
}

//! Action Handlers
//!
//! Enroll buttons and the generate-path form: button/overlay state,
//! the network call, and the feedback that follows.

pub mod enroll;
pub mod generate;
pub mod overlay;
pub mod state;

pub use enroll::{enhance_enroll_button, enroll_outcome};
pub use generate::{enhance_generate_form, generate_outcome};
pub use state::{ActionOutcome, ActionPhase, ButtonActionState, ButtonModel};

fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().reload() {
            log::error!("reload failed: {err:?}");
        }
    }
}

fn navigate_to(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(url) {
            log::error!("navigation to {url} failed: {err:?}");
        }
    }
}

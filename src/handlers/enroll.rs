//! Enroll Button
//!
//! `POST .../{pathId}/enroll` from any button carrying `data-path-id`.
//! Success celebrates and reloads; failure restores the button.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use web_motion::{create_confetti, sleep};

use super::state::{server_message, ActionOutcome, ButtonActionState};
use crate::api;
use crate::components::notify;
use crate::config::UiConfig;
use crate::error::ApiError;
use crate::models::{ApiReply, Severity};

pub const PATH_ID_ATTR: &str = "data-path-id";

pub const ENROLL_BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Enrolling..."#;
pub const ENROLL_DONE_LABEL: &str = r#"<i class="fas fa-check me-2"></i>Enrolled!"#;
pub const ENROLL_SUCCEEDED: &str = "Successfully enrolled in learning path!";
pub const ENROLL_FAILED: &str = "Failed to enroll. Please try again.";
pub const ENROLL_LOGIN_REQUIRED: &str = "Please login to enroll in learning paths";

/// Map an enroll reply to what the user should see.
pub fn enroll_outcome(reply: Result<ApiReply<serde_json::Value>, ApiError>) -> ActionOutcome<()> {
    match reply {
        Ok(reply) if reply.http_ok && reply.body.is_success() => ActionOutcome::Succeeded(()),
        Ok(reply) => ActionOutcome::failed(server_message(reply.body.message, ENROLL_FAILED)),
        Err(err) => {
            log::error!("Enroll error: {err}");
            ActionOutcome::failed(ENROLL_LOGIN_REQUIRED)
        }
    }
}

/// Bind the enroll action to `button`. Clicks on a button without a
/// path id, or while a request is in flight, are ignored.
pub fn enhance_enroll_button(button: HtmlElement, config: Rc<UiConfig>) {
    let target = button.clone();
    let state = Rc::new(RefCell::new(ButtonActionState::new(&button)));
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        let Some(path_id) = target.get_attribute(PATH_ID_ATTR).filter(|id| !id.is_empty()) else {
            return;
        };
        if !state.borrow_mut().enter_busy(ENROLL_BUSY_LABEL) {
            log::debug!("Enroll for path {path_id} already in flight");
            return;
        }
        spawn_local(finish_enroll(target.clone(), state.clone(), path_id, config.clone()));
    });
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

async fn finish_enroll(
    button: HtmlElement,
    state: Rc<RefCell<ButtonActionState>>,
    path_id: String,
    config: Rc<UiConfig>,
) {
    log::info!("Enrolling in learning path {path_id}");
    match enroll_outcome(api::enroll(&config, &path_id).await) {
        ActionOutcome::Succeeded(()) => {
            state.borrow_mut().succeed(ENROLL_DONE_LABEL);
            let _ = button.class_list().add_1("btn-success");
            notify(ENROLL_SUCCEEDED, Severity::Success, config.toast_duration_ms);
            create_confetti();
            sleep(config.redirect_delay_ms).await;
            super::reload_page();
        }
        ActionOutcome::Failed { message } => {
            state.borrow_mut().fail();
            notify(message, Severity::Error, config.toast_duration_ms);
        }
    }
}

//! Generate Path Form
//!
//! Validates `#generate-form`, posts the collected request, and either
//! redirects to the new path or restores the page with an error toast.

use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlElement, HtmlFormElement, HtmlInputElement};

use web_motion::{add_ripple_effect, create_confetti, dom, sleep};

use super::overlay::LoadingOverlay;
use super::state::{server_message, ActionOutcome};
use crate::api;
use crate::components::notify;
use crate::config::UiConfig;
use crate::error::ApiError;
use crate::models::{ApiReply, GenerateFormValues, GenerateRequest, GeneratedPath, Severity};
use crate::validator::validate_form;

pub const GENERATE_FORM_ID: &str = "generate-form";
pub const CHECKED_CATEGORIES: &str = r#"input[name="preferredCategoryIds"]:checked"#;

pub const FIELDS_REQUIRED: &str = "Please fill in all required fields";
pub const GENERATE_FAILED: &str = "Failed to generate learning path. Please try again.";
pub const GENERATE_LOGIN_REQUIRED: &str = "Please login to generate learning paths";

/// The request to send, or `None` when validation failed.
pub fn plan_submission(valid: bool, values: &GenerateFormValues) -> Option<GenerateRequest> {
    valid.then(|| GenerateRequest::from_form(values))
}

/// Map a generate reply to the new path's id or the message to show.
pub fn generate_outcome(reply: Result<ApiReply<GeneratedPath>, ApiError>) -> ActionOutcome<i64> {
    match reply {
        Ok(ApiReply { http_ok: true, body }) if body.is_success() => match body.data {
            Some(data) => ActionOutcome::Succeeded(data.recommended_path.id),
            None => ActionOutcome::failed(server_message(body.message, GENERATE_FAILED)),
        },
        Ok(reply) => ActionOutcome::failed(server_message(reply.body.message, GENERATE_FAILED)),
        Err(err) => {
            log::error!("Generation error: {err}");
            ActionOutcome::failed(GENERATE_LOGIN_REQUIRED)
        }
    }
}

fn read_form_values(form: &HtmlFormElement) -> GenerateFormValues {
    let data = FormData::new_with_form(form).ok();
    let field = |name: &str| data.as_ref().and_then(|d| d.get(name).as_string());
    GenerateFormValues {
        goal: field("goal").unwrap_or_default(),
        difficulty_level: field("difficultyLevel"),
        max_tutorials: field("maxTutorials"),
        estimated_hours: field("estimatedHours"),
        category_ids: dom::query_all::<HtmlInputElement>(CHECKED_CATEGORIES)
            .iter()
            .map(HtmlInputElement::value)
            .collect(),
    }
}

/// Bind the submit handler to `#generate-form`, if the page has one.
pub fn enhance_generate_form(config: Rc<UiConfig>) {
    let Some(form) = dom::document()
        .and_then(|doc| doc.get_element_by_id(GENERATE_FORM_ID))
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    if let Ok(Some(submit)) = form.query_selector(r#"button[type="submit"]"#) {
        if let Some(submit) = submit.dyn_ref::<HtmlElement>() {
            add_ripple_effect(submit);
        }
    }

    let target = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        ev.prevent_default();
        let valid = validate_form(&target);
        let Some(request) = plan_submission(valid, &read_form_values(&target)) else {
            notify(FIELDS_REQUIRED, Severity::Error, config.toast_duration_ms);
            return;
        };
        let overlay = LoadingOverlay::find();
        overlay.show();
        spawn_local(submit_generate(request, overlay, config.clone()));
    });
    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
}

async fn submit_generate(request: GenerateRequest, overlay: LoadingOverlay, config: Rc<UiConfig>) {
    log::info!("Generating learning path for goal {:?}", request.goal);
    match generate_outcome(api::generate(&config, &request).await) {
        ActionOutcome::Succeeded(path_id) => {
            overlay.show_success();
            create_confetti();
            sleep(config.redirect_delay_ms).await;
            super::navigate_to(&config.path_page_url(path_id));
        }
        ActionOutcome::Failed { message } => {
            overlay.hide();
            notify(message, Severity::Error, config.toast_duration_ms);
        }
    }
}

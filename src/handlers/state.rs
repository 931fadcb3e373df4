//! Button Action State
//!
//! `Idle -> Busy -> {Succeeded, Failed}`, with `Failed` recovering to
//! `Idle`. `Succeeded` is terminal: the control stays disabled until the
//! page navigates away.

use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement};

use web_motion::dom::set_style;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPhase {
    #[default]
    Idle,
    Busy,
    Succeeded,
    Failed,
}

impl ActionPhase {
    /// `Busy` when starting from `Idle`, otherwise `None`.
    pub fn start(self) -> Option<Self> {
        (self == ActionPhase::Idle).then_some(ActionPhase::Busy)
    }

    pub fn finish(self, succeeded: bool) -> Self {
        match self {
            ActionPhase::Busy if succeeded => ActionPhase::Succeeded,
            ActionPhase::Busy => ActionPhase::Failed,
            other => other,
        }
    }

    pub fn recover(self) -> Self {
        match self {
            ActionPhase::Failed => ActionPhase::Idle,
            other => other,
        }
    }
}

/// Result of a network-backed action, already mapped to what the user sees.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T> {
    Succeeded(T),
    Failed { message: String },
}

impl<T> ActionOutcome<T> {
    pub fn failed(message: impl Into<String>) -> Self {
        ActionOutcome::Failed {
            message: message.into(),
        }
    }
}

/// Server-provided message, or `fallback` when absent or blank.
pub fn server_message(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Label and enablement of a button, without the DOM.
///
/// The original label is captured on the `Idle -> Busy` edge only, so a
/// click that lands while busy can neither start a second request nor
/// overwrite it with the busy markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonModel {
    phase: ActionPhase,
    label: String,
    disabled: bool,
    original_label: Option<String>,
}

impl ButtonModel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn phase(&self) -> ActionPhase {
        self.phase
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enter `Busy`, remembering `current_label`. False when not idle.
    pub fn start(&mut self, current_label: &str, busy_label: &str) -> bool {
        let Some(next) = self.phase.start() else {
            return false;
        };
        self.phase = next;
        self.original_label = Some(current_label.to_string());
        self.label = busy_label.to_string();
        self.disabled = true;
        true
    }

    pub fn succeed(&mut self, done_label: &str) {
        if self.phase != ActionPhase::Busy {
            return;
        }
        self.phase = self.phase.finish(true);
        self.label = done_label.to_string();
    }

    pub fn fail(&mut self) {
        if self.phase != ActionPhase::Busy {
            return;
        }
        self.phase = self.phase.finish(false).recover();
        if let Some(original) = self.original_label.take() {
            self.label = original;
        }
        self.disabled = false;
    }
}

/// A [`ButtonModel`] bound to its element. Lives as long as the button's
/// click listener, shared with the request task it spawns.
pub struct ButtonActionState {
    button: HtmlElement,
    model: ButtonModel,
}

impl ButtonActionState {
    pub fn new(button: &HtmlElement) -> Self {
        Self {
            button: button.clone(),
            model: ButtonModel::new(button.inner_html()),
        }
    }

    /// Disable the button and show `busy_label`. False when not idle.
    pub fn enter_busy(&mut self, busy_label: &str) -> bool {
        if !self.model.start(&self.button.inner_html(), busy_label) {
            return false;
        }
        self.render();
        true
    }

    /// Show `done_label`; the button stays disabled.
    pub fn succeed(&mut self, done_label: &str) {
        self.model.succeed(done_label);
        self.render();
    }

    /// Restore the captured label and re-enable the button.
    pub fn fail(&mut self) {
        self.model.fail();
        self.render();
    }

    fn render(&self) {
        self.button.set_inner_html(self.model.label());
        set_disabled(&self.button, self.model.is_disabled());
        set_style(&self.button, "opacity", if self.model.is_disabled() { "0.7" } else { "1" });
    }
}

fn set_disabled(el: &HtmlElement, disabled: bool) {
    if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        let _ = el.set_attribute("disabled", "");
    } else {
        let _ = el.remove_attribute("disabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let busy = ActionPhase::Idle.start().unwrap();
        assert_eq!(busy, ActionPhase::Busy);
        let done = busy.finish(true);
        assert_eq!(done, ActionPhase::Succeeded);
        // Terminal
        assert_eq!(done.recover(), ActionPhase::Succeeded);
        assert_eq!(done.start(), None);
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let failed = ActionPhase::Busy.finish(false);
        assert_eq!(failed, ActionPhase::Failed);
        let idle = failed.recover();
        assert_eq!(idle, ActionPhase::Idle);
        assert_eq!(idle.start(), Some(ActionPhase::Busy));
    }

    #[test]
    fn test_busy_ignores_second_start() {
        assert_eq!(ActionPhase::Busy.start(), None);
        assert_eq!(ActionPhase::Idle.finish(true), ActionPhase::Idle);
    }

    const LABEL: &str = "Enroll Now";

    #[test]
    fn test_button_success_stays_disabled() {
        let mut button = ButtonModel::new(LABEL);
        assert!(button.start(LABEL, "Enrolling..."));
        assert!(button.is_disabled());
        assert_eq!(button.label(), "Enrolling...");

        button.succeed("Enrolled!");
        assert_eq!(button.phase(), ActionPhase::Succeeded);
        assert_eq!(button.label(), "Enrolled!");
        assert!(button.is_disabled());
        assert!(!button.start("Enrolled!", "Enrolling..."));
    }

    #[test]
    fn test_button_failure_restores_label() {
        let mut button = ButtonModel::new(LABEL);
        assert!(button.start(LABEL, "Enrolling..."));
        button.fail();
        assert_eq!(button.phase(), ActionPhase::Idle);
        assert_eq!(button.label(), LABEL);
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_click_while_busy_is_refused() {
        let mut button = ButtonModel::new(LABEL);
        assert!(button.start(LABEL, "Enrolling..."));
        // Second click reads the busy markup as the current label
        assert!(!button.start("Enrolling...", "Enrolling..."));
        assert_eq!(button.phase(), ActionPhase::Busy);

        button.fail();
        assert_eq!(button.label(), LABEL);
        // Usable again after recovering
        assert!(button.start(LABEL, "Enrolling..."));
    }

    #[test]
    fn test_finish_without_start_is_ignored() {
        let mut button = ButtonModel::new(LABEL);
        button.succeed("Enrolled!");
        button.fail();
        assert_eq!(button, ButtonModel::new(LABEL));
    }

    #[test]
    fn test_server_message() {
        assert_eq!(server_message(Some("Already enrolled".into()), "fallback"), "Already enrolled");
        assert_eq!(server_message(Some("  ".into()), "fallback"), "fallback");
        assert_eq!(server_message(None, "fallback"), "fallback");
    }
}

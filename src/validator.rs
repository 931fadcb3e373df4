//! Form Validation
//!
//! Marks required fields `is-valid` / `is-invalid` and shakes the empty ones.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use web_motion::dom::query_all_in;
use web_motion::shake;

pub const REQUIRED_FIELDS: &str = "input[required], select[required], textarea[required]";

pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff every value is non-blank.
pub fn all_filled<'a>(values: impl IntoIterator<Item = &'a str>) -> bool {
    values.into_iter().all(is_filled)
}

fn field_value(field: &HtmlElement) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Validate every required field in `form`. Returns true iff none is blank.
pub fn validate_form(form: &Element) -> bool {
    let fields: Vec<HtmlElement> = query_all_in(form, REQUIRED_FIELDS);
    let values: Vec<String> = fields.iter().map(field_value).collect();

    for (field, value) in fields.iter().zip(&values) {
        let classes = field.class_list();
        if is_filled(value) {
            let _ = classes.remove_1("is-invalid");
            let _ = classes.add_1("is-valid");
        } else {
            let _ = classes.add_1("is-invalid");
            shake(field);
        }
    }

    let valid = all_filled(values.iter().map(String::as_str));
    if !valid {
        log::debug!("form has blank required fields");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(is_filled("Build a REST API"));
        assert!(is_filled("  x "));
        assert!(!is_filled(""));
        assert!(!is_filled(" \t\n"));
    }

    #[test]
    fn test_all_filled() {
        assert!(all_filled(["goal", "BEGINNER"]));
        assert!(!all_filled(["goal", "   "]));
        assert!(!all_filled([""]));
        // A form without required fields is valid
        assert!(all_filled(std::iter::empty()));
    }
}

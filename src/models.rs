//! Frontend Models
//!
//! Request/response shapes for the learning-path endpoints, plus the
//! transient toast model.

use serde::{Deserialize, Serialize};
use web_motion::parse_int_prefix;

use crate::config::DEFAULT_TOAST_DURATION_MS;

// ========================
// Toasts
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Font Awesome icon shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "fa-info-circle",
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
        }
    }

    /// Unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn lasting(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

// ========================
// Generate request
// ========================

pub const DEFAULT_MAX_TUTORIALS: i64 = 10;

/// Raw generate-form values as read from the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateFormValues {
    pub goal: String,
    pub difficulty_level: Option<String>,
    pub max_tutorials: Option<String>,
    pub estimated_hours: Option<String>,
    /// Values of the checked category checkboxes
    pub category_ids: Vec<String>,
}

/// Body of `POST /generate`. Absent optionals serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub goal: String,
    /// Select value as the page offers it, e.g. `BEGINNER`
    pub difficulty_level: Option<String>,
    pub max_tutorials: i64,
    pub preferred_category_ids: Option<Vec<i64>>,
    pub estimated_hours: Option<i64>,
}

impl GenerateRequest {
    pub fn from_form(values: &GenerateFormValues) -> Self {
        let difficulty_level = values
            .difficulty_level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .map(str::to_string);

        let max_tutorials = values
            .max_tutorials
            .as_deref()
            .and_then(parse_int_prefix)
            .filter(|n| *n != 0)
            .unwrap_or(DEFAULT_MAX_TUTORIALS);

        let estimated_hours = values
            .estimated_hours
            .as_deref()
            .filter(|hours| !hours.is_empty())
            .and_then(parse_int_prefix);

        let ids: Vec<i64> = values
            .category_ids
            .iter()
            .filter_map(|id| parse_int_prefix(id))
            .collect();

        Self {
            goal: values.goal.clone(),
            difficulty_level,
            max_tutorials,
            preferred_category_ids: (!ids.is_empty()).then_some(ids),
            estimated_hours,
        }
    }
}

// ========================
// Responses
// ========================

/// Backend response wrapper
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: Option<String>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// A decoded response together with whether the HTTP status was 2xx.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply<T> {
    pub http_ok: bool,
    pub body: ApiEnvelope<T>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPath {
    pub recommended_path: PathRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathRef {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(goal: &str) -> GenerateFormValues {
        GenerateFormValues {
            goal: goal.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let request = GenerateRequest::from_form(&form("Build a REST API"));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "goal": "Build a REST API",
                "difficultyLevel": null,
                "maxTutorials": 10,
                "preferredCategoryIds": null,
                "estimatedHours": null,
            })
        );
    }

    #[test]
    fn test_checked_categories_become_ids() {
        let values = GenerateFormValues {
            category_ids: vec!["3".into(), "11".into()],
            ..form("Master Java Collections")
        };
        let body = serde_json::to_value(GenerateRequest::from_form(&values)).unwrap();
        assert_eq!(body["preferredCategoryIds"], json!([3, 11]));
    }

    #[test]
    fn test_full_form() {
        let values = GenerateFormValues {
            goal: "Learn Rust".into(),
            difficulty_level: Some("INTERMEDIATE".into()),
            max_tutorials: Some("15".into()),
            estimated_hours: Some("40".into()),
            category_ids: vec!["2".into()],
        };
        let request = GenerateRequest::from_form(&values);
        assert_eq!(request.difficulty_level.as_deref(), Some("INTERMEDIATE"));
        assert_eq!(request.max_tutorials, 15);
        assert_eq!(request.estimated_hours, Some(40));
        assert_eq!(request.preferred_category_ids, Some(vec![2]));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["difficultyLevel"], "INTERMEDIATE");
    }

    #[test]
    fn test_max_tutorials_fallback() {
        for raw in ["", "0", "lots"] {
            let values = GenerateFormValues {
                max_tutorials: Some(raw.into()),
                ..form("x")
            };
            assert_eq!(GenerateRequest::from_form(&values).max_tutorials, DEFAULT_MAX_TUTORIALS);
        }
    }

    #[test]
    fn test_blank_optionals_are_none() {
        let values = GenerateFormValues {
            difficulty_level: Some("".into()),
            estimated_hours: Some("".into()),
            ..form("x")
        };
        let request = GenerateRequest::from_form(&values);
        assert_eq!(request.difficulty_level, None);
        assert_eq!(request.estimated_hours, None);
    }

    #[test]
    fn test_difficulty_is_sent_as_offered() {
        let values = GenerateFormValues {
            difficulty_level: Some(" Expert ".into()),
            ..form("x")
        };
        let body = serde_json::to_value(GenerateRequest::from_form(&values)).unwrap();
        assert_eq!(body["difficultyLevel"], "Expert");

        let values = GenerateFormValues {
            difficulty_level: Some("   ".into()),
            ..form("x")
        };
        assert_eq!(GenerateRequest::from_form(&values).difficulty_level, None);
    }

    #[test]
    fn test_envelope_decoding() {
        let ok: ApiEnvelope<GeneratedPath> = serde_json::from_value(json!({
            "status": "success",
            "data": { "recommendedPath": { "id": 7, "title": "ignored" } }
        }))
        .unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.data.unwrap().recommended_path.id, 7);

        let failed: ApiEnvelope<GeneratedPath> =
            serde_json::from_value(json!({ "status": "error", "message": "Goal too vague" })).unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.message.as_deref(), Some("Goal too vague"));
        assert!(failed.data.is_none());
    }

    #[test]
    fn test_severity() {
        assert_eq!(Severity::from_name("Success"), Severity::Success);
        assert_eq!(Severity::from_name("warning"), Severity::Info);
        assert_eq!(Severity::Error.icon(), "fa-exclamation-circle");
        assert_eq!(Severity::default().as_class(), "info");
    }
}

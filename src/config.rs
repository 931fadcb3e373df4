//! Page Configuration
//!
//! Endpoint bases, timings and log level. Defaults match the backend's
//! routes; the page template can override them with `data-*` attributes
//! on `<body>`:
//!
//! ```html
//! <body data-api-base="/api/v1/learning-paths"
//!       data-path-base="/tutorials/learning-paths"
//!       data-log-level="debug">
//! ```

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const DEFAULT_API_BASE: &str = "/api/v1/learning-paths";
pub const DEFAULT_PATH_PAGE_BASE: &str = "/tutorials/learning-paths";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
/// Pause between a successful action and the reload/redirect
pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 1500;
/// Delay before page-load progress bars start filling
pub const DEFAULT_PROGRESS_STAGGER_MS: u32 = 300;

/// Characters escaped when a value is used as one URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub api_base: String,
    pub path_page_base: String,
    pub log_level: LevelFilter,
    pub toast_duration_ms: u32,
    pub redirect_delay_ms: u32,
    pub progress_stagger_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            path_page_base: DEFAULT_PATH_PAGE_BASE.to_string(),
            log_level: LevelFilter::Info,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            progress_stagger_ms: DEFAULT_PROGRESS_STAGGER_MS,
        }
    }
}

impl UiConfig {
    /// Defaults, overridden by `<body>` data attributes when present.
    pub fn from_document() -> Self {
        let body = web_motion::dom::document().and_then(|doc| doc.body());
        let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
        Self::default().with_overrides(
            attr("data-api-base"),
            attr("data-path-base"),
            attr("data-log-level"),
        )
    }

    /// Apply optional overrides. Blank values and unknown log levels are ignored.
    pub fn with_overrides(
        mut self,
        api_base: Option<String>,
        path_page_base: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(base) = api_base.as_deref().and_then(clean_base) {
            self.api_base = base;
        }
        if let Some(base) = path_page_base.as_deref().and_then(clean_base) {
            self.path_page_base = base;
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        self
    }

    pub fn enroll_url(&self, path_id: &str) -> String {
        format!(
            "{}/{}/enroll",
            self.api_base,
            utf8_percent_encode(path_id, PATH_SEGMENT)
        )
    }

    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.api_base)
    }

    /// Page showing a single learning path
    pub fn path_page_url(&self, path_id: i64) -> String {
        format!("{}/{}", self.path_page_base, path_id)
    }
}

fn clean_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = UiConfig::default();
        assert_eq!(config.enroll_url("17"), "/api/v1/learning-paths/17/enroll");
        assert_eq!(config.generate_url(), "/api/v1/learning-paths/generate");
        assert_eq!(config.path_page_url(42), "/tutorials/learning-paths/42");
    }

    #[test]
    fn test_path_id_is_one_segment() {
        let config = UiConfig::default();
        assert_eq!(
            config.enroll_url("a/b c?"),
            "/api/v1/learning-paths/a%2Fb%20c%3F/enroll"
        );
    }

    #[test]
    fn test_overrides() {
        let config = UiConfig::default().with_overrides(
            Some("https://api.example.com/v2/paths/".into()),
            Some("  ".into()),
            Some("DEBUG".into()),
        );
        assert_eq!(config.api_base, "https://api.example.com/v2/paths");
        assert_eq!(config.path_page_base, DEFAULT_PATH_PAGE_BASE);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.generate_url(), "https://api.example.com/v2/paths/generate");
    }

    #[test]
    fn test_unknown_log_level_keeps_default() {
        let config = UiConfig::default().with_overrides(None, None, Some("chatty".into()));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}

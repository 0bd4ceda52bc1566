//! Endpoint configuration for the video Q&A backend.
//!
//! In the browser the backend is served from the same origin as the page, so
//! the base URL comes from `window.location`. Native builds (tests, tooling)
//! fall back to the Flask development server address.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client configuration for both backend endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaClientConfig {
    /// Origin the endpoint paths are joined to
    pub base_url: String,

    /// Path of the video processing endpoint
    pub process_video_path: String,

    /// Path of the question answering endpoint
    pub ask_question_path: String,

    /// Form field carrying the video URL
    pub video_url_field: String,

    /// Form field carrying the question text
    pub question_field: String,
}

impl Default for QaClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            process_video_path: "/process_video".to_string(),
            ask_question_path: "/ask_question".to_string(),
            video_url_field: "video_url".to_string(),
            question_field: "question".to_string(),
        }
    }
}

impl QaClientConfig {
    /// Configuration for the page the app is running in
    pub fn for_browser() -> Self {
        let mut config = Self::default();
        if let Some(origin) = page_origin() {
            config.base_url = origin;
        }
        config
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.base_url.trim().is_empty() {
            errors.push("Base URL must not be empty".to_string());
        }

        for (name, path) in [
            ("process_video_path", &self.process_video_path),
            ("ask_question_path", &self.ask_question_path),
        ] {
            if !path.starts_with('/') {
                errors.push(format!("{} must start with '/': {}", name, path));
            }
        }

        if self.video_url_field.is_empty() || self.question_field.is_empty() {
            errors.push("Form field names must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

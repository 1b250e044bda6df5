//! Request and response bodies.

use chat2site_core::models::{ChatMessage, Language, PreviewData, ProjectStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: String,
}

/// Collection wrapper for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetingRequest {
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub response: String,
    pub preview_data: PreviewData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub project_id: Uuid,
    pub response: String,
    pub preview_data: PreviewData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    pub preview_data: Option<PreviewData>,
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub chat_history: Option<Vec<ChatMessage>>,
    pub preview_data: Option<PreviewData>,
    pub status: Option<ProjectStatus>,
    /// `null` clears the stored content; leaving the field out keeps it.
    #[serde(default, deserialize_with = "nullable")]
    pub html_content: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub css_content: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub js_content: Option<Option<String>>,
}

/// Present fields deserialize to `Some`, so an explicit `null` is
/// `Some(None)` while a missing field falls back to `None`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateShareRequest {
    pub is_public: Option<bool>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_content_is_distinct_from_missing_content() {
        let body: UpdateProjectRequest =
            serde_json::from_str(r#"{ "html_content": null, "css_content": "a {}" }"#).unwrap();
        assert_eq!(body.html_content, Some(None));
        assert_eq!(body.css_content, Some(Some("a {}".to_string())));
        assert_eq!(body.js_content, None);
    }
}

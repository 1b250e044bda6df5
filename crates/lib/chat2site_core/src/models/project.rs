//! Project, chat history and share models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ParseTagError;
use super::preview::{Category, PreviewData};
use crate::uuid::uuidv7;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of a project's chat history. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuidv7().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Publication state of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ProjectStatus {
    /// Database text representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProjectStatus::Draft),
            "published" => Ok(ProjectStatus::Published),
            "archived" => Ok(ProjectStatus::Archived),
            other => Err(ParseTagError::new("status", other)),
        }
    }
}

/// A persisted project: one chat history and its current page blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub chat_history: Vec<ChatMessage>,
    pub preview_data: PreviewData,
    /// Always equal to `preview_data.template`.
    pub template_type: Category,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub chat_history: Vec<ChatMessage>,
    pub preview_data: PreviewData,
    pub status: ProjectStatus,
}

/// Partial project update. `None` leaves the stored value untouched;
/// `chat_history` and `preview_data` are replaced wholesale when present.
/// The custom content fields take `Some(None)` to clear them.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub chat_history: Option<Vec<ChatMessage>>,
    pub preview_data: Option<PreviewData>,
    pub status: Option<ProjectStatus>,
    pub html_content: Option<Option<String>>,
    pub css_content: Option<Option<String>>,
    pub js_content: Option<Option<String>>,
}

/// A share link granting public read access to a project page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectShare {
    pub id: Uuid,
    pub project_id: Uuid,
    pub share_token: String,
    pub is_public: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ProjectShare {
    /// Whether the share can currently be resolved by anonymous readers.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_public && self.expires_at.is_none_or(|at| at > now)
    }
}

/// Options for a new share link.
#[derive(Debug, Clone)]
pub struct NewShare {
    pub is_public: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Default for NewShare {
    fn default() -> Self {
        Self {
            is_public: true,
            expires_at: None,
        }
    }
}

/// Public snapshot of a shared project. Owner and chat history are withheld.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedProject {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub preview_data: PreviewData,
    pub template_type: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_content: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Project> for SharedProject {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            preview_data: project.preview_data.clone(),
            template_type: project.template_type,
            html_content: project.html_content.clone(),
            css_content: project.css_content.clone(),
            js_content: project.js_content.clone(),
            updated_at: project.updated_at,
        }
    }
}

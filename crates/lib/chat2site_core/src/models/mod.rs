//! Domain models.
//!
//! These are the shapes persisted by the store and returned by the API.
//! Field names follow the stored JSON record format (`chat_history`,
//! `preview_data`, `primaryColor`).

pub mod auth;
pub mod preview;
pub mod project;

use thiserror::Error;

pub use preview::{Blueprint, Category, Language, PreviewData};
pub use project::{
    ChatMessage, NewProject, NewShare, Project, ProjectShare, ProjectStatus, ProjectUpdate, Role,
    SharedProject,
};

/// Error returned when a text tag does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported {kind}: '{value}'")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseTagError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

//! Project payload validation.

use chat2site_core::matcher::Matcher;
use chat2site_core::models::{Language, NewProject, NewShare, ProjectUpdate};
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{CreateProjectRequest, CreateShareRequest, UpdateProjectRequest};

/// Reject missing or whitespace-only text.
pub fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Validate a create request. Projects created without a blueprint start
/// from the general one.
pub fn new_project(matcher: &Matcher, body: CreateProjectRequest) -> AppResult<NewProject> {
    require_text("title", &body.title)?;
    let preview_data = body
        .preview_data
        .unwrap_or_else(|| matcher.default_preview(Language::default()));
    Ok(NewProject {
        title: body.title,
        description: body.description,
        chat_history: body.chat_history,
        preview_data,
        status: body.status.unwrap_or_default(),
    })
}

/// Validate a partial update. Omitted fields stay untouched.
pub fn project_update(body: UpdateProjectRequest) -> AppResult<ProjectUpdate> {
    if let Some(title) = &body.title {
        require_text("title", title)?;
    }
    Ok(ProjectUpdate {
        title: body.title,
        description: body.description,
        chat_history: body.chat_history,
        preview_data: body.preview_data,
        status: body.status,
        html_content: body.html_content,
        css_content: body.css_content,
        js_content: body.js_content,
    })
}

/// Validate share options; an expiry must lie in the future.
pub fn new_share(body: CreateShareRequest) -> AppResult<NewShare> {
    if body.expires_at.is_some_and(|at| at <= Utc::now()) {
        return Err(AppError::Validation("expires_at must be in the future".into()));
    }
    Ok(NewShare {
        is_public: body.is_public.unwrap_or(true),
        expires_at: body.expires_at,
    })
}

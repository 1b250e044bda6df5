//! Rendered landing-page handlers.

use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::header::CONTENT_DISPOSITION;
use axum::response::{Html, IntoResponse, Response};
use chat2site_core::export::{export_filename, render_landing_page};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use uuid::Uuid;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::LanguageQuery;

/// RFC 5987 `attr-char` minus alphanumerics.
const FILENAME_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// `GET /projects/{id}/preview`: rendered page, inline.
pub async fn preview_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> AppResult<Html<String>> {
    let project = state.store.get_project(&user.id, &id).await?;
    Ok(Html(render_landing_page(
        &project,
        query.language.unwrap_or_default(),
    )?))
}

/// `GET /projects/{id}/export`: rendered page as a download named after the
/// project title.
pub async fn export_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> AppResult<Response> {
    let project = state.store.get_project(&user.id, &id).await?;
    let html = render_landing_page(&project, query.language.unwrap_or_default())?;
    let disposition = content_disposition(&export_filename(&project.title))?;
    Ok(([(CONTENT_DISPOSITION, disposition)], Html(html)).into_response())
}

/// `attachment` disposition carrying an ASCII fallback name and the exact
/// UTF-8 name.
pub fn content_disposition(filename: &str) -> AppResult<HeaderValue> {
    let fallback = if filename.is_ascii() {
        filename
    } else {
        "landing-page.html"
    };
    let value = format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        utf8_percent_encode(filename, FILENAME_ESCAPE)
    );
    HeaderValue::from_str(&value).map_err(|e| AppError::Internal(e.to_string()))
}

//! Share link handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use chat2site_core::export::render_shared_project;
use chat2site_core::models::{ProjectShare, SharedProject};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreateShareRequest, LanguageQuery, ListResponse};
use crate::services::projects;

/// `POST /projects/{id}/shares`: create a share link.
pub async fn create_share_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(project_id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<CreateShareRequest>,
) -> AppResult<(StatusCode, Json<ProjectShare>)> {
    let share = projects::new_share(body)?;
    let share = state
        .store
        .create_share(&user.id, &project_id, share)
        .await?;
    Ok((StatusCode::CREATED, Json(share)))
}

/// `GET /projects/{id}/shares`
pub async fn list_shares_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(project_id): ApiPath<Uuid>,
) -> AppResult<Json<ListResponse<ProjectShare>>> {
    let items = state.store.list_shares(&user.id, &project_id).await?;
    Ok(Json(ListResponse { items }))
}

/// `DELETE /shares/{id}`
pub async fn delete_share_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(share_id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    state.store.delete_share(&user.id, &share_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /share/{token}`: public project snapshot.
pub async fn shared_project_handler(
    State(state): State<AppState>,
    ApiPath(token): ApiPath<String>,
) -> AppResult<Json<SharedProject>> {
    Ok(Json(state.store.resolve_share(&token).await?))
}

/// `GET /share/{token}/html`: public rendered page.
pub async fn shared_page_handler(
    State(state): State<AppState>,
    ApiPath(token): ApiPath<String>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> AppResult<Html<String>> {
    let shared = state.store.resolve_share(&token).await?;
    Ok(Html(render_shared_project(
        &shared,
        query.language.unwrap_or_default(),
    )?))
}

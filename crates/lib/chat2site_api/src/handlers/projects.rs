//! Project CRUD request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chat2site_core::models::Project;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreateProjectRequest, ListResponse, UpdateProjectRequest};
use crate::services::projects;

/// `POST /projects`: create a project.
pub async fn create_project_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = projects::new_project(&state.matcher, body)?;
    let project = state.store.create_project(&user.id, project).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /projects`: the caller's projects, most recently updated first.
pub async fn list_projects_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<ListResponse<Project>>> {
    let items = state.store.list_projects(&user.id).await?;
    Ok(Json(ListResponse { items }))
}

/// `GET /projects/{id}`
pub async fn get_project_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Project>> {
    Ok(Json(state.store.get_project(&user.id, &id).await?))
}

/// `PATCH /projects/{id}`: partial update.
pub async fn update_project_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<UpdateProjectRequest>,
) -> AppResult<Json<Project>> {
    let update = projects::project_update(body)?;
    Ok(Json(state.store.update_project(&user.id, &id, update).await?))
}

/// `DELETE /projects/{id}`: removes the project and its shares.
pub async fn delete_project_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    state.store.delete_project(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

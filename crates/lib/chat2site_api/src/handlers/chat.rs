//! Chat request handlers.

use axum::Json;
use axum::extract::State;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{ChatRequest, ChatResponse, GreetingRequest, GreetingResponse};
use crate::services::chat;

/// `POST /chat/greeting`: opening assistant message for a new conversation.
/// The body is optional; without one the greeting is in English.
pub async fn greeting_handler(
    State(state): State<AppState>,
    body: Option<ApiJson<GreetingRequest>>,
) -> Json<GreetingResponse> {
    let language = body.and_then(|ApiJson(body)| body.language);
    Json(chat::greeting(&state, language.unwrap_or_default()))
}

/// `POST /chat`: first message; creates the project.
pub async fn start_chat_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let language = body.language.unwrap_or_default();
    let response = chat::start_conversation(&state, &user.id, &body.message, language).await?;
    Ok(Json(response))
}

/// `POST /projects/{id}/chat`: next message in an existing project.
pub async fn project_chat_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ApiPath(project_id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let language = body.language.unwrap_or_default();
    let response =
        chat::continue_conversation(&state, &user.id, &project_id, &body.message, language)
            .await?;
    Ok(Json(response))
}

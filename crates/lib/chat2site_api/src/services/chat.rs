//! Chat turn orchestration: classify, reply, synthesize, persist.

use chat2site_core::chat::ChatTurn;
use chat2site_core::models::Language;
use tracing::debug;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ChatResponse, GreetingResponse};
use crate::services::projects::require_text;

/// Opening assistant message and the blueprint of a blank project.
pub fn greeting(state: &AppState, language: Language) -> GreetingResponse {
    GreetingResponse {
        response: state.matcher.greeting(language).to_string(),
        preview_data: state.matcher.default_preview(language),
    }
}

/// First message of a conversation: creates a draft project holding the turn.
pub async fn start_conversation(
    state: &AppState,
    user_id: &Uuid,
    message: &str,
    language: Language,
) -> AppResult<ChatResponse> {
    require_text("message", message)?;
    let turn = ChatTurn::run(&state.matcher, &[], message, language);
    let response = turn.response().to_string();
    let project = state
        .store
        .create_project(user_id, turn.into_new_project(language))
        .await?;
    debug!(project_id = %project.id, template = %project.template_type, "conversation started");
    Ok(ChatResponse {
        project_id: project.id,
        response,
        preview_data: project.preview_data,
    })
}

/// Follow-up message: appends the turn to the project's history and replaces
/// its blueprint. Concurrent turns on one project are last-write-wins.
pub async fn continue_conversation(
    state: &AppState,
    user_id: &Uuid,
    project_id: &Uuid,
    message: &str,
    language: Language,
) -> AppResult<ChatResponse> {
    require_text("message", message)?;
    let project = state.store.get_project(user_id, project_id).await?;
    let turn = ChatTurn::run(&state.matcher, &project.chat_history, message, language);
    let response = turn.response().to_string();
    let project = state
        .store
        .update_project(user_id, project_id, turn.into_update(&project.chat_history))
        .await?;
    debug!(project_id = %project.id, template = %project.template_type, "chat turn stored");
    Ok(ChatResponse {
        project_id: project.id,
        response,
        preview_data: project.preview_data,
    })
}

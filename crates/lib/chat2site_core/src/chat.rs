//! Chat turn assembly.
//!
//! One user message yields a reply, a blueprint and the two history entries
//! that record the exchange. Persisting them is the caller's job.

use crate::matcher::Matcher;
use crate::models::{ChatMessage, Language, NewProject, PreviewData, ProjectStatus, ProjectUpdate};

/// Result of processing one user message.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub user: ChatMessage,
    pub assistant: ChatMessage,
    pub preview_data: PreviewData,
}

impl ChatTurn {
    /// Classify `message` once and derive the reply and blueprint from it.
    pub fn run(
        matcher: &Matcher,
        history: &[ChatMessage],
        message: &str,
        language: Language,
    ) -> Self {
        let reply = matcher.turn_reply(history, message, language);
        let preview_data = matcher.synthesize_preview(message, language);
        Self {
            user: ChatMessage::user(message),
            assistant: ChatMessage::assistant(reply),
            preview_data,
        }
    }

    /// The assistant's reply text.
    pub fn response(&self) -> &str {
        &self.assistant.content
    }

    /// `history` followed by this turn's user and assistant messages.
    pub fn extend_history(&self, history: &[ChatMessage]) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.extend_from_slice(history);
        messages.push(self.user.clone());
        messages.push(self.assistant.clone());
        messages
    }

    /// Update that appends this turn and replaces the blueprint.
    pub fn into_update(self, history: &[ChatMessage]) -> ProjectUpdate {
        ProjectUpdate {
            chat_history: Some(self.extend_history(history)),
            preview_data: Some(self.preview_data),
            ..ProjectUpdate::default()
        }
    }

    /// Draft project created by the first turn of a new conversation.
    pub fn into_new_project(self, language: Language) -> NewProject {
        NewProject {
            title: self.preview_data.title.clone(),
            description: new_project_description(language).to_string(),
            chat_history: self.extend_history(&[]),
            preview_data: self.preview_data,
            status: ProjectStatus::Draft,
        }
    }
}

/// Placeholder description for projects started from the chat.
pub fn new_project_description(language: Language) -> &'static str {
    match language {
        Language::Ar => "مشروع جديد",
        Language::En => "New project",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Role};

    #[test]
    fn turn_records_user_then_assistant() {
        let matcher = Matcher::builtin();
        let turn = ChatTurn::run(&matcher, &[], "an app for runners", Language::En);
        assert_eq!(turn.user.role, Role::User);
        assert_eq!(turn.user.content, "an app for runners");
        assert_eq!(turn.assistant.role, Role::Assistant);
        assert_eq!(turn.preview_data.template, Category::Tech);
        assert_eq!(turn.response(), turn.assistant.content);
    }

    #[test]
    fn update_appends_two_messages_and_replaces_preview() {
        let matcher = Matcher::builtin();
        let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
        let turn = ChatTurn::run(&matcher, &history, "a restaurant", Language::En);
        let update = turn.into_update(&history);

        let messages = update.chat_history.expect("history");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[..2], history[..]);
        assert_eq!(messages[2].content, "a restaurant");
        assert_eq!(messages[3].role, Role::Assistant);
        assert_eq!(
            update.preview_data.map(|p| p.template),
            Some(Category::Restaurant)
        );
        assert!(update.title.is_none());
        assert!(update.status.is_none());
    }

    #[test]
    fn first_turn_builds_draft_project() {
        let matcher = Matcher::builtin();
        let turn = ChatTurn::run(&matcher, &[], "متجر ملابس", Language::Ar);
        let project = turn.into_new_project(Language::Ar);
        assert_eq!(project.title, "متجر العصر");
        assert_eq!(project.description, "مشروع جديد");
        assert_eq!(project.status, ProjectStatus::Draft);
        assert_eq!(project.chat_history.len(), 2);
        assert_eq!(project.preview_data.template, Category::Ecommerce);
    }
}

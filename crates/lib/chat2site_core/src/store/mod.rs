//! Project persistence.
//!
//! [`ProjectStore`] is the seam between the API and storage. Every project
//! operation is scoped to the owning user: a project that exists but belongs
//! to someone else is reported as [`StoreError::NotFound`].

mod memory;
mod postgres;

use async_trait::async_trait;
use rand::Rng;
use rand::distr::Alphanumeric;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryProjectStore;
pub use postgres::PgProjectStore;

use crate::models::{NewProject, NewShare, Project, ProjectShare, ProjectUpdate, SharedProject};

/// Length of generated share tokens.
pub const SHARE_TOKEN_LEN: usize = 32;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be mapped back into a domain value.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn project(id: &Uuid) -> Self {
        StoreError::NotFound(format!("project {id}"))
    }

    pub fn share(id: impl std::fmt::Display) -> Self {
        StoreError::NotFound(format!("share {id}"))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for projects and their share links.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Check that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    async fn create_project(&self, user_id: &Uuid, project: NewProject) -> StoreResult<Project>;

    /// The user's projects, most recently updated first.
    async fn list_projects(&self, user_id: &Uuid) -> StoreResult<Vec<Project>>;

    async fn get_project(&self, user_id: &Uuid, project_id: &Uuid) -> StoreResult<Project>;

    /// Apply `update` and bump `updated_at`. When the update carries
    /// `preview_data`, `template_type` follows its template.
    async fn update_project(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
        update: ProjectUpdate,
    ) -> StoreResult<Project>;

    /// Delete a project together with its shares.
    async fn delete_project(&self, user_id: &Uuid, project_id: &Uuid) -> StoreResult<()>;

    async fn create_share(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
        share: NewShare,
    ) -> StoreResult<ProjectShare>;

    async fn list_shares(&self, user_id: &Uuid, project_id: &Uuid)
    -> StoreResult<Vec<ProjectShare>>;

    async fn delete_share(&self, user_id: &Uuid, share_id: &Uuid) -> StoreResult<()>;

    /// Public lookup by token. Only live shares resolve; each successful
    /// lookup increments the share's view count.
    async fn resolve_share(&self, token: &str) -> StoreResult<SharedProject>;
}

/// Random URL-safe share token.
pub fn generate_share_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SHARE_TOKEN_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_tokens_are_alphanumeric_and_distinct() {
        let a = generate_share_token();
        let b = generate_share_token();
        assert_eq!(a.len(), SHARE_TOKEN_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn not_found_messages_name_the_record() {
        let id = Uuid::nil();
        assert_eq!(
            StoreError::project(&id).to_string(),
            "project 00000000-0000-0000-0000-000000000000 not found"
        );
        assert_eq!(StoreError::share("abc").to_string(), "share abc not found");
    }
}

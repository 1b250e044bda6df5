//! In-memory project store for tests, the CLI and `--memory` dev servers.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ProjectStore, StoreError, StoreResult, generate_share_token};
use crate::models::{NewProject, NewShare, Project, ProjectShare, ProjectUpdate, SharedProject};
use crate::uuid::uuidv7;

#[derive(Debug, Default)]
struct Tables {
    projects: HashMap<Uuid, Project>,
    shares: HashMap<Uuid, ProjectShare>,
}

impl Tables {
    fn owned_project(&self, user_id: &Uuid, project_id: &Uuid) -> StoreResult<&Project> {
        self.projects
            .get(project_id)
            .filter(|p| p.user_id == *user_id)
            .ok_or_else(|| StoreError::project(project_id))
    }
}

/// [`ProjectStore`] holding everything in process memory. Data is lost on drop.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    tables: RwLock<Tables>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_project(&self, user_id: &Uuid, project: NewProject) -> StoreResult<Project> {
        let now = Utc::now();
        let project = Project {
            id: uuidv7(),
            user_id: *user_id,
            title: project.title,
            description: project.description,
            chat_history: project.chat_history,
            template_type: project.preview_data.template,
            preview_data: project.preview_data,
            status: project.status,
            html_content: None,
            css_content: None,
            js_content: None,
            created_at: now,
            updated_at: now,
        };
        self.tables
            .write()
            .await
            .projects
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn list_projects(&self, user_id: &Uuid) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables
            .projects
            .values()
            .filter(|p| p.user_id == *user_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(projects)
    }

    async fn get_project(&self, user_id: &Uuid, project_id: &Uuid) -> StoreResult<Project> {
        let tables = self.tables.read().await;
        tables.owned_project(user_id, project_id).cloned()
    }

    async fn update_project(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
        update: ProjectUpdate,
    ) -> StoreResult<Project> {
        let mut tables = self.tables.write().await;
        let project = tables
            .projects
            .get_mut(project_id)
            .filter(|p| p.user_id == *user_id)
            .ok_or_else(|| StoreError::project(project_id))?;

        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(chat_history) = update.chat_history {
            project.chat_history = chat_history;
        }
        if let Some(preview_data) = update.preview_data {
            project.template_type = preview_data.template;
            project.preview_data = preview_data;
        }
        if let Some(status) = update.status {
            project.status = status;
        }
        if let Some(html) = update.html_content {
            project.html_content = html;
        }
        if let Some(css) = update.css_content {
            project.css_content = css;
        }
        if let Some(js) = update.js_content {
            project.js_content = js;
        }
        // Keep updated_at strictly increasing so recency ordering is stable.
        project.updated_at = Utc::now().max(project.updated_at + chrono::Duration::microseconds(1));
        Ok(project.clone())
    }

    async fn delete_project(&self, user_id: &Uuid, project_id: &Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.owned_project(user_id, project_id)?;
        tables.projects.remove(project_id);
        tables.shares.retain(|_, s| s.project_id != *project_id);
        Ok(())
    }

    async fn create_share(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
        share: NewShare,
    ) -> StoreResult<ProjectShare> {
        let mut tables = self.tables.write().await;
        tables.owned_project(user_id, project_id)?;
        let share = ProjectShare {
            id: uuidv7(),
            project_id: *project_id,
            share_token: generate_share_token(),
            is_public: share.is_public,
            expires_at: share.expires_at,
            view_count: 0,
            created_at: Utc::now(),
        };
        tables.shares.insert(share.id, share.clone());
        Ok(share)
    }

    async fn list_shares(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
    ) -> StoreResult<Vec<ProjectShare>> {
        let tables = self.tables.read().await;
        tables.owned_project(user_id, project_id)?;
        let mut shares: Vec<ProjectShare> = tables
            .shares
            .values()
            .filter(|s| s.project_id == *project_id)
            .cloned()
            .collect();
        shares.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(shares)
    }

    async fn delete_share(&self, user_id: &Uuid, share_id: &Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .shares
            .get(share_id)
            .and_then(|s| tables.projects.get(&s.project_id))
            .is_some_and(|p| p.user_id == *user_id);
        if !owned {
            return Err(StoreError::share(share_id));
        }
        tables.shares.remove(share_id);
        Ok(())
    }

    async fn resolve_share(&self, token: &str) -> StoreResult<SharedProject> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;
        let now = Utc::now();
        let share = tables
            .shares
            .values_mut()
            .find(|s| s.share_token == token && s.is_live(now))
            .ok_or_else(|| StoreError::share(token))?;
        let project = tables
            .projects
            .get(&share.project_id)
            .ok_or_else(|| StoreError::share(token))?;
        share.view_count += 1;
        Ok(SharedProject::from(project))
    }
}

//! PostgreSQL project store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use super::{ProjectStore, StoreError, StoreResult, generate_share_token};
use crate::models::{
    ChatMessage, NewProject, NewShare, PreviewData, Project, ProjectShare, ProjectUpdate,
    SharedProject,
};
use crate::uuid::uuidv7;

const PROJECT_COLUMNS: &str = "id, user_id, title, description, chat_history, preview_data, \
     template_type, status, html_content, css_content, js_content, created_at, updated_at";

const SHARE_COLUMNS: &str =
    "id, project_id, share_token, is_public, expires_at, view_count, created_at";

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    chat_history: Json<Vec<ChatMessage>>,
    preview_data: Json<PreviewData>,
    template_type: String,
    status: String,
    html_content: Option<String>,
    css_content: Option<String>,
    js_content: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = StoreError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            template_type: row
                .template_type
                .parse()
                .map_err(|e| StoreError::Corrupt(format!("project {}: {e}", row.id)))?,
            status: row
                .status
                .parse()
                .map_err(|e| StoreError::Corrupt(format!("project {}: {e}", row.id)))?,
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            description: row.description,
            chat_history: row.chat_history.0,
            preview_data: row.preview_data.0,
            html_content: row.html_content,
            css_content: row.css_content,
            js_content: row.js_content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ShareRow {
    id: Uuid,
    project_id: Uuid,
    share_token: String,
    is_public: bool,
    expires_at: Option<DateTime<Utc>>,
    view_count: i64,
    created_at: DateTime<Utc>,
}

impl From<ShareRow> for ProjectShare {
    fn from(row: ShareRow) -> Self {
        ProjectShare {
            id: row.id,
            project_id: row.project_id,
            share_token: row.share_token,
            is_public: row.is_public,
            expires_at: row.expires_at,
            view_count: row.view_count,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SharedRow {
    id: Uuid,
    title: String,
    description: String,
    preview_data: Json<PreviewData>,
    template_type: String,
    html_content: Option<String>,
    css_content: Option<String>,
    js_content: Option<String>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SharedRow> for SharedProject {
    type Error = StoreError;

    fn try_from(row: SharedRow) -> Result<Self, Self::Error> {
        Ok(SharedProject {
            template_type: row
                .template_type
                .parse()
                .map_err(|e| StoreError::Corrupt(format!("project {}: {e}", row.id)))?,
            id: row.id,
            title: row.title,
            description: row.description,
            preview_data: row.preview_data.0,
            html_content: row.html_content,
            css_content: row.css_content,
            js_content: row.js_content,
            updated_at: row.updated_at,
        })
    }
}

/// [`ProjectStore`] backed by PostgreSQL. Run [`crate::migrate::migrate`]
/// on the pool before use.
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn owns_project(&self, user_id: &Uuid, project_id: &Uuid) -> StoreResult<bool> {
        let owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM projects WHERE id = $1 AND user_id = $2)",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(owned)
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_project(&self, user_id: &Uuid, project: NewProject) -> StoreResult<Project> {
        let sql = format!(
            r#"
            INSERT INTO projects (id, user_id, title, description, chat_history, preview_data, template_type, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PROJECT_COLUMNS}
            "#
        );
        let template = project.preview_data.template;
        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(uuidv7())
            .bind(user_id)
            .bind(&project.title)
            .bind(&project.description)
            .bind(Json(&project.chat_history))
            .bind(Json(&project.preview_data))
            .bind(template.as_str())
            .bind(project.status.as_str())
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(project_id = %row.id, %user_id, "project created");
        row.try_into()
    }

    async fn list_projects(&self, user_id: &Uuid) -> StoreResult<Vec<Project>> {
        let sql = format!(
            r#"
            SELECT {PROJECT_COLUMNS}
            FROM projects
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#
        );
        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Project::try_from).collect()
    }

    async fn get_project(&self, user_id: &Uuid, project_id: &Uuid) -> StoreResult<Project> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::project(project_id))?
            .try_into()
    }

    async fn update_project(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
        update: ProjectUpdate,
    ) -> StoreResult<Project> {
        let sql = format!(
            r#"
            UPDATE projects SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                chat_history = COALESCE($5, chat_history),
                preview_data = COALESCE($6, preview_data),
                template_type = COALESCE($7, template_type),
                status = COALESCE($8, status),
                html_content = CASE WHEN $9 THEN $10 ELSE html_content END,
                css_content = CASE WHEN $11 THEN $12 ELSE css_content END,
                js_content = CASE WHEN $13 THEN $14 ELSE js_content END,
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING {PROJECT_COLUMNS}
            "#
        );
        let template = update.preview_data.as_ref().map(|p| p.template.as_str());
        sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(project_id)
            .bind(user_id)
            .bind(update.title.as_deref())
            .bind(update.description.as_deref())
            .bind(update.chat_history.as_ref().map(Json))
            .bind(update.preview_data.as_ref().map(Json))
            .bind(template)
            .bind(update.status.map(|s| s.as_str()))
            .bind(update.html_content.is_some())
            .bind(update.html_content.as_ref().and_then(Option::as_deref))
            .bind(update.css_content.is_some())
            .bind(update.css_content.as_ref().and_then(Option::as_deref))
            .bind(update.js_content.is_some())
            .bind(update.js_content.as_ref().and_then(Option::as_deref))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::project(project_id))?
            .try_into()
    }

    async fn delete_project(&self, user_id: &Uuid, project_id: &Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(project_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::project(project_id));
        }
        tracing::debug!(%project_id, "project deleted");
        Ok(())
    }

    async fn create_share(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
        share: NewShare,
    ) -> StoreResult<ProjectShare> {
        let sql = format!(
            r#"
            INSERT INTO project_shares (id, project_id, share_token, is_public, expires_at)
            SELECT $1, p.id, $3, $4, $5
            FROM projects p
            WHERE p.id = $2 AND p.user_id = $6
            RETURNING {SHARE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ShareRow>(&sql)
            .bind(uuidv7())
            .bind(project_id)
            .bind(generate_share_token())
            .bind(share.is_public)
            .bind(share.expires_at)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::project(project_id))?;
        tracing::debug!(share_id = %row.id, %project_id, "share created");
        Ok(row.into())
    }

    async fn list_shares(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
    ) -> StoreResult<Vec<ProjectShare>> {
        if !self.owns_project(user_id, project_id).await? {
            return Err(StoreError::project(project_id));
        }
        let sql = format!(
            "SELECT {SHARE_COLUMNS} FROM project_shares WHERE project_id = $1 ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, ShareRow>(&sql)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(ProjectShare::from).collect())
    }

    async fn delete_share(&self, user_id: &Uuid, share_id: &Uuid) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM project_shares s
            USING projects p
            WHERE s.id = $1 AND s.project_id = p.id AND p.user_id = $2
            "#,
        )
        .bind(share_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::share(share_id));
        }
        Ok(())
    }

    async fn resolve_share(&self, token: &str) -> StoreResult<SharedProject> {
        sqlx::query_as::<_, SharedRow>(
            r#"
            WITH live AS (
                UPDATE project_shares
                SET view_count = view_count + 1
                WHERE share_token = $1
                  AND is_public
                  AND (expires_at IS NULL OR expires_at > now())
                RETURNING project_id
            )
            SELECT p.id, p.title, p.description, p.preview_data, p.template_type,
                   p.html_content, p.css_content, p.js_content, p.updated_at
            FROM projects p
            JOIN live ON live.project_id = p.id
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::share(token))?
        .try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Matcher;
    use crate::models::{Category, Language, ProjectStatus};

    fn project_row(template_type: &str, status: &str) -> ProjectRow {
        let preview = Matcher::builtin().synthesize_preview("restaurant", Language::En);
        let now = Utc::now();
        ProjectRow {
            id: uuidv7(),
            user_id: uuidv7(),
            title: "Cafe".into(),
            description: "desc".into(),
            chat_history: Json(vec![ChatMessage::user("restaurant")]),
            preview_data: Json(preview),
            template_type: template_type.into(),
            status: status.into(),
            html_content: None,
            css_content: Some("main {}".into()),
            js_content: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn shared_row(template_type: &str) -> SharedRow {
        SharedRow {
            id: uuidv7(),
            title: "Cafe".into(),
            description: "desc".into(),
            preview_data: Json(Matcher::builtin().default_preview(Language::En)),
            template_type: template_type.into(),
            html_content: None,
            css_content: None,
            js_content: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn project_row_converts_tags() {
        let row = project_row("restaurant", "published");
        let id = row.id;
        let project = Project::try_from(row).unwrap();
        assert_eq!(project.id, id);
        assert_eq!(project.template_type, Category::Restaurant);
        assert_eq!(project.status, ProjectStatus::Published);
        assert_eq!(project.chat_history.len(), 1);
        assert_eq!(project.css_content.as_deref(), Some("main {}"));
    }

    #[test]
    fn unknown_project_status_is_corrupt() {
        let row = project_row("restaurant", "archived");
        let id = row.id;
        match Project::try_from(row) {
            Err(StoreError::Corrupt(msg)) => {
                assert!(msg.contains(&id.to_string()));
                assert!(msg.contains("archived"));
            }
            other => panic!("expected corrupt row, got {other:?}"),
        }
    }

    #[test]
    fn unknown_project_template_is_corrupt() {
        let row = project_row("blog", "draft");
        assert!(matches!(Project::try_from(row), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn shared_row_converts_template() {
        let shared = SharedProject::try_from(shared_row("general")).unwrap();
        assert_eq!(shared.template_type, Category::General);
        assert_eq!(shared.title, "Cafe");
    }

    #[test]
    fn unknown_shared_template_is_corrupt() {
        assert!(matches!(
            SharedProject::try_from(shared_row("blog")),
            Err(StoreError::Corrupt(_))
        ));
    }
}

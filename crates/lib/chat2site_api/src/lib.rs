//! # chat2site_api
//!
//! HTTP API library for Chat2Site.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use chat2site_core::matcher::Matcher;
use chat2site_core::store::ProjectStore;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, export, health, projects, shares};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Project persistence.
    pub store: Arc<dyn ProjectStore>,
    /// Keyword matcher over the loaded catalog.
    pub matcher: Matcher,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `chat2site_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    chat2site_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/chat/greeting", post(chat::greeting_handler))
        .route("/share/{token}", get(shares::shared_project_handler))
        .route("/share/{token}/html", get(shares::shared_page_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route(
            "/projects",
            post(projects::create_project_handler).get(projects::list_projects_handler),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project_handler)
                .patch(projects::update_project_handler)
                .delete(projects::delete_project_handler),
        )
        .route("/chat", post(chat::start_chat_handler))
        .route("/projects/{id}/chat", post(chat::project_chat_handler))
        .route("/projects/{id}/preview", get(export::preview_handler))
        .route("/projects/{id}/export", get(export::export_handler))
        .route(
            "/projects/{id}/shares",
            post(shares::create_share_handler).get(shares::list_shares_handler),
        )
        .route("/shares/{id}", delete(shares::delete_share_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

//! API server configuration.

use std::path::PathBuf;

use chat2site_core::auth::jwt::resolve_jwt_secret;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// HS256 secret shared with the identity provider.
    pub jwt_secret: String,
    /// Expected `aud` claim; unchecked when `None`.
    pub jwt_audience: Option<String>,
    /// YAML catalog replacing the built-in replies and blueprints.
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                     | Default                             |
    /// |------------------------------|-------------------------------------|
    /// | `BIND_ADDR`                  | `127.0.0.1:3100`                    |
    /// | `DATABASE_URL`               | `postgres://localhost:5432/chat2site` |
    /// | `JWT_SECRET` / `AUTH_SECRET` | generated & persisted to file       |
    /// | `JWT_AUDIENCE`               | unset                               |
    /// | `CHAT2SITE_CATALOG`          | unset (built-in catalog)            |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3100".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/chat2site".into()),
            jwt_secret: resolve_jwt_secret(),
            jwt_audience: non_empty_var("JWT_AUDIENCE"),
            catalog_path: non_empty_var("CHAT2SITE_CATALOG").map(PathBuf::from),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

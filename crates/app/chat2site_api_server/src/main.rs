//! Chat2Site API server binary.
//!
//! Serves the project, chat, export and share endpoints over HTTP, backed by
//! PostgreSQL (or process memory with `--memory`).

use std::path::PathBuf;
use std::sync::Arc;

use chat2site_api::config::ApiConfig;
use chat2site_core::matcher::Matcher;
use chat2site_core::store::{MemoryProjectStore, PgProjectStore, ProjectStore};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "chat2site_api_server", about = "Chat2Site API server")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 3100)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/chat2site"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Keep projects in process memory instead of PostgreSQL. Data is lost on exit.
    #[arg(long, default_value_t = false)]
    memory: bool,

    /// YAML catalog replacing the built-in replies and blueprints.
    #[arg(long, env = "CHAT2SITE_CATALOG")]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chat2site_api=debug,chat2site_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    info!(port = args.port, memory = args.memory, "starting chat2site_api_server");

    let matcher = match &args.catalog {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Matcher::load(path)?
        }
        None => Matcher::builtin(),
    };

    let store: Arc<dyn ProjectStore> = if args.memory {
        warn!("using in-memory storage; projects are lost on exit");
        Arc::new(MemoryProjectStore::new())
    } else {
        info!(
            max_connections = args.max_connections,
            "configuring connection pool"
        );
        let pool = PgPoolOptions::new()
            .max_connections(args.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(&args.database_url)
            .await?;

        info!("running database migrations");
        chat2site_api::migrate(&pool).await?;
        Arc::new(PgProjectStore::new(pool))
    };

    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        pg_connection_url: args.database_url,
        catalog_path: args.catalog,
        ..ApiConfig::from_env()
    };

    let state = chat2site_api::AppState {
        store,
        matcher,
        config: config.clone(),
    };

    let app = chat2site_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

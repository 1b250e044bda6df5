// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::path::{Path, PathBuf};

use chat2site_core::auth::jwt::{generate_access_token, resolve_jwt_secret};
use chat2site_core::export::{export_filename, render_landing_page, render_preview};
use chat2site_core::matcher::Matcher;
use chat2site_core::models::{Language, Project};
use chrono::Datelike;
use clap::Parser;
use cli::{Cli, Commands};
use rand::SeedableRng;
use rand::rngs::StdRng;

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    let matcher = match &args.catalog {
        Some(path) => {
            log::debug!("loading catalog from {}", path.display());
            Matcher::load(path)?
        }
        None => Matcher::builtin(),
    };

    match args.command {
        Commands::Classify { message } => {
            println!("{}", matcher.classify(&message));
        }
        Commands::Reply {
            message,
            language,
            seed,
        } => {
            let language = Language::from(language);
            let reply = match seed {
                Some(seed) => matcher.select_response_with(
                    &message,
                    language,
                    &mut StdRng::seed_from_u64(seed),
                ),
                None => matcher.select_response(&message, language),
            };
            println!("{reply}");
        }
        Commands::Greeting { language } => {
            println!("{}", matcher.greeting(language.into()));
        }
        Commands::Preview {
            message,
            language,
            html,
        } => {
            let language = Language::from(language);
            let preview = matcher.synthesize_preview(&message, language);
            if html {
                let year = chrono::Utc::now().year();
                print!("{}", render_preview(&preview, language, year)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            }
        }
        Commands::Export {
            project,
            language,
            output,
        } => {
            let path = export(&project, language.into(), output)?;
            println!("{}", path.display());
        }
        Commands::Catalog => {
            print!("{}", matcher.catalog().to_yaml()?);
        }
        Commands::Token { user, email } => {
            let user = user.unwrap_or_else(uuid::Uuid::now_v7);
            let secret = resolve_jwt_secret();
            log::info!("token for user {user}");
            println!(
                "{}",
                generate_access_token(&user, email.as_deref(), secret.as_bytes())?
            );
        }
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Render a stored project record to an HTML file and return its path.
fn export(project: &Path, language: Language, output: Option<PathBuf>) -> Result<PathBuf> {
    let content = std::fs::read_to_string(project)?;
    let project: Project = serde_json::from_str(&content)?;
    if project.preview_data.template != project.template_type {
        log::warn!(
            "template_type '{}' differs from preview template '{}'; rendering the preview",
            project.template_type,
            project.preview_data.template
        );
    }
    let html = render_landing_page(&project, language)?;
    let path = output.unwrap_or_else(|| PathBuf::from(export_filename(&project.title)));
    if path.is_dir() {
        return Err(Error::Custom(format!("{} is a directory", path.display())));
    }
    std::fs::write(&path, html)?;
    Ok(path)
}

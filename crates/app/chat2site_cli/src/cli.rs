use std::path::PathBuf;

use chat2site_core::models::Language;
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "chat2site",
    version,
    about = "Chat replies, page blueprints and landing-page export, offline"
)]
pub struct Cli {
    /// YAML catalog replacing the built-in replies and blueprints.
    #[arg(long, global = true, env = "CHAT2SITE_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the category a message is classified into
    Classify {
        message: String,
    },
    /// Print a chat reply for a message
    Reply {
        #[arg(default_value = "")]
        message: String,
        #[arg(short, long, value_enum, default_value_t = LanguageArg::En)]
        language: LanguageArg,
        /// Seed the reply picker for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the opening assistant message
    Greeting {
        #[arg(short, long, value_enum, default_value_t = LanguageArg::En)]
        language: LanguageArg,
    },
    /// Print the page blueprint for a message as JSON, or as HTML with --html
    Preview {
        #[arg(default_value = "")]
        message: String,
        #[arg(short, long, value_enum, default_value_t = LanguageArg::En)]
        language: LanguageArg,
        #[arg(long)]
        html: bool,
    },
    /// Render a project JSON file to a standalone HTML page
    Export {
        /// Project record as returned by `GET /projects/{id}`
        project: PathBuf,
        #[arg(short, long, value_enum, default_value_t = LanguageArg::En)]
        language: LanguageArg,
        /// Output file; defaults to the slugified project title
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the active catalog as YAML
    Catalog,
    /// Mint a one-hour access token for local development
    Token {
        /// User id; a new one is generated when omitted
        #[arg(long)]
        user: Option<Uuid>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Print the version
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    Ar,
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Ar => Language::Ar,
            LanguageArg::En => Language::En,
        }
    }
}

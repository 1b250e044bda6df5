use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Catalog: {}", .0)]
    Catalog(#[from] chat2site_core::matcher::CatalogError),

    #[error("Json: {}", .0)]
    Json(#[from] serde_json::Error),

    #[error("Auth: {}", .0)]
    Auth(#[from] chat2site_core::auth::AuthError),

    #[error("Export: {}", .0)]
    Export(#[from] chat2site_core::export::ExportError),
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagesError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse site file at {path}: {message}")]
    SiteParse { path: PathBuf, message: String },

    #[error("Unsupported site file format: {0}")]
    SiteFormat(PathBuf),

    #[error("Page source error: {0}")]
    Source(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PagesError>;

//! Top-level error type.
//!
//! Argument errors are clap's own and never reach this type. Each variant
//! renders as `<context>: <cause>`; the binary prefixes
//! `Error ` and exits non-zero. Nothing is retried.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::render::ConvertError;
use crate::xkcd::XkcdError;

#[derive(Debug, thiserror::Error)]
pub enum HowdyError {
    #[error("loading config: {0}")]
    Config(#[from] ConfigError),

    #[error("getting random image from directory: no images found in {}", .path.display())]
    DirectoryEmpty { path: PathBuf },

    #[error("getting random image from directory: {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", fetch_context(.id))]
    Fetch {
        /// Requested comic, `None` for the latest
        id: Option<i64>,
        source: XkcdError,
    },

    #[error("creating HTTP client: {0}")]
    Client(XkcdError),

    #[error("converting image to ASCII: {0}")]
    Render(#[from] ConvertError),

    #[error("writing output: {0}")]
    Output(#[from] std::io::Error),
}

fn fetch_context(id: &Option<i64>) -> String {
    match id {
        Some(id) => format!("fetching comic with ID {}", id),
        None => "fetching comic".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, HowdyError>;

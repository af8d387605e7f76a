use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing translation for key: {0}")]
    MissingKey(String),

    #[error("Invalid global name {0:?}: expected a JS identifier")]
    InvalidGlobalName(String),

    #[error("Invalid locale file {}: {reason}", path.display())]
    InvalidLocale { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

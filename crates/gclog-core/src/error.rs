//! Error type for gclog-core.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input path does not end in `.log`.
    #[error("not a log file: {}", .0.display())]
    InvalidInputExtension(PathBuf),

    /// Input path does not name an existing file.
    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Output path does not end in `.json`.
    #[error("not a json file: {}", .0.display())]
    InvalidOutputExtension(PathBuf),

    /// Neither the command line nor the config supplied a path.
    #[error("no {0} path given (pass it as an argument or set it in config)")]
    MissingPath(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

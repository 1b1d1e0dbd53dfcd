//! Error types for the paginator's fallible edges

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginatorError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type PaginatorResult<T> = Result<T, PaginatorError>;

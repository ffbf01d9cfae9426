//! Error types for configuration, statistics and stream handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PwCheckError {
    #[error("Level must be an integer between 0 and 4, got {0}")]
    InvalidLevel(i64),
    #[error("Param must be a positive integer, got {0}")]
    InvalidParam(i64),
    #[error("Cannot summarize statistics: no lines were observed")]
    EmptyStream,
    #[error("Line {line} is too long (maximum is {max} characters)")]
    LineTooLong { line: usize, max: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PwCheckError>;

//! Error types for pointview

use thiserror::Error;

/// Main error type for pointview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("input file not found: {path}")]
    MissingInput { path: String },

    #[error("input file contains no points: {path}")]
    EmptyInput { path: String },

    #[error("malformed data on line {line}: {message}")]
    MalformedRow { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(String),
}

/// Result type alias for pointview operations
pub type Result<T> = std::result::Result<T, Error>;

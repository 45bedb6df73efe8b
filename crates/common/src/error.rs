//! Error types for the common crate

/// Errors raised while resolving or decoding user input
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error when reading from or writing to the filesystem
    #[error("filesystem error: {0}")]
    FilesystemError(#[from] std::io::Error),
    /// Error when input cannot be parsed
    #[error("parse error: {0}")]
    ParseError(String),
    /// Generic error
    #[error("error: {0}")]
    Generic(String),
}

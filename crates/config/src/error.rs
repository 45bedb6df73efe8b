//! Error types for the configuration module

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic error with a message
    #[error("Error: {0}")]
    Generic(String),

    /// An error that occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A key passed to `update` that the configuration does not have
    #[error("invalid key: '{0}' is not a valid configuration key.")]
    InvalidKey(String),

    /// A value that cannot be stored under the given key
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue {
        /// The key being updated
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

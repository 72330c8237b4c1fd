use thiserror::Error;

/// Unified error type for merge message classification
#[derive(Error, Debug)]
pub enum MergeMessageError {
    #[error("Invalid pattern for merge message format '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in merge-message
pub type Result<T> = std::result::Result<T, MergeMessageError>;

impl MergeMessageError {
    /// Create a pattern error for the named format
    pub fn pattern(name: impl Into<String>, source: regex::Error) -> Self {
        MergeMessageError::Pattern {
            name: name.into(),
            source,
        }
    }

    /// Create an invalid argument error with context
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        MergeMessageError::InvalidArgument(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MergeMessageError::Config(msg.into())
    }
}

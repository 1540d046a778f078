//! Error types for confgraph-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from confgraph-core
    #[error(transparent)]
    Core(#[from] confgraph_core::Error),

    /// Graph mutation failure while loading
    #[error(transparent)]
    Graph(#[from] confgraph_core::GraphError),

    /// Query failure
    #[error(transparent)]
    Resolution(#[from] confgraph_core::ResolutionError),

    /// Error from confgraph-conventions
    #[error(transparent)]
    Convention(#[from] confgraph_conventions::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

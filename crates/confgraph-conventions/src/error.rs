//! Error types for confgraph-conventions

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown convention: {0}")]
    UnknownConvention(String),

    #[error("failed to apply convention '{convention}': {source}")]
    Apply {
        convention: String,
        source: confgraph_core::GraphError,
    },
}

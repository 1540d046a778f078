//! Error types for confgraph-core

use std::path::PathBuf;

use crate::attributes::Attributes;
use crate::graph::Role;

/// Result type for confgraph-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while building the graph.
///
/// A failed mutation leaves the graph exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No configuration with this name exists
    #[error("configuration not found: {name}")]
    NotFound { name: String },

    /// A configuration with this name exists with a different role or attributes
    #[error("configuration '{name}' already exists: {reason}")]
    Conflict { name: String, reason: String },

    /// The inheritance edge would close a cycle
    #[error("'{child}' cannot extend '{parent}': cycle {}", cycle.join(" -> "))]
    Cycle {
        child: String,
        parent: String,
        /// Names along the cycle, starting and ending at `child`
        cycle: Vec<String>,
    },

    /// The configuration already publishes a variant with this name
    #[error("variant '{variant}' already exists on configuration '{configuration}'")]
    DuplicateVariant {
        configuration: String,
        variant: String,
    },
}

/// Failures raised by resolution queries.
///
/// A failure for one configuration never affects queries for another.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// The queried configuration does not exist
    #[error("unknown configuration: {name}")]
    UnknownConfiguration { name: String },

    /// The producer cannot be selected by consumers
    #[error("configuration '{name}' cannot be consumed (role: {role})")]
    NotConsumable { name: String, role: Role },

    /// The producer exposes no variant, directly or inherited
    #[error("configuration '{name}' exposes no variants")]
    NoVariants { name: String },

    /// No variant is compatible with the requested attributes
    #[error("no variant of '{name}' matches {requested}")]
    NoMatch { name: String, requested: Attributes },

    /// Several indistinguishable variants match equally well
    #[error("ambiguous variants of '{name}' for {requested}: {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        requested: Attributes,
        candidates: Vec<String>,
    },
}

/// Errors that can occur in confgraph-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Graph mutation failure
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Resolution query failure
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Manifest file not found at expected path
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse manifest TOML
    #[error("failed to parse manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// The external collaborator could not produce the artifact
    #[error("failed to materialize artifact '{artifact}': {reason}")]
    Materialize { artifact: String, reason: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

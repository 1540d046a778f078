//! Opaque artifact handles and the materialization seam.
//!
//! The graph and resolver only carry [`ArtifactRef`] values around. Turning a
//! handle into a file is the job of an external [`ArtifactMaterializer`],
//! which is invoked on explicit request and never during graph traversal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::Result;

/// Handle to a producible file or resource. Never examined by the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtifactRef {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

impl From<String> for ArtifactRef {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}

/// Capability supplied by the artifact-materialization collaborator.
///
/// Implementations report failures as [`crate::Error::Materialize`].
pub trait ArtifactMaterializer {
    /// Produce the file behind `artifact` and return its location.
    fn materialize(&self, artifact: &ArtifactRef) -> Result<PathBuf>;
}

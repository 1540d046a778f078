//! A fake [`ArtifactMaterializer`] that records every request.

use std::path::PathBuf;
use std::sync::Mutex;

use confgraph_core::{ArtifactMaterializer, ArtifactRef, Error, Result};

/// Maps each handle to `<root>/<handle>` and remembers what was asked for.
///
/// Handles listed in `failing` produce `Error::Materialize`.
#[derive(Debug, Default)]
pub struct RecordingMaterializer {
    root: PathBuf,
    failing: Vec<String>,
    calls: Mutex<Vec<ArtifactRef>>,
}

impl RecordingMaterializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Make requests for `handle` fail.
    pub fn failing_on(mut self, handle: impl Into<String>) -> Self {
        self.failing.push(handle.into());
        self
    }

    /// Handles requested so far, in order.
    pub fn calls(&self) -> Vec<ArtifactRef> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ArtifactMaterializer for RecordingMaterializer {
    fn materialize(&self, artifact: &ArtifactRef) -> Result<PathBuf> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(artifact.clone());
        if self.failing.iter().any(|f| f == artifact.as_str()) {
            return Err(Error::Materialize {
                artifact: artifact.to_string(),
                reason: "producer task failed".to_string(),
            });
        }
        Ok(self.root.join(artifact.as_str()))
    }
}

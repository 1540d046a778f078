//! Temporary manifest files.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a `confgraph.toml`.
pub struct TestManifest {
    temp_dir: TempDir,
}

impl TestManifest {
    /// Write `content` to `confgraph.toml` in a fresh temporary directory.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn new(content: &str) -> Self {
        let temp_dir = TempDir::new()
            .unwrap_or_else(|e| panic!("TestManifest::new: failed to create temp dir: {e}"));
        fs::write(temp_dir.path().join("confgraph.toml"), content)
            .unwrap_or_else(|e| panic!("TestManifest::new: failed to write manifest: {e}"));
        Self { temp_dir }
    }

    /// Directory containing the manifest.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Full path to `confgraph.toml`.
    pub fn path(&self) -> PathBuf {
        self.root().join("confgraph.toml")
    }
}

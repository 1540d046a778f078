//! Command implementations for confgraph-cli

pub mod check;
pub mod list;
pub mod query;

pub use check::run_check;
pub use list::run_list;
pub use query::{run_deps, run_select, run_tree};

use std::path::Path;

use confgraph_core::{ConfigurationGraph, Manifest, ResolverOptions, VariantResolver};

use crate::error::Result;

/// A graph built from a manifest, frozen for querying.
pub struct Project {
    graph: ConfigurationGraph,
    options: ResolverOptions,
}

impl Project {
    /// Load the manifest, apply its conventions, then its configurations.
    pub fn load(manifest_path: &Path) -> Result<Self> {
        let manifest = Manifest::load(manifest_path)?;
        Self::from_manifest(&manifest)
    }

    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let mut graph = ConfigurationGraph::new();
        for id in &manifest.apply {
            let convention = confgraph_conventions::by_name(id)?;
            convention.apply(&mut graph)?;
        }
        manifest.apply_to(&mut graph)?;
        tracing::debug!(configurations = graph.len(), "Project loaded");
        Ok(Self {
            graph,
            options: manifest.resolution,
        })
    }

    pub fn graph(&self) -> &ConfigurationGraph {
        &self.graph
    }

    pub fn resolver(&self) -> VariantResolver<'_> {
        VariantResolver::with_options(&self.graph, self.options)
    }
}

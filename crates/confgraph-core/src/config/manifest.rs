//! Manifest parsing for `confgraph.toml` files
//!
//! Configurations are listed as an array of tables so declaration order is
//! preserved; that order drives node creation, parent order and variant
//! order in the built graph.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::attributes::Attributes;
use crate::error::{Error, GraphError, Result};
use crate::graph::{ConfigurationGraph, Dependency, Role, Variant};
use crate::resolver::ResolverOptions;

/// Graph manifest parsed from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Named conventions to apply before the manifest's own configurations
    #[serde(default)]
    pub apply: Vec<String>,

    /// Resolution settings
    #[serde(default)]
    pub resolution: ResolverOptions,

    /// Configurations in declaration order
    #[serde(default, rename = "configuration")]
    pub configurations: Vec<ConfigurationSpec>,
}

/// One `[[configuration]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationSpec {
    pub name: String,

    #[serde(default)]
    pub role: Role,

    /// Parent configurations, in order
    #[serde(default)]
    pub extends: Vec<String>,

    #[serde(default)]
    pub attributes: Attributes,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub visible: Option<bool>,

    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,

    #[serde(default, rename = "variant")]
    pub variants: Vec<VariantSpec>,
}

/// A dependency given either as a bare notation string or as a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencySpec {
    Notation(String),
    Detailed {
        name: String,
        #[serde(default)]
        attributes: Attributes,
    },
}

impl From<&DependencySpec> for Dependency {
    fn from(spec: &DependencySpec) -> Self {
        match spec {
            DependencySpec::Notation(name) => Dependency::new(name.clone()),
            DependencySpec::Detailed { name, attributes } => Dependency {
                name: name.clone(),
                attributes: attributes.clone(),
            },
        }
    }
}

/// One `[[configuration.variant]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSpec {
    pub name: String,
    pub artifact: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl From<&VariantSpec> for Variant {
    fn from(spec: &VariantSpec) -> Self {
        Variant::new(spec.name.clone(), spec.artifact.clone())
            .with_attributes(spec.attributes.clone())
    }
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use confgraph_core::config::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// [[configuration]]
    /// name = "implementation"
    ///
    /// [[configuration]]
    /// name = "runtimeElements"
    /// role = "consumable"
    /// extends = ["implementation"]
    /// attributes = { usage = "runtime" }
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.configurations.len(), 2);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(?path, "Loading manifest");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Populate `graph` with the manifest's configurations.
    ///
    /// All nodes are created first so `extends` may reference configurations
    /// declared later in the file (or created by a convention). Edges,
    /// variants, dependencies and metadata follow in declaration order.
    /// Stops at the first failure; earlier mutations are kept.
    pub fn apply_to(&self, graph: &mut ConfigurationGraph) -> std::result::Result<(), GraphError> {
        for spec in &self.configurations {
            graph.create_node(spec.name.clone(), spec.role, spec.attributes.clone())?;
        }

        for spec in &self.configurations {
            for parent in &spec.extends {
                graph.add_edge(&spec.name, parent)?;
            }
            for variant in &spec.variants {
                graph.attach_variant(&spec.name, variant.into())?;
            }
            for dependency in &spec.dependencies {
                graph.declare_dependency(&spec.name, dependency.into())?;
            }
            if let Some(description) = &spec.description {
                graph.set_description(&spec.name, description.clone())?;
            }
            if let Some(visible) = spec.visible {
                graph.set_visible(&spec.name, visible)?;
            }
        }

        tracing::debug!(
            configurations = self.configurations.len(),
            "Applied manifest to graph"
        );
        Ok(())
    }

    /// Build a fresh graph from this manifest alone.
    pub fn build_graph(&self) -> Result<ConfigurationGraph> {
        let mut graph = ConfigurationGraph::new();
        self.apply_to(&mut graph)?;
        Ok(graph)
    }
}

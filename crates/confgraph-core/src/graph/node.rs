//! Configuration nodes, variants and dependency declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::artifact::ArtifactRef;
use crate::attributes::Attributes;

/// Stable handle to a node inside one [`super::ConfigurationGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) usize);

impl NodeHandle {
    /// Creation index of the node.
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a configuration participates in resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Declaration container; participates only through inheritance.
    #[default]
    Bucket,
    /// May be selected by consumers.
    Consumable,
    /// May initiate resolution.
    Resolvable,
    /// Legacy role: consumable and resolvable.
    Both,
}

impl Role {
    pub fn can_be_consumed(self) -> bool {
        matches!(self, Role::Consumable | Role::Both)
    }

    pub fn can_be_resolved(self) -> bool {
        matches!(self, Role::Resolvable | Role::Both)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Bucket => "bucket",
            Role::Consumable => "consumable",
            Role::Resolvable => "resolvable",
            Role::Both => "both",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute-tagged artifact offering published by a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    name: String,
    attributes: Attributes,
    artifact: ArtifactRef,
}

impl Variant {
    /// Create a variant with no attributes of its own.
    pub fn new(name: impl Into<String>, artifact: impl Into<ArtifactRef>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            artifact: artifact.into(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes declared on the variant itself, without owner defaults.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn artifact(&self) -> &ArtifactRef {
        &self.artifact
    }
}

/// A dependency declared on a configuration.
///
/// `name` is the identity used when collapsing inherited duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub name: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

/// A named node of the configuration graph.
///
/// Nodes are created and mutated only through [`super::ConfigurationGraph`].
#[derive(Debug, Clone)]
pub struct ConfigurationNode {
    pub(crate) name: String,
    pub(crate) role: Role,
    pub(crate) attributes: Attributes,
    pub(crate) parents: Vec<NodeHandle>,
    pub(crate) variants: Vec<Variant>,
    pub(crate) dependencies: Vec<Dependency>,
    pub(crate) description: Option<String>,
    pub(crate) visible: bool,
}

impl ConfigurationNode {
    pub(crate) fn new(name: String, role: Role, attributes: Attributes) -> Self {
        Self {
            name,
            role,
            attributes,
            parents: Vec::new(),
            variants: Vec::new(),
            dependencies: Vec::new(),
            description: None,
            visible: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Direct parents in declaration order.
    pub fn parents(&self) -> &[NodeHandle] {
        &self.parents
    }

    /// Variants published directly by this node, in creation order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Directly declared dependencies, in declaration order.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn has_variant(&self, name: &str) -> bool {
        self.variants.iter().any(|v| v.name == name)
    }
}

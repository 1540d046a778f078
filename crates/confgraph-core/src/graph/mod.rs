//! Configuration graph store.
//!
//! The graph owns every configuration node by name. Edges point from a child
//! configuration to the parents it extends: if `runtimeElements` extends
//! `implementation`, the edge is `runtimeElements -> implementation` and the
//! child inherits the parent's declarations and variants.
//!
//! Mutations take `&mut self` and are expected to happen single-threaded
//! while the build model is configured. Queries go through
//! [`crate::VariantResolver`], which borrows the graph immutably.
//!
//! # Example
//!
//! ```
//! use confgraph_core::{Attributes, ConfigurationGraph, GraphError, Role};
//!
//! let mut graph = ConfigurationGraph::new();
//! graph.create_node("compile", Role::Bucket, Attributes::new()).unwrap();
//! graph.create_node("implementation", Role::Bucket, Attributes::new()).unwrap();
//! graph.add_edge("implementation", "compile").unwrap();
//!
//! let err = graph.add_edge("compile", "implementation").unwrap_err();
//! assert!(matches!(err, GraphError::Cycle { .. }));
//! ```

mod node;

pub use node::{ConfigurationNode, Dependency, NodeHandle, Role, Variant};

use std::collections::{HashMap, HashSet, VecDeque};

use crate::attributes::Attributes;
use crate::error::GraphError;

/// Directed acyclic graph of configurations.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationGraph {
    nodes: Vec<ConfigurationNode>,
    index: HashMap<String, NodeHandle>,
}

impl ConfigurationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration, or return the existing one if it was created
    /// with the same role and attributes.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Conflict` if `name` exists with a different role
    /// or attribute set. The existing node is left untouched.
    pub fn create_node(
        &mut self,
        name: impl Into<String>,
        role: Role,
        attributes: Attributes,
    ) -> Result<NodeHandle, GraphError> {
        let name = name.into();
        if let Some(&handle) = self.index.get(&name) {
            let existing = &self.nodes[handle.0];
            if existing.role != role {
                return Err(GraphError::Conflict {
                    reason: format!("role is {}, requested {}", existing.role, role),
                    name,
                });
            }
            if existing.attributes != attributes {
                return Err(GraphError::Conflict {
                    reason: format!(
                        "attributes are {}, requested {}",
                        existing.attributes, attributes
                    ),
                    name,
                });
            }
            return Ok(handle);
        }

        let handle = NodeHandle(self.nodes.len());
        tracing::debug!(configuration = %name, %role, "Creating configuration");
        self.index.insert(name.clone(), handle);
        self.nodes.push(ConfigurationNode::new(name, role, attributes));
        Ok(handle)
    }

    /// Declare that `child` extends `parent`.
    ///
    /// Re-declaring an existing edge is a no-op; parents keep their first
    /// declaration position.
    ///
    /// # Errors
    ///
    /// - `GraphError::NotFound` if either configuration is absent
    /// - `GraphError::Cycle` if `child` is already reachable from `parent`
    ///   (including `child == parent`)
    pub fn add_edge(&mut self, child: &str, parent: &str) -> Result<(), GraphError> {
        let child_handle = self.get_node(child)?;
        let parent_handle = self.get_node(parent)?;

        if self.nodes[child_handle.0].parents.contains(&parent_handle) {
            tracing::trace!(child, parent, "Edge already declared");
            return Ok(());
        }

        if let Some(path) = self.find_path(parent_handle, child_handle) {
            let cycle = std::iter::once(child_handle)
                .chain(path)
                .map(|h| self.nodes[h.0].name.clone())
                .collect();
            return Err(GraphError::Cycle {
                child: child.to_string(),
                parent: parent.to_string(),
                cycle,
            });
        }

        tracing::debug!(child, parent, "Adding inheritance edge");
        self.nodes[child_handle.0].parents.push(parent_handle);
        Ok(())
    }

    /// Append a variant to a configuration's published artifacts.
    ///
    /// # Errors
    ///
    /// - `GraphError::NotFound` if the configuration is absent
    /// - `GraphError::DuplicateVariant` if the node already has a variant of
    ///   that name (case-sensitive)
    pub fn attach_variant(&mut self, name: &str, variant: Variant) -> Result<(), GraphError> {
        let handle = self.get_node(name)?;
        let node = &mut self.nodes[handle.0];
        if node.has_variant(variant.name()) {
            return Err(GraphError::DuplicateVariant {
                configuration: name.to_string(),
                variant: variant.name().to_string(),
            });
        }
        tracing::debug!(configuration = name, variant = variant.name(), "Attaching variant");
        node.variants.push(variant);
        Ok(())
    }

    /// Append a dependency declaration to a configuration.
    pub fn declare_dependency(
        &mut self,
        name: &str,
        dependency: Dependency,
    ) -> Result<(), GraphError> {
        let handle = self.get_node(name)?;
        tracing::debug!(configuration = name, dependency = %dependency.name, "Declaring dependency");
        self.nodes[handle.0].dependencies.push(dependency);
        Ok(())
    }

    /// Set the human-readable description of a configuration.
    pub fn set_description(
        &mut self,
        name: &str,
        description: impl Into<String>,
    ) -> Result<(), GraphError> {
        let handle = self.get_node(name)?;
        self.nodes[handle.0].description = Some(description.into());
        Ok(())
    }

    /// Mark a configuration as visible or hidden in listings.
    pub fn set_visible(&mut self, name: &str, visible: bool) -> Result<(), GraphError> {
        let handle = self.get_node(name)?;
        self.nodes[handle.0].visible = visible;
        Ok(())
    }

    /// Look up a configuration by name.
    pub fn get_node(&self, name: &str) -> Result<NodeHandle, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NotFound {
                name: name.to_string(),
            })
    }

    /// Access a node by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different graph.
    pub fn node(&self, handle: NodeHandle) -> &ConfigurationNode {
        &self.nodes[handle.0]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &ConfigurationNode> {
        self.nodes.iter()
    }

    /// Names of the direct parents of a configuration, in declaration order.
    pub fn parents_of(&self, name: &str) -> Result<Vec<&str>, GraphError> {
        let handle = self.get_node(name)?;
        Ok(self.nodes[handle.0]
            .parents
            .iter()
            .map(|p| self.nodes[p.0].name.as_str())
            .collect())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the number of inheritance edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.parents.len()).sum()
    }

    /// Breadth-first walk over the inheritance edges starting at `start`.
    ///
    /// `start` comes first, then its parents in declaration order, level by
    /// level. Each reachable node appears exactly once, so diamonds are
    /// collapsed.
    pub fn walk_breadth_first(&self, start: NodeHandle) -> Vec<NodeHandle> {
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(current) = queue.pop_front() {
            tracing::trace!(configuration = %self.nodes[current.0].name, "Visiting");
            order.push(current);
            for &parent in &self.nodes[current.0].parents {
                if visited.insert(parent) {
                    queue.push_back(parent);
                }
            }
        }

        order
    }

    /// Depth-first search from `from` along parent edges for `target`.
    ///
    /// Returns the handles on the path from `from` to `target` inclusive.
    fn find_path(&self, from: NodeHandle, target: NodeHandle) -> Option<Vec<NodeHandle>> {
        let mut on_stack = HashSet::new();
        let mut finished = HashSet::new();
        let mut path = Vec::new();
        if self.search(from, target, &mut on_stack, &mut finished, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn search(
        &self,
        current: NodeHandle,
        target: NodeHandle,
        on_stack: &mut HashSet<NodeHandle>,
        finished: &mut HashSet<NodeHandle>,
        path: &mut Vec<NodeHandle>,
    ) -> bool {
        if !on_stack.insert(current) {
            return false;
        }
        path.push(current);
        if current == target {
            return true;
        }

        for &parent in &self.nodes[current.0].parents {
            if finished.contains(&parent) {
                continue;
            }
            if self.search(parent, target, on_stack, finished, path) {
                return true;
            }
        }

        path.pop();
        on_stack.remove(&current);
        finished.insert(current);
        false
    }
}

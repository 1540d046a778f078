//! Configuration graph store and variant resolver
//!
//! This crate models a build tool's *configurations*: named, attribute-tagged
//! groups of dependency declarations and published artifacts, related by an
//! inheritance relation. It provides:
//!
//! - **Graph store**: [`ConfigurationGraph`] owns the nodes, their roles,
//!   inheritance edges (cycle-checked on insertion) and per-node variants
//! - **Resolver**: [`VariantResolver`] computes effective dependency sets and
//!   selects the best-matching variant for a requested attribute set
//! - **Manifest**: [`Manifest`] describes a graph in TOML
//!
//! # Architecture
//!
//! ```text
//!        Manifest / conventions (populate)
//!                    |
//!           ConfigurationGraph     <- &mut while building
//!                    |
//!             VariantResolver      <- & while resolving (frozen)
//!                    |
//!          ArtifactMaterializer    <- external, on demand only
//! ```
//!
//! # Example
//!
//! ```
//! use confgraph_core::{Attributes, ConfigurationGraph, Role, Variant, VariantResolver};
//!
//! let mut graph = ConfigurationGraph::new();
//! graph.create_node("implementation", Role::Bucket, Attributes::new()).unwrap();
//! graph
//!     .create_node("runtimeElements", Role::Consumable, Attributes::from([("usage", "runtime")]))
//!     .unwrap();
//! graph.add_edge("runtimeElements", "implementation").unwrap();
//! graph
//!     .attach_variant("runtimeElements", Variant::new("jar", "build/libs/app.jar"))
//!     .unwrap();
//!
//! let resolver = VariantResolver::new(&graph);
//! let selected = resolver
//!     .select_variant("runtimeElements", &Attributes::from([("usage", "runtime")]))
//!     .unwrap();
//! assert_eq!(selected.name(), "jar");
//! ```

pub mod artifact;
pub mod attributes;
pub mod config;
pub mod error;
pub mod graph;
pub mod resolver;

pub use artifact::{ArtifactMaterializer, ArtifactRef};
pub use attributes::Attributes;
pub use config::{ConfigurationSpec, DependencySpec, Manifest, VariantSpec};
pub use error::{Error, GraphError, ResolutionError, Result};
pub use graph::{ConfigurationGraph, ConfigurationNode, Dependency, NodeHandle, Role, Variant};
pub use resolver::{
    CandidateVariant, DuplicatePolicy, ResolverOptions, TiePolicy, VariantResolver,
};

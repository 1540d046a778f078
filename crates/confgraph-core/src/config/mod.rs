//! Manifest-based graph configuration
//!
//! A manifest is a TOML description of configurations, their inheritance,
//! variants and dependency declarations, plus the resolution settings used
//! when querying the resulting graph.

mod manifest;

pub use manifest::{ConfigurationSpec, DependencySpec, Manifest, VariantSpec};

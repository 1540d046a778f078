//! Standard configuration layouts for confgraph.
//!
//! A convention populates a [`ConfigurationGraph`] with a well-known set of
//! configurations, inheritance edges and published variants, the way a build
//! plugin would when applied to a project.
//!
//! [`ConfigurationGraph`]: confgraph_core::ConfigurationGraph

pub mod convention;
pub mod error;
pub mod java;

pub use convention::{Convention, available, by_name};
pub use error::{Error, Result};
pub use java::{JavaLibraryConvention, JavaLibraryOutputs};

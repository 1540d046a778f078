//! Shared test utilities for the confgraph workspace.
//!
//! This crate provides standard graph fixtures so crate test suites do not
//! rebuild the same scenarios by hand. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`graphs`]: canned configuration graphs
//! - [`materializer`]: a recording [`ArtifactMaterializer`] fake
//! - [`manifest`]: temporary manifest files
//!
//! [`ArtifactMaterializer`]: confgraph_core::ArtifactMaterializer

pub mod graphs;
pub mod manifest;
pub mod materializer;

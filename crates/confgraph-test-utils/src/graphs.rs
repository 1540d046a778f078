//! Canned configuration graphs.
//!
//! # Panics
//!
//! Every builder panics if the graph cannot be constructed; fixtures are
//! expected to be valid.

use confgraph_core::{Attributes, ConfigurationGraph, Dependency, Role, Variant};

/// Create `names` as bucket configurations.
pub fn buckets(names: &[&str]) -> ConfigurationGraph {
    let mut graph = ConfigurationGraph::new();
    for name in names {
        graph
            .create_node(*name, Role::Bucket, Attributes::new())
            .unwrap_or_else(|e| panic!("buckets: failed to create {name}: {e}"));
    }
    graph
}

/// Diamond inheritance `A -> B, A -> C, B -> D, C -> D`.
///
/// Each node declares one dependency named after itself (`dep-a` ...), and
/// `D` additionally declares `shared`, as does `B`.
pub fn diamond() -> ConfigurationGraph {
    let mut graph = buckets(&["A", "B", "C", "D"]);
    for (child, parent) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
        graph
            .add_edge(child, parent)
            .unwrap_or_else(|e| panic!("diamond: {e}"));
    }
    for name in ["A", "B", "C", "D"] {
        graph
            .declare_dependency(name, Dependency::new(format!("dep-{}", name.to_lowercase())))
            .unwrap_or_else(|e| panic!("diamond: {e}"));
    }
    graph
        .declare_dependency("B", Dependency::new("shared").with_attribute("from", "B"))
        .unwrap_or_else(|e| panic!("diamond: {e}"));
    graph
        .declare_dependency("D", Dependency::new("shared").with_attribute("from", "D"))
        .unwrap_or_else(|e| panic!("diamond: {e}"));
    graph
}

/// `impl` (bucket) <- `runtimeElements` (consumable, `usage=runtime`) with a
/// `jar` variant carrying `usage=runtime`.
pub fn runtime_elements() -> ConfigurationGraph {
    let mut graph = ConfigurationGraph::new();
    graph
        .create_node("impl", Role::Bucket, Attributes::new())
        .unwrap_or_else(|e| panic!("runtime_elements: {e}"));
    graph
        .create_node(
            "runtimeElements",
            Role::Consumable,
            Attributes::from([("usage", "runtime")]),
        )
        .unwrap_or_else(|e| panic!("runtime_elements: {e}"));
    graph
        .add_edge("runtimeElements", "impl")
        .unwrap_or_else(|e| panic!("runtime_elements: {e}"));
    graph
        .attach_variant(
            "runtimeElements",
            Variant::new("jar", "build/libs/main.jar").with_attribute("usage", "runtime"),
        )
        .unwrap_or_else(|e| panic!("runtime_elements: {e}"));
    graph
}

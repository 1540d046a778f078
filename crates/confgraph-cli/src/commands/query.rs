//! Resolution queries: deps, select, tree

use colored::Colorize;
use serde::Serialize;
use std::collections::HashSet;

use confgraph_core::{Attributes, ConfigurationGraph, NodeHandle};

use super::Project;
use crate::error::{CliError, Result};

/// Run the deps command
pub fn run_deps(project: &Project, configuration: &str, json: bool) -> Result<()> {
    let dependencies = project.resolver().effective_dependencies(configuration)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dependencies)?);
        return Ok(());
    }

    println!("{} {}", "Dependencies of".bold(), configuration.green().bold());
    if dependencies.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for dependency in &dependencies {
        if dependency.attributes.is_empty() {
            println!("  {}", dependency.name);
        } else {
            println!("  {} {}", dependency.name, dependency.attributes.to_string().dimmed());
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct Selection<'a> {
    configuration: &'a str,
    variant: &'a str,
    artifact: &'a str,
    attributes: &'a Attributes,
}

/// Run the select command
pub fn run_select(
    project: &Project,
    configuration: &str,
    attributes: Vec<(String, String)>,
    json: bool,
) -> Result<()> {
    let requested: Attributes = attributes.into_iter().collect();
    let selected = project.resolver().select_variant(configuration, &requested)?;

    if json {
        let selection = Selection {
            configuration: selected.owner(),
            variant: selected.name(),
            artifact: selected.artifact().as_str(),
            attributes: selected.attributes(),
        };
        println!("{}", serde_json::to_string_pretty(&selection)?);
        return Ok(());
    }

    println!(
        "{} {} -> {}",
        "Selected".green().bold(),
        selected.qualified_name(),
        selected.artifact()
    );
    println!("  attributes: {}", selected.attributes());
    Ok(())
}

/// Run the tree command
pub fn run_tree(project: &Project, configuration: &str) -> Result<()> {
    let graph = project.graph();
    let root = graph
        .get_node(configuration)
        .map_err(|_| CliError::user(format!("unknown configuration: {}", configuration)))?;

    let mut lines = Vec::new();
    render_tree(graph, root, 0, &mut HashSet::new(), &mut lines);
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Depth-first rendering; a node already expanded elsewhere is printed once
/// more with a `(*)` marker and not expanded again.
fn render_tree(
    graph: &ConfigurationGraph,
    handle: NodeHandle,
    depth: usize,
    expanded: &mut HashSet<NodeHandle>,
    lines: &mut Vec<String>,
) {
    let node = graph.node(handle);
    let indent = "  ".repeat(depth);
    if !expanded.insert(handle) {
        lines.push(format!("{}{} (*)", indent, node.name()));
        return;
    }
    lines.push(format!("{}{} [{}]", indent, node.name(), node.role()));
    for &parent in node.parents() {
        render_tree(graph, parent, depth + 1, expanded, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confgraph_core::{Manifest, Role};

    #[test]
    fn test_render_tree_marks_repeats() {
        let mut graph = ConfigurationGraph::new();
        for name in ["A", "B", "C", "D"] {
            graph.create_node(name, Role::Bucket, Attributes::new()).unwrap();
        }
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("B", "D").unwrap();
        graph.add_edge("C", "D").unwrap();

        let mut lines = Vec::new();
        let root = graph.get_node("A").unwrap();
        render_tree(&graph, root, 0, &mut HashSet::new(), &mut lines);

        assert_eq!(
            lines,
            vec![
                "A [bucket]",
                "  B [bucket]",
                "    D [bucket]",
                "  C [bucket]",
                "    D (*)",
            ]
        );
    }

    #[test]
    fn test_select_unknown_configuration() {
        let project = Project::from_manifest(&Manifest::default()).unwrap();
        let result = run_select(&project, "nope", Vec::new(), false);
        assert!(matches!(result, Err(CliError::Resolution(_))));
    }
}

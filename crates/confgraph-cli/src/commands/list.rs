//! List command

use colored::Colorize;
use serde::Serialize;

use confgraph_core::{Attributes, Role};

use super::Project;
use crate::error::Result;

#[derive(Serialize)]
struct ConfigurationSummary<'a> {
    name: &'a str,
    role: Role,
    attributes: &'a Attributes,
    extends: Vec<&'a str>,
    variants: Vec<&'a str>,
    visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Run the list command
pub fn run_list(project: &Project, json: bool) -> Result<()> {
    let graph = project.graph();
    let summaries: Vec<ConfigurationSummary<'_>> = graph
        .nodes()
        .map(|node| ConfigurationSummary {
            name: node.name(),
            role: node.role(),
            attributes: node.attributes(),
            extends: node.parents().iter().map(|p| graph.node(*p).name()).collect(),
            variants: node.variants().iter().map(|v| v.name()).collect(),
            visible: node.is_visible(),
            description: node.description(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{}", "Configurations".bold());
    println!();
    for summary in &summaries {
        let name = if summary.visible {
            summary.name.green()
        } else {
            summary.name.dimmed()
        };
        print!("  {:<28} {:<11}", name, summary.role.to_string().cyan());
        if !summary.attributes.is_empty() {
            print!(" {}", summary.attributes);
        }
        println!();
        if let Some(description) = summary.description {
            println!("      {}", description.dimmed());
        }
    }
    println!();
    println!("{} {} configurations.", "Total:".dimmed(), summaries.len());
    Ok(())
}

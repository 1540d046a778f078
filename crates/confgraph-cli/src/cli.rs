//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// confgraph - Inspect build configurations, their dependencies and variants
#[derive(Parser, Debug)]
#[command(name = "confgraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the manifest
    #[arg(
        short,
        long,
        global = true,
        env = "CONFGRAPH_MANIFEST",
        default_value = "confgraph.toml"
    )]
    pub manifest: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Verify that every consumable configuration exposes a variant
    Check,

    /// List configurations
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the effective dependency set of a configuration
    Deps {
        /// Configuration name
        configuration: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Select the variant of a producer that matches requested attributes
    ///
    /// Examples:
    ///   confgraph select runtimeElements -a usage=runtime
    ///   confgraph select apiElements -a usage=api -a artifactType=jar
    Select {
        /// Producer configuration name
        configuration: String,

        /// Requested attribute as key=value (repeatable)
        #[arg(short, long = "attribute", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the inheritance tree of a configuration
    Tree {
        /// Configuration name
        configuration: String,
    },
}

/// Parse a `key=value` attribute argument.
pub fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

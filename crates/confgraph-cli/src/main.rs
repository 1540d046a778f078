//! confgraph CLI
//!
//! Loads a configuration manifest and answers dependency-closure and
//! variant-selection queries against it.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(&cli.manifest, cmd),
        None => {
            println!("{} configuration graph CLI", "confgraph".green().bold());
            println!();
            println!("Run {} for available commands.", "confgraph --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(manifest: &std::path::Path, cmd: Commands) -> Result<()> {
    let project = commands::Project::load(manifest)?;
    match cmd {
        Commands::Check => commands::run_check(&project),
        Commands::List { json } => commands::run_list(&project, json),
        Commands::Deps {
            configuration,
            json,
        } => commands::run_deps(&project, &configuration, json),
        Commands::Select {
            configuration,
            attributes,
            json,
        } => commands::run_select(&project, &configuration, attributes, json),
        Commands::Tree { configuration } => commands::run_tree(&project, &configuration),
    }
}

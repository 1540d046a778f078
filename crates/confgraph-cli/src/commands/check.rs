//! Check command

use colored::Colorize;

use super::Project;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Fails if any consumable configuration exposes no variant.
pub fn run_check(project: &Project) -> Result<()> {
    let problems = project.resolver().validate();

    if problems.is_empty() {
        println!(
            "{} {} configurations, no problems found",
            "OK".green().bold(),
            project.graph().len()
        );
        return Ok(());
    }

    for problem in &problems {
        println!("{} {}", "problem:".yellow().bold(), problem);
    }
    Err(CliError::user(format!("{} problem(s) found", problems.len())))
}

//! Running `npm install` inside generated packages

use super::check::npm_program;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Install dependencies of the package in `dir`.
///
/// npm shares the terminal with the CLI, so its progress output and
/// prompts reach the user unchanged.
pub async fn npm_install(dir: &Path) -> Result<()> {
    let program = npm_program();
    println!();
    println!(
        "{} {} {}",
        "Running:".dimmed(),
        format!("{program} install").yellow(),
        format!("({})", dir.display()).dimmed()
    );
    println!();

    let status = Command::new(program)
        .arg("install")
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to start {program} in {}", dir.display()))?;
    println!();

    if !status.success() {
        anyhow::bail!(
            "npm install failed with exit code {} in {}",
            status.code().unwrap_or(-1),
            dir.display()
        );
    }
    Ok(())
}

//! create-zenuxs-app - Project scaffolding for React, Next.js, Express and Fastify

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use stackgen_core::tui::CreateArgs;
use stackgen_core::{Configuration, ProductConfig, ProjectKind};
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Zenuxs product configuration
#[derive(Clone)]
pub struct ZenuxsConfig;

impl ProductConfig for ZenuxsConfig {
    fn name(&self) -> &'static str {
        "create-zenuxs-app"
    }

    fn display_name(&self) -> &'static str {
        "Create Zenuxs App"
    }

    fn version(&self) -> &'static str {
        CLI_VERSION
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold React, Next.js, Express, Fastify and full-stack projects"
    }

    fn docs_links(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("Zenuxs Accounts", "https://zenuxs.in"),
            ("Easy-Mongoo", "https://easy-mongoo.zenuxs.in"),
            ("HMAX Security", "https://hmax.zenuxs.in"),
        ]
    }

    fn next_steps(&self, config: &Configuration, root: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        let cd = match current.as_deref().and_then(|dir| root.strip_prefix(dir).ok()) {
            Some(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
            Some(_) => ".".to_string(),
            None => root.display().to_string(),
        };
        steps.push(format!("cd {cd}"));

        match &config.kind {
            ProjectKind::FullStack(_) => {
                let install = if config.install_deps { "" } else { "npm install && " };
                steps.push(format!("cd backend && {install}npm run dev"));
                steps.push(format!(
                    "In a second terminal: cd {cd}/frontend && {install}npm run dev"
                ));
            }
            _ => {
                if !config.install_deps {
                    steps.push("npm install".to_string());
                }
                steps.push("npm run dev".to_string());
            }
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-zenuxs-app")]
#[command(about = "Scaffold React, Next.js, Express, Fastify and full-stack projects")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Parent directory to create the project in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// YAML answers file to use instead of interactive prompts
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Accept all defaults (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Skip npm install
    #[arg(long = "no-install")]
    pub no_install: bool,
}

impl Args {
    fn into_create_args(self, project_name: String) -> CreateArgs {
        CreateArgs {
            project_name,
            directory: self.directory,
            config: self.config,
            yes: self.yes,
            no_install: self.no_install,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let mut args = Args::parse();
    let config = ZenuxsConfig;

    let Some(project_name) = args.project_name.take() else {
        eprintln!("{} Please specify the project name", "error:".red().bold());
        eprintln!();
        eprintln!("Usage: {} <project-name> [options]", config.name());
        eprintln!();
        eprintln!("For example:");
        eprintln!("  {} my-app", config.name());
        std::process::exit(1);
    };

    let result = stackgen_core::run(&config, args.into_create_args(project_name)).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

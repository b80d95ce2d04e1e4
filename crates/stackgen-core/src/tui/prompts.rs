//! Charm-style CLI prompts using cliclack

use crate::config::answers::{defaults, BackendAnswers, FrontendAnswers};
use crate::config::{
    Answers, BackendFramework, Choice, Configuration, Database, FrontendFramework, ProjectName,
    ProjectType,
};
use crate::generate::{generate_project, GenerationReport};
use crate::product::ProductConfig;
use crate::render::docs::stack_summary;
use crate::runtime::{check_node, check_npm, node_version_warning, npm_install};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the project directory to create
    pub project_name: String,

    /// Parent directory for the project (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Answers file to use instead of prompting
    pub config: Option<PathBuf>,

    /// Accept every default (non-interactive mode)
    pub yes: bool,

    /// Skip `npm install` regardless of the answers
    pub no_install: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(product: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(format!("{} v{}", product.display_name(), product.version()))?;

    let name = ProjectName::parse(&args.project_name)?;

    let answers = if let Some(path) = &args.config {
        cliclack::log::info(format!("Using answers from {}", path.display()))?;
        Answers::load(path)?
    } else if args.yes {
        cliclack::log::info("Using default options (--yes)")?;
        Answers::default()
    } else {
        prompt_answers()?
    };

    let mut config = answers.resolve(name);
    if args.no_install {
        config.install_deps = false;
    }

    let parent = select_parent(&args)?;
    confirm_target(&parent.join(config.project_name.as_str()), args.yes)?;

    cliclack::log::step(format!("{} project", config.project_type()))?;
    for line in stack_summary(&config) {
        cliclack::log::remark(line)?;
    }

    let report = create_project(&config, &parent).await?;

    if config.install_deps {
        install_dependencies(&report.packages).await?;
    } else {
        cliclack::log::info("Skipping dependency installation")?;
    }

    print_next_steps(product, &config, &report.root)?;

    Ok(())
}

/// Ask every question, skipping those that do not apply to earlier answers
fn prompt_answers() -> Result<Answers> {
    let project_type = select_choice(
        "What type of project do you want to create?",
        defaults::PROJECT_TYPE,
    )?;

    let has_frontend = matches!(project_type, ProjectType::Frontend | ProjectType::FullStack);
    let has_backend = matches!(project_type, ProjectType::Backend | ProjectType::FullStack);

    let frontend = if has_frontend {
        prompt_frontend()?
    } else {
        FrontendAnswers::default()
    };
    let backend = if has_backend {
        prompt_backend()?
    } else {
        BackendAnswers::default()
    };

    let auto_connect = if project_type == ProjectType::FullStack {
        Some(confirm(
            "Auto-connect the frontend to the backend?",
            defaults::AUTO_CONNECT,
        )?)
    } else {
        None
    };

    let install_deps = confirm("Install dependencies now?", defaults::INSTALL_DEPS)?;

    Ok(Answers {
        project_type: Some(project_type),
        frontend,
        backend,
        auto_connect,
        install_deps: Some(install_deps),
    })
}

fn prompt_frontend() -> Result<FrontendAnswers> {
    let framework: FrontendFramework =
        select_choice("Choose a frontend framework", defaults::FRONTEND_FRAMEWORK)?;
    let typescript = confirm("Use TypeScript?", defaults::TYPESCRIPT)?;
    let tailwind = confirm("Use Tailwind CSS?", defaults::TAILWIND)?;
    let auth_ui = if framework == FrontendFramework::React {
        Some(confirm(
            "Include authentication pages (Login/Register/Dashboard)?",
            defaults::AUTH_UI,
        )?)
    } else {
        None
    };

    Ok(FrontendAnswers {
        framework: Some(framework),
        typescript: Some(typescript),
        tailwind: Some(tailwind),
        auth_ui,
    })
}

fn prompt_backend() -> Result<BackendAnswers> {
    let framework: BackendFramework =
        select_choice("Choose a backend framework", defaults::BACKEND_FRAMEWORK)?;
    let database: Database = select_choice("Choose a database", defaults::DATABASE)?;
    let easy_mongoo = if database == Database::MongoDb {
        Some(confirm(
            "Use Easy-Mongoo (simplified MongoDB wrapper)?",
            defaults::EASY_MONGOO,
        )?)
    } else {
        None
    };

    Ok(BackendAnswers {
        framework: Some(framework),
        database: Some(database),
        easy_mongoo,
        auth: Some(confirm("Add JWT authentication?", defaults::AUTH)?),
        logger: Some(confirm("Add request logging?", defaults::LOGGER)?),
        rate_limiter: Some(confirm("Add rate limiting?", defaults::RATE_LIMITER)?),
        swagger: Some(confirm("Add Swagger API docs?", defaults::SWAGGER)?),
    })
}

fn select_choice<T: Choice>(prompt: &str, initial: T) -> Result<T> {
    let mut select = cliclack::select(prompt);
    for &choice in T::ALL {
        select = select.item(choice, choice.label(), "");
    }
    Ok(select.initial_value(initial).interact()?)
}

fn confirm(prompt: &str, initial: bool) -> Result<bool> {
    Ok(cliclack::confirm(prompt).initial_value(initial).interact()?)
}

fn select_parent(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let Some(dir) = &args.directory else {
        return Ok(current_dir);
    };

    let path = if dir.is_absolute() {
        dir.clone()
    } else {
        current_dir.join(dir)
    };
    cliclack::log::info(format!("Using directory: {}", path.display()))?;

    if path.exists() && !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }
    Ok(path)
}

/// Warn before writing into an existing, non-empty project directory
fn confirm_target(target: &Path, yes: bool) -> Result<()> {
    if target.exists() && !target.is_dir() {
        anyhow::bail!("A file named {} already exists", target.display());
    }

    if target.is_dir() {
        if let Ok(entries) = std::fs::read_dir(target) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "{} already exists and has {} items; generated files will overwrite existing ones",
                    target.display(),
                    count
                ))?;

                // Auto-confirm with --yes flag
                let proceed = if yes {
                    true
                } else {
                    confirm("Continue anyway?", false)?
                };

                if !proceed {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(())
}

async fn create_project(config: &Configuration, parent: &Path) -> Result<GenerationReport> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match generate_project(config, parent).await {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.files.len(),
                report.root.display()
            ));
            Ok(report)
        }
        Err(e) => {
            spinner.error("Failed to create project");
            Err(e.into())
        }
    }
}

async fn install_dependencies(packages: &[PathBuf]) -> Result<()> {
    let npm = check_npm();
    if !npm.available {
        cliclack::log::warning(
            "npm was not found; skipping dependency installation. Install Node.js from https://nodejs.org and run npm install.",
        )?;
        return Ok(());
    }

    let node = check_node();
    match node.version.as_deref() {
        Some(version) => match node_version_warning(version) {
            Some(warning) => cliclack::log::warning(warning)?,
            None => cliclack::log::success(format!("{} {}", node.name, version))?,
        },
        None => cliclack::log::warning("Node.js was not found on PATH")?,
    }

    for dir in packages {
        match npm_install(dir).await {
            Ok(()) => cliclack::log::success(format!("Installed dependencies in {}", dir.display()))?,
            Err(e) => cliclack::log::warning(format!(
                "{}\nRun npm install manually in {}",
                e,
                dir.display()
            ))?,
        }
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    product: &C,
    config: &Configuration,
    root: &Path,
) -> Result<()> {
    let steps = product.next_steps(config, root);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  Documentation");
    println!();

    for (label, url) in product.docs_links() {
        println!("  {label}: {url}");
    }
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}

//! Project README and the full-stack deployment guide

use super::fullstack::api_env_var;
use crate::config::{
    BackendFramework, BackendOptions, Choice, Configuration, Database, FrontendFramework,
    FrontendOptions, FullStackOptions, ProjectKind, ProjectName,
};
use crate::error::Result;
use crate::runtime::MIN_NODE_VERSION;
use crate::templates::{engine, GeneratedFile};
use minijinja::context;

/// One line per side of the project, e.g. `Backend: Express + MongoDB (JWT auth)`
pub fn stack_summary(config: &Configuration) -> Vec<String> {
    match &config.kind {
        ProjectKind::Frontend(opts) => vec![frontend_summary(opts)],
        ProjectKind::Backend(opts) => vec![backend_summary(opts)],
        ProjectKind::FullStack(opts) => {
            let mut lines = vec![frontend_summary(&opts.frontend), backend_summary(&opts.backend)];
            if opts.auto_connect {
                lines.push("Auto-connect: frontend API client wired to the backend".to_string());
            }
            lines
        }
    }
}

pub fn readme(config: &Configuration) -> Result<GeneratedFile> {
    let stack = stack_summary(config);
    let readme = engine::render(
        "shared/README.md",
        context! {
            name => config.project_name.as_str(),
            stack => stack,
            fullstack => matches!(config.kind, ProjectKind::FullStack(_)),
        },
    )?;
    Ok(GeneratedFile::text("README.md", readme))
}

pub fn deployment(name: &ProjectName, opts: &FullStackOptions) -> Result<GeneratedFile> {
    let guide = engine::render(
        "fullstack/DEPLOYMENT.md",
        context! {
            name => name.as_str(),
            package => name.identifier(),
            min_node => MIN_NODE_VERSION,
            database => opts.backend.database.label(),
            next => opts.frontend.framework == FrontendFramework::Next,
            api_env => api_env_var(opts.frontend.framework),
            database_env => database_env_var(&opts.backend),
        },
    )?;
    Ok(GeneratedFile::text("DEPLOYMENT.md", guide))
}

fn frontend_summary(opts: &FrontendOptions) -> String {
    let mut traits = vec![if opts.typescript {
        "TypeScript"
    } else {
        "JavaScript"
    }];
    if opts.tailwind {
        traits.push("Tailwind CSS");
    }
    if opts.auth_ui {
        traits.push("Auth UI");
    }
    format!("Frontend: {} ({})", opts.framework, traits.join(", "))
}

fn backend_summary(opts: &BackendOptions) -> String {
    let mut traits = Vec::new();
    if opts.easy_mongoo {
        traits.push("Easy-Mongoo");
    }
    if opts.auth {
        traits.push("JWT auth");
    }
    if opts.logger {
        traits.push("Logging");
    }
    if opts.rate_limiter {
        traits.push("Rate limiting");
    }
    if opts.swagger {
        traits.push("Swagger docs");
    }

    let mut line = format!("Backend: {} + {}", opts.framework, opts.database);
    if !traits.is_empty() {
        line.push_str(&format!(" ({})", traits.join(", ")));
    }
    line
}

/// The env key holding the database location in the generated `.env`
fn database_env_var(opts: &BackendOptions) -> &'static str {
    match (opts.database, opts.framework) {
        (Database::MongoDb, _) => "MONGODB_URI",
        (Database::MySql, BackendFramework::Express) => "MYSQL_HOST",
        (Database::MySql, BackendFramework::Fastify) => "MYSQL_URL",
        (Database::Postgres, BackendFramework::Express) => "POSTGRES_HOST",
        (Database::Postgres, BackendFramework::Fastify) => "POSTGRES_URL",
    }
}

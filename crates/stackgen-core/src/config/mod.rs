//! Resolved project configuration
//!
//! A [`Configuration`] is built once per run (from prompts or an answers
//! file, see [`Answers`]) and handed to the renderers by reference. The
//! project kind is an enum, so backend options simply do not exist on a
//! frontend-only project and vice versa.

pub mod answers;
mod name;

pub use answers::Answers;
pub use name::ProjectName;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// An enumerated answer offered by a select prompt
pub trait Choice: Copy + Eq + 'static {
    const ALL: &'static [Self];

    /// Human-readable label shown in prompts and summaries
    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Frontend,
    Backend,
    #[serde(alias = "full-stack")]
    FullStack,
}

impl Choice for ProjectType {
    const ALL: &'static [Self] = &[Self::Frontend, Self::Backend, Self::FullStack];

    fn label(self) -> &'static str {
        match self {
            ProjectType::Frontend => "Frontend",
            ProjectType::Backend => "Backend",
            ProjectType::FullStack => "Full-Stack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontendFramework {
    #[serde(alias = "react-vite")]
    React,
    #[serde(alias = "nextjs")]
    Next,
}

impl Choice for FrontendFramework {
    const ALL: &'static [Self] = &[Self::React, Self::Next];

    fn label(self) -> &'static str {
        match self {
            FrontendFramework::React => "React + Vite",
            FrontendFramework::Next => "Next.js",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendFramework {
    Express,
    Fastify,
}

impl Choice for BackendFramework {
    const ALL: &'static [Self] = &[Self::Express, Self::Fastify];

    fn label(self) -> &'static str {
        match self {
            BackendFramework::Express => "Express",
            BackendFramework::Fastify => "Fastify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    #[serde(alias = "mongo")]
    MongoDb,
    MySql,
    #[serde(alias = "postgresql")]
    Postgres,
}

impl Database {
    /// Value used inside templates
    pub fn key(self) -> &'static str {
        match self {
            Database::MongoDb => "mongodb",
            Database::MySql => "mysql",
            Database::Postgres => "postgres",
        }
    }
}

impl Choice for Database {
    const ALL: &'static [Self] = &[Self::MongoDb, Self::MySql, Self::Postgres];

    fn label(self) -> &'static str {
        match self {
            Database::MongoDb => "MongoDB",
            Database::MySql => "MySQL",
            Database::Postgres => "PostgreSQL",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(ProjectType, FrontendFramework, BackendFramework, Database);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendOptions {
    pub framework: FrontendFramework,
    pub typescript: bool,
    pub tailwind: bool,
    /// Always false for Next.js; resolved in [`Answers::resolve`]
    pub auth_ui: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOptions {
    pub framework: BackendFramework,
    pub database: Database,
    /// Always false unless the database is MongoDB; resolved in [`Answers::resolve`]
    pub easy_mongoo: bool,
    pub auth: bool,
    pub logger: bool,
    pub rate_limiter: bool,
    pub swagger: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullStackOptions {
    pub frontend: FrontendOptions,
    pub backend: BackendOptions,
    pub auto_connect: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectKind {
    Frontend(FrontendOptions),
    Backend(BackendOptions),
    FullStack(FullStackOptions),
}

/// The fully resolved set of choices for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub project_name: ProjectName,
    pub kind: ProjectKind,
    pub install_deps: bool,
}

impl Configuration {
    pub fn project_type(&self) -> ProjectType {
        match self.kind {
            ProjectKind::Frontend(_) => ProjectType::Frontend,
            ProjectKind::Backend(_) => ProjectType::Backend,
            ProjectKind::FullStack(_) => ProjectType::FullStack,
        }
    }

    /// Directories containing a `package.json` once the project is generated
    pub fn package_dirs(&self, root: &Path) -> Vec<PathBuf> {
        match self.kind {
            ProjectKind::FullStack(_) => vec![root.join("frontend"), root.join("backend")],
            _ => vec![root.to_path_buf()],
        }
    }
}

impl FullStackOptions {
    /// Derive the standalone configurations for both sides of a full-stack project
    pub fn sides(&self, name: &ProjectName, install_deps: bool) -> (Configuration, Configuration) {
        let frontend = Configuration {
            project_name: name.with_suffix("-frontend"),
            kind: ProjectKind::Frontend(self.frontend.clone()),
            install_deps,
        };
        let backend = Configuration {
            project_name: name.with_suffix("-backend"),
            kind: ProjectKind::Backend(self.backend.clone()),
            install_deps,
        };
        (frontend, backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_stack() -> Configuration {
        Answers {
            project_type: Some(ProjectType::FullStack),
            ..Default::default()
        }
        .resolve(ProjectName::parse("demo").unwrap())
    }

    #[test]
    fn test_package_dirs() {
        let root = Path::new("/tmp/demo");
        assert_eq!(
            full_stack().package_dirs(root),
            vec![root.join("frontend"), root.join("backend")]
        );

        let backend = Answers {
            project_type: Some(ProjectType::Backend),
            ..Default::default()
        }
        .resolve(ProjectName::parse("demo").unwrap());
        assert_eq!(backend.package_dirs(root), vec![root.to_path_buf()]);
    }

    #[test]
    fn test_full_stack_sides_are_suffixed() {
        let config = full_stack();
        let ProjectKind::FullStack(opts) = &config.kind else {
            panic!("expected full-stack configuration");
        };

        let (frontend, backend) = opts.sides(&config.project_name, false);
        assert_eq!(frontend.project_name.as_str(), "demo-frontend");
        assert_eq!(frontend.project_type(), ProjectType::Frontend);
        assert_eq!(backend.project_name.as_str(), "demo-backend");
        assert_eq!(backend.project_type(), ProjectType::Backend);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FrontendFramework::React.to_string(), "React + Vite");
        assert_eq!(Database::Postgres.to_string(), "PostgreSQL");
        assert_eq!(ProjectType::ALL.len(), 3);
    }
}

//! Raw answers collected from prompts or an answers file

use super::{
    BackendFramework, BackendOptions, Configuration, Database, FrontendFramework,
    FrontendOptions, FullStackOptions, ProjectKind, ProjectName, ProjectType,
};
use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied to unanswered questions
pub mod defaults {
    use super::*;

    pub const PROJECT_TYPE: ProjectType = ProjectType::Frontend;
    pub const FRONTEND_FRAMEWORK: FrontendFramework = FrontendFramework::React;
    pub const BACKEND_FRAMEWORK: BackendFramework = BackendFramework::Express;
    pub const DATABASE: Database = Database::MongoDb;
    pub const TYPESCRIPT: bool = true;
    pub const TAILWIND: bool = true;
    pub const AUTH_UI: bool = false;
    pub const EASY_MONGOO: bool = true;
    pub const AUTH: bool = true;
    pub const LOGGER: bool = true;
    pub const RATE_LIMITER: bool = true;
    pub const SWAGGER: bool = true;
    pub const AUTO_CONNECT: bool = true;
    pub const INSTALL_DEPS: bool = true;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontendAnswers {
    pub framework: Option<FrontendFramework>,
    pub typescript: Option<bool>,
    pub tailwind: Option<bool>,
    pub auth_ui: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendAnswers {
    pub framework: Option<BackendFramework>,
    pub database: Option<Database>,
    pub easy_mongoo: Option<bool>,
    pub auth: Option<bool>,
    pub logger: Option<bool>,
    pub rate_limiter: Option<bool>,
    pub swagger: Option<bool>,
}

/// Answers as collected, before defaults are applied.
///
/// Example answers file:
///
/// ```yaml
/// project_type: fullstack
/// frontend:
///   framework: react
///   tailwind: false
/// backend:
///   framework: express
///   database: postgres
/// auto_connect: true
/// install_deps: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Answers {
    pub project_type: Option<ProjectType>,
    pub frontend: FrontendAnswers,
    pub backend: BackendAnswers,
    pub auto_connect: Option<bool>,
    pub install_deps: Option<bool>,
}

impl Answers {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ScaffoldError::io(path))?;
        Self::from_yaml(&content)
    }

    /// Apply defaults and build the immutable configuration.
    ///
    /// Options that only make sense for one framework or database are
    /// cleared here so renderers can read every field as-is.
    pub fn resolve(&self, project_name: ProjectName) -> Configuration {
        let kind = match self.project_type.unwrap_or(defaults::PROJECT_TYPE) {
            ProjectType::Frontend => ProjectKind::Frontend(self.frontend.resolve()),
            ProjectType::Backend => ProjectKind::Backend(self.backend.resolve()),
            ProjectType::FullStack => ProjectKind::FullStack(FullStackOptions {
                frontend: self.frontend.resolve(),
                backend: self.backend.resolve(),
                auto_connect: self.auto_connect.unwrap_or(defaults::AUTO_CONNECT),
            }),
        };

        Configuration {
            project_name,
            kind,
            install_deps: self.install_deps.unwrap_or(defaults::INSTALL_DEPS),
        }
    }
}

impl FrontendAnswers {
    fn resolve(&self) -> FrontendOptions {
        let framework = self.framework.unwrap_or(defaults::FRONTEND_FRAMEWORK);
        FrontendOptions {
            framework,
            typescript: self.typescript.unwrap_or(defaults::TYPESCRIPT),
            tailwind: self.tailwind.unwrap_or(defaults::TAILWIND),
            auth_ui: framework == FrontendFramework::React
                && self.auth_ui.unwrap_or(defaults::AUTH_UI),
        }
    }
}

impl BackendAnswers {
    fn resolve(&self) -> BackendOptions {
        let database = self.database.unwrap_or(defaults::DATABASE);
        BackendOptions {
            framework: self.framework.unwrap_or(defaults::BACKEND_FRAMEWORK),
            database,
            easy_mongoo: database == Database::MongoDb
                && self.easy_mongoo.unwrap_or(defaults::EASY_MONGOO),
            auth: self.auth.unwrap_or(defaults::AUTH),
            logger: self.logger.unwrap_or(defaults::LOGGER),
            rate_limiter: self.rate_limiter.unwrap_or(defaults::RATE_LIMITER),
            swagger: self.swagger.unwrap_or(defaults::SWAGGER),
        }
    }
}

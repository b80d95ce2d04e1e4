//! Error types for rendering and materializing projects

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the generation core.
///
/// The CLI layer wraps these in `anyhow` and turns them into a message plus
/// exit code 1; nothing below the entry point catches them.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("Invalid answers file: {0}")]
    Answers(#[from] serde_yaml::Error),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Failed to render template {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate output path: {}", .0.display())]
    DuplicatePath(PathBuf),

    #[error("Refusing to write outside the project root: {}", .0.display())]
    UnsafePath(PathBuf),

    #[error("Wiring target not found: block '{block}' in {}", path.display())]
    WiringTargetMissing { path: PathBuf, block: &'static str },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ScaffoldError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

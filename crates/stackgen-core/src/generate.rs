//! Project generation: render in memory, then write to disk

use crate::config::Configuration;
use crate::error::Result;
use crate::render::render_project;
use crate::templates::materialize;
use std::path::{Path, PathBuf};

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// The project directory, `parent/<project name>`
    pub root: PathBuf,
    /// Every file written, as absolute paths below `root`
    pub files: Vec<PathBuf>,
    /// Directories holding a `package.json`, in install order
    pub packages: Vec<PathBuf>,
}

/// Render the project for `config` and materialize it below `parent`.
///
/// The working directory of the process is never changed. Rendering
/// completes before the first write, so template errors leave the disk
/// untouched; I/O errors part-way through are not rolled back.
pub async fn generate_project(config: &Configuration, parent: &Path) -> Result<GenerationReport> {
    let output = render_project(config)?;
    let root = parent.join(config.project_name.as_str());
    let files = materialize(&root, &output).await?;

    Ok(GenerationReport {
        packages: config.package_dirs(&root),
        root,
        files,
    })
}

//! Writing rendered template output to disk

use crate::error::{Result, ScaffoldError};
use crate::templates::output::TemplateOutput;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Write every file of `output` below `root`.
///
/// Paths are validated up front, so an unsafe path aborts before anything
/// is written. That includes symlinks already present below `root`, which
/// would otherwise redirect writes out of the project. Existing files are
/// overwritten. An I/O failure part-way through leaves the files already
/// written in place.
pub async fn materialize(root: &Path, output: &TemplateOutput) -> Result<Vec<PathBuf>> {
    for path in output.paths() {
        ensure_confined(path)?;
        reject_symlinks(root, path).await?;
    }

    // Ensure target directory exists
    fs::create_dir_all(root)
        .await
        .map_err(ScaffoldError::io(root))?;

    let mut written = Vec::with_capacity(output.len());

    for file in output.files() {
        // Ensure parent directories exist
        let target_path = root.join(&file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(ScaffoldError::io(parent))?;
        }

        let content = file.bytes()?;
        fs::write(&target_path, content.as_ref())
            .await
            .map_err(ScaffoldError::io(&target_path))?;

        written.push(target_path);
    }

    Ok(written)
}

/// Reject anything but plain relative components (`a/b/c.js`)
fn ensure_confined(path: &Path) -> Result<()> {
    let plain = path.components().next().is_some()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

    if plain {
        Ok(())
    } else {
        Err(ScaffoldError::UnsafePath(path.to_path_buf()))
    }
}

/// Fail if any existing component of `root/path` below `root` is a symlink
async fn reject_symlinks(root: &Path, path: &Path) -> Result<()> {
    let mut current = root.to_path_buf();

    for component in path.components() {
        current.push(component);
        match fs::symlink_metadata(&current).await {
            Ok(meta) if meta.file_type().is_symlink() => {
                return Err(ScaffoldError::UnsafePath(current));
            }
            Ok(_) => {}
            // Nothing deeper can exist yet
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => break,
            Err(e) => return Err(ScaffoldError::io(&current)(e)),
        }
    }

    Ok(())
}

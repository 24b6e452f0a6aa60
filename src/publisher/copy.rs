//! Directory replacement and recursive copy helpers.
use color_eyre::eyre::WrapErr;
use log::*;
use std::{fs, path::Path};
use walkdir::WalkDir;

use crate::Result;

/// Remove `dir` with everything in it if present, then create it empty.
pub fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        debug!("removing previous contents of {}", dir.display());
        fs::remove_dir_all(dir)
            .wrap_err_with(|| format!("failed to remove {}", dir.display()))?;
    }

    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create {}", dir.display()))?;

    Ok(())
}

/// Copy the tree under `source` into `destination`, creating directories as
/// needed and overwriting files that already exist.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<()> {
    let mut copied = 0usize;

    for entry in WalkDir::new(source) {
        let entry = entry.wrap_err_with(|| {
            format!(
                "failed to traverse {} while copying tree",
                source.display()
            )
        })?;

        let relative = entry.path().strip_prefix(source).wrap_err_with(|| {
            format!(
                "failed to strip prefix {} from {}",
                source.display(),
                entry.path().display()
            )
        })?;

        let target_path = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path).wrap_err_with(|| {
                format!("failed to create {}", target_path.display())
            })?;
            continue;
        }

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).wrap_err_with(|| {
                format!("failed to create {}", parent.display())
            })?;
        }

        fs::copy(entry.path(), &target_path).wrap_err_with(|| {
            format!(
                "failed to copy {} to {}",
                entry.path().display(),
                target_path.display()
            )
        })?;
        copied += 1;
    }

    debug!(
        "copied {copied} files from {} to {}",
        source.display(),
        destination.display()
    );

    Ok(())
}

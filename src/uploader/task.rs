use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    Result,
    error::TransferError,
    path_helpers::{base_name, relative_key},
};

/// A single file scheduled for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    /// Absolute path of the file on disk
    pub path: PathBuf,
    /// Path relative to the upload root, always with forward slashes
    pub relative_path: String,
    /// Base name sent as the multipart filename
    pub file_name: String,
}

impl FileTask {
    pub fn new(root: &Path, path: &Path) -> Result<Self> {
        let relative_path = relative_key(root, path)?;
        let file_name =
            base_name(path).unwrap_or_else(|| relative_path.clone());

        Ok(Self {
            path: path.to_path_buf(),
            relative_path,
            file_name,
        })
    }
}

/// Resolve the user supplied root to an absolute directory path.
pub fn resolve_root(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        let shown = std::path::absolute(dir).unwrap_or_else(|_| dir.into());
        return Err(TransferError::NotADirectory(shown).into());
    }

    Ok(dir.canonicalize().map_err(TransferError::from)?)
}

/// Every regular file under `root`, depth first with entries sorted by name
/// at each level. Symlinked directories are not descended into; a symlink
/// to a regular file is uploaded under the link's own relative path.
pub fn collect_tasks(root: &Path) -> Result<Vec<FileTask>> {
    let mut tasks = vec![];

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(TransferError::from)?;

        // `Path::is_file` follows links, unlike `DirEntry::file_type`
        if !entry.path().is_file() {
            continue;
        }

        tasks.push(FileTask::new(root, entry.path())?);
    }

    Ok(tasks)
}

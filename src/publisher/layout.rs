use std::path::{Path, PathBuf};

use crate::publisher::code::ReleaseCode;

/// Location of the release code relative to the repository root.
pub const CODE_FILE: &str = ".github/code.txt";
/// Build output directory relative to the repository root.
pub const DIST_DIR: &str = "dist";
/// Web output root relative to the repository root.
pub const WEBUI_DIR: &str = "webui";

/// Fixed filesystem layout of a repository being published.
#[derive(Debug, Clone)]
pub struct ReleaseLayout {
    repo_dir: PathBuf,
}

impl ReleaseLayout {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn code_file(&self) -> PathBuf {
        self.repo_dir.join(CODE_FILE)
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.repo_dir.join(DIST_DIR)
    }

    pub fn webui_dir(&self) -> PathBuf {
        self.repo_dir.join(WEBUI_DIR)
    }

    /// `webui/<code>`
    pub fn release_dir(&self, code: &ReleaseCode) -> PathBuf {
        self.webui_dir().join(code.as_str())
    }
}

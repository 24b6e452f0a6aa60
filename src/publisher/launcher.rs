//! Runs the directory uploader as a child process.
use color_eyre::eyre::WrapErr;
use log::*;
use std::{
    env,
    path::{Path, PathBuf},
    process::Command,
};

#[cfg(test)]
use mockall::automock;

use crate::Result;

/// Executable name of the directory uploader binary.
pub const UPLOADER_BIN: &str = "file-uploader";

/// Starts an upload of a directory tree.
#[cfg_attr(test, automock)]
pub trait UploadLauncher {
    fn launch(&self, dir: &Path) -> Result<()>;
}

/// Spawns the uploader executable with `--dir <path>` and waits for it. The
/// child shares this process's stdout and stderr.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    program: PathBuf,
}

impl ProcessLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Launcher for the uploader installed next to the running executable.
    pub fn sibling() -> Result<Self> {
        let current = env::current_exe()
            .wrap_err("failed to locate the running executable")?;
        let program = current.with_file_name(format!(
            "{UPLOADER_BIN}{}",
            env::consts::EXE_SUFFIX
        ));
        Ok(Self::new(program))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("--dir").arg(dir);
        command
    }
}

impl UploadLauncher for ProcessLauncher {
    fn launch(&self, dir: &Path) -> Result<()> {
        info!(
            "running {} --dir {}",
            self.program.display(),
            dir.display()
        );

        let status = self.command(dir).status().wrap_err_with(|| {
            format!("failed to run uploader {}", self.program.display())
        })?;

        // the uploader reports its own failures on the shared output
        if !status.success() {
            warn!("uploader exited with {status}");
        }

        Ok(())
    }
}

//! Release publishing: stage the build output under its release code and
//! hand the web output root to the directory uploader.

pub mod code;
pub mod copy;
pub mod launcher;
pub mod layout;

use log::*;

use crate::{
    Result,
    error::TransferError,
    publisher::{
        code::ReleaseCode,
        copy::{copy_tree, recreate_dir},
        launcher::UploadLauncher,
        layout::ReleaseLayout,
    },
};

pub use launcher::ProcessLauncher;

/// Copy `dist` into `webui/<code>`, replacing any previous copy, then run the
/// uploader over the whole `webui` directory. Returns the release code.
pub fn publish(
    layout: &ReleaseLayout,
    launcher: &dyn UploadLauncher,
) -> Result<ReleaseCode> {
    let dist_dir = layout.dist_dir();
    if !dist_dir.exists() {
        return Err(TransferError::missing_directory(
            dist_dir,
            "run the build command first",
        )
        .into());
    }

    let code = ReleaseCode::read(&layout.code_file())?;
    let destination = layout.release_dir(&code);

    info!("staging release {} in {}", code, destination.display());
    recreate_dir(&destination)?;
    copy_tree(&dist_dir, &destination)?;

    // uploads every release under webui, not just this one
    let upload_root = layout.webui_dir();
    launcher.launch(&upload_root)?;

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::launcher::MockUploadLauncher;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn setup_repo(code: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let repo = temp_dir.path();
        write(repo, ".github/code.txt", &format!("{code}\n"));
        write(repo, "dist/index.html", "<html>new</html>");
        write(repo, "dist/assets/app.js", "console.log('new')");
        temp_dir
    }

    #[test_log::test]
    fn publishes_into_code_directory_and_uploads_parent() {
        let temp_dir = setup_repo("abc123");
        let repo = temp_dir.path();
        write(repo, "webui/abc123/stale.js", "old");
        write(repo, "webui/abc123/index.html", "<html>old</html>");
        write(repo, "webui/old999/index.html", "<html>older</html>");

        let expected_root = repo.join("webui");
        let mut launcher = MockUploadLauncher::new();
        launcher
            .expect_launch()
            .withf(move |dir| dir.to_path_buf() == expected_root)
            .times(1)
            .returning(|_| Ok(()));

        let layout = ReleaseLayout::new(repo);
        let code = publish(&layout, &launcher).unwrap();

        assert_eq!(code.as_str(), "abc123");
        let destination = repo.join("webui/abc123");
        assert!(!destination.join("stale.js").exists());
        assert_eq!(
            fs::read_to_string(destination.join("index.html")).unwrap(),
            "<html>new</html>"
        );
        assert_eq!(
            fs::read_to_string(destination.join("assets/app.js")).unwrap(),
            "console.log('new')"
        );
        assert!(repo.join("webui/old999/index.html").exists());
    }

    #[test]
    fn missing_dist_fails_without_launching() {
        let temp_dir = setup_repo("abc123");
        fs::remove_dir_all(temp_dir.path().join("dist")).unwrap();

        let mut launcher = MockUploadLauncher::new();
        launcher.expect_launch().never();

        let layout = ReleaseLayout::new(temp_dir.path());
        let err = publish(&layout, &launcher).unwrap_err();
        let err = err.downcast::<TransferError>().unwrap();

        assert!(matches!(err, TransferError::MissingDirectory { .. }));
        assert!(!temp_dir.path().join("webui").exists());
    }

    #[test]
    fn launcher_failure_is_propagated() {
        let temp_dir = setup_repo("abc123");

        let mut launcher = MockUploadLauncher::new();
        launcher.expect_launch().returning(|_| {
            Err(TransferError::invalid_config("uploader not found").into())
        });

        let layout = ReleaseLayout::new(temp_dir.path());
        assert!(publish(&layout, &launcher).is_err());
        assert!(temp_dir.path().join("webui/abc123/index.html").exists());
    }
}

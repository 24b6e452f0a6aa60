use std::path::Path;

use crate::{Result, error::TransferError};

/// Path of `file` relative to `root`, rendered with forward slashes. This is
/// the storage key the upload server uses to place the file.
pub fn relative_key(root: &Path, file: &Path) -> Result<String> {
    let relative = file.strip_prefix(root).map_err(|_| {
        TransferError::invalid_args(format!(
            "{} is not inside {}",
            file.display(),
            root.display()
        ))
    })?;

    if relative.as_os_str().is_empty() {
        return Err(TransferError::invalid_args(format!(
            "{} has no path relative to itself",
            root.display()
        ))
        .into());
    }

    let parts: Vec<_> = relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect();

    Ok(parts.join("/"))
}

/// Final path component as a string, used for multipart filenames and asset
/// names.
pub fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_key_strips_root() {
        let root = Path::new("/srv/webui");
        let file = Path::new("/srv/webui/abc123/assets/index.js");
        let key = relative_key(root, file).unwrap();
        assert_eq!(key, "abc123/assets/index.js");
    }

    #[test]
    fn relative_key_for_top_level_file() {
        let root = Path::new("/srv/webui");
        let file = Path::new("/srv/webui/index.html");
        assert_eq!(relative_key(root, file).unwrap(), "index.html");
    }

    #[test]
    fn relative_key_rejects_paths_outside_root() {
        let root = Path::new("/srv/webui");
        let file = Path::new("/srv/other/index.html");
        assert!(relative_key(root, file).is_err());
    }

    #[test]
    fn relative_key_rejects_root_itself() {
        let root = Path::new("/srv/webui");
        assert!(relative_key(root, root).is_err());
    }

    #[test]
    fn base_name_returns_last_component() {
        let path = Path::new("target/release/build.zip");
        assert_eq!(base_name(path).as_deref(), Some("build.zip"));
        assert_eq!(base_name(Path::new("/")), None);
    }
}

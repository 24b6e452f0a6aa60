use std::{fmt, fs, path::Path};

use color_eyre::eyre::WrapErr;

use crate::{Result, error::TransferError};

/// Short opaque token naming a release's output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCode(String);

impl ReleaseCode {
    /// Read the code from `path`, trimming surrounding whitespace.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TransferError::InvalidReleaseCode(format!(
                "code file not found at {}",
                path.display()
            ))
            .into());
        }

        let content = fs::read_to_string(path).wrap_err_with(|| {
            format!("failed to read release code from {}", path.display())
        })?;

        Self::parse(&content)
    }

    /// Validate raw text. The code must be non-empty and usable as a single
    /// directory name.
    pub fn parse(raw: &str) -> Result<Self> {
        let code = raw.trim();

        if code.is_empty() {
            return Err(
                TransferError::InvalidReleaseCode("code is empty".into()).into()
            );
        }

        if code == "." || code == ".." || code.contains(['/', '\\']) {
            return Err(TransferError::InvalidReleaseCode(format!(
                "'{code}' is not a valid directory name"
            ))
            .into());
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_and_trims_code_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("code.txt");
        fs::write(&path, "  abc123\n").unwrap();

        let code = ReleaseCode::read(&path).unwrap();
        assert_eq!(code.as_str(), "abc123");
        assert_eq!(code.to_string(), "abc123");
    }

    #[test]
    fn missing_code_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = ReleaseCode::read(&temp_dir.path().join("code.txt"))
            .unwrap_err()
            .downcast::<TransferError>()
            .unwrap();

        assert!(matches!(err, TransferError::InvalidReleaseCode(_)));
    }

    #[test]
    fn rejects_blank_code() {
        assert!(ReleaseCode::parse(" \n").is_err());
    }

    #[test]
    fn rejects_codes_that_escape_webui() {
        assert!(ReleaseCode::parse("..").is_err());
        assert!(ReleaseCode::parse(".").is_err());
        assert!(ReleaseCode::parse("../dist").is_err());
        assert!(ReleaseCode::parse("a\\b").is_err());
    }
}

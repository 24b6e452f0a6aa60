//! Error types for the transfer tools.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for upload, publish and release asset operations.
#[derive(Error, Debug)]
pub enum TransferError {
    // Configuration errors
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Precondition errors
    #[error("Path '{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Directory '{}' does not exist: {hint}", .path.display())]
    MissingDirectory { path: PathBuf, hint: String },

    #[error("Asset file not found at: {}", .0.display())]
    AssetNotFound(PathBuf),

    #[error("Invalid release code: {0}")]
    InvalidReleaseCode(String),

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    // Wrapped library errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

impl TransferError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a missing directory error with a hint for the user
    pub fn missing_directory(
        path: impl Into<PathBuf>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingDirectory {
            path: path.into(),
            hint: hint.into(),
        }
    }
}

// Implement From for reqwest errors (network/API)
impl From<reqwest::Error> for TransferError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::NetworkError(format!("request timed out: {err}"))
        } else if err.is_status()
            && let Some(status) = err.status()
        {
            Self::UnexpectedStatus {
                status,
                body: err.to_string(),
            }
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}

// Implement From for reqwest header errors (needs custom message)
impl From<reqwest::header::InvalidHeaderValue> for TransferError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::InvalidConfig(format!("Invalid header value: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = TransferError::invalid_config("SERVER is not a url");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: SERVER is not a url"
        );

        let err = TransferError::MissingEnv("KEY".into());
        assert_eq!(err.to_string(), "Missing environment variable: KEY");

        let err = TransferError::AssetNotFound(PathBuf::from("build.zip"));
        assert_eq!(err.to_string(), "Asset file not found at: build.zip");
    }

    #[test]
    fn test_missing_directory_includes_hint() {
        let err = TransferError::missing_directory(
            "repo/dist",
            "run the build first",
        );
        assert!(matches!(err, TransferError::MissingDirectory { .. }));
        assert_eq!(
            err.to_string(),
            "Directory 'repo/dist' does not exist: run the build first"
        );
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = TransferError::UnexpectedStatus {
            status: StatusCode::FORBIDDEN,
            body: "bad key".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response status 403 Forbidden: bad key"
        );
    }

    #[test]
    fn test_from_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("{");
        assert!(json_err.is_err());
        let err: TransferError = json_err.unwrap_err().into();
        assert!(matches!(err, TransferError::JsonParseError(_)));

        let io_err = std::io::Error::other("boom");
        let err: TransferError = io_err.into();
        assert!(matches!(err, TransferError::Io(_)));
    }
}

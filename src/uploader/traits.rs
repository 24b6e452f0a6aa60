//! Seam between upload sequencing and the transport that moves the bytes
use async_trait::async_trait;
use reqwest::StatusCode;

#[cfg(test)]
use mockall::automock;

use crate::{Result, uploader::task::FileTask};

/// Result of a single upload that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The server answered 200.
    Uploaded,
    /// The server answered with any other status.
    Rejected { status: StatusCode, body: String },
}

/// Destination for file uploads. Errors are transport failures (connection,
/// timeout, protocol, unreadable file).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileSink: Send + Sync {
    async fn upload(&self, task: &FileTask) -> Result<UploadOutcome>;
}

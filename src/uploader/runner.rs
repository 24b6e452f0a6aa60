//! Sequential upload of a directory tree with stop-on-first-failure.
use log::*;
use std::path::Path;

use crate::{
    Result,
    uploader::{
        task::{FileTask, collect_tasks, resolve_root},
        traits::{FileSink, UploadOutcome},
    },
};

/// The upload that ended the run early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedUpload {
    /// 1-based position in the queue
    pub index: usize,
    pub relative_path: String,
    pub reason: String,
}

/// Outcome of a directory upload run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub total: usize,
    pub uploaded: usize,
    pub failed: Option<FailedUpload>,
}

impl UploadSummary {
    /// True when every queued file made it, including the empty queue.
    pub fn completed(&self) -> bool {
        self.failed.is_none() && self.uploaded == self.total
    }
}

/// Validate `dir`, walk it and upload every file through `sink`.
pub async fn upload_directory(
    sink: &dyn FileSink,
    dir: &Path,
) -> Result<UploadSummary> {
    let root = resolve_root(dir)?;
    let tasks = collect_tasks(&root)?;

    if tasks.is_empty() {
        info!("no files found to upload in '{}'", root.display());
        return Ok(UploadSummary::default());
    }

    info!("uploading {} files from '{}'", tasks.len(), root.display());

    Ok(upload_all(sink, &tasks).await)
}

/// Upload `tasks` in order, one request at a time. The first failure
/// abandons the remaining queue.
pub async fn upload_all(
    sink: &dyn FileSink,
    tasks: &[FileTask],
) -> UploadSummary {
    let total = tasks.len();
    let mut summary = UploadSummary {
        total,
        ..Default::default()
    };

    for (idx, task) in tasks.iter().enumerate() {
        let index = idx + 1;
        let prefix = format!("[{index}/{total}]");

        let reason = match sink.upload(task).await {
            Ok(UploadOutcome::Uploaded) => {
                info!("{prefix} uploaded: {}", task.relative_path);
                summary.uploaded += 1;
                continue;
            }
            Ok(UploadOutcome::Rejected { status, body }) => {
                error!(
                    "{prefix} upload failed: {}, status: {}, reason: {}",
                    task.relative_path,
                    status.as_u16(),
                    body
                );
                format!("status {}: {}", status.as_u16(), body)
            }
            Err(err) => {
                error!(
                    "{prefix} network error while uploading: {}, error: \
                     {err:#}",
                    task.relative_path
                );
                format!("{err:#}")
            }
        };

        summary.failed = Some(FailedUpload {
            index,
            relative_path: task.relative_path.clone(),
            reason,
        });
        warn!("stopped remaining uploads after a failure");
        return summary;
    }

    info!("all uploads completed");
    summary
}

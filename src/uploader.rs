//! Recursive directory uploader.
//!
//! Walks a root directory, turns every regular file into a [`task::FileTask`]
//! and pushes them one at a time to the configured upload server. The first
//! failed upload abandons the rest of the queue.

pub mod config;
pub mod http;
pub mod runner;
pub mod task;
pub mod traits;

pub use config::UploadTarget;
pub use http::HttpFileSink;
pub use runner::{FailedUpload, UploadSummary, upload_directory};

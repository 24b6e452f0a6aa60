//! Multipart upload client for the file server.
use async_trait::async_trait;
use log::*;
use reqwest::{
    Body, Client, Request, StatusCode,
    header::{HeaderMap, HeaderValue},
    multipart::{Form, Part},
};
use secrecy::ExposeSecret;

use crate::{
    Result,
    error::TransferError,
    uploader::{
        config::UploadTarget,
        task::FileTask,
        traits::{FileSink, UploadOutcome},
    },
};

/// Multipart form field carrying the file bytes.
pub const FILE_FIELD: &str = "file";
/// Header carrying the upload secret.
pub const KEY_HEADER: &str = "key";
/// Query parameter carrying the relative path.
pub const PATH_PARAM: &str = "path";

const OCTET_STREAM: &str = "application/octet-stream";

/// Posts files to the upload server with reqwest, one request per file.
/// Uses the client's default timeouts.
pub struct HttpFileSink {
    target: UploadTarget,
    client: Client,
}

impl HttpFileSink {
    pub fn new(target: UploadTarget) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut key_value = HeaderValue::from_str(target.key.expose_secret())
            .map_err(TransferError::from)?;
        key_value.set_sensitive(true);

        headers.append(KEY_HEADER, key_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(TransferError::from)?;

        Ok(Self { target, client })
    }

    fn build_request(
        &self,
        relative_path: &str,
        form: Form,
    ) -> Result<Request> {
        let request = self
            .client
            .post(self.target.server.clone())
            .query(&[(PATH_PARAM, relative_path)])
            .multipart(form)
            .build()
            .map_err(TransferError::from)?;

        Ok(request)
    }

    async fn file_form(task: &FileTask) -> Result<Form> {
        let file = tokio::fs::File::open(&task.path)
            .await
            .map_err(TransferError::from)?;
        let length = file.metadata().await.map_err(TransferError::from)?.len();

        let part = Part::stream_with_length(Body::from(file), length)
            .file_name(task.file_name.clone())
            .mime_str(OCTET_STREAM)
            .map_err(TransferError::from)?;

        Ok(Form::new().part(FILE_FIELD, part))
    }
}

#[async_trait]
impl FileSink for HttpFileSink {
    async fn upload(&self, task: &FileTask) -> Result<UploadOutcome> {
        debug!("uploading {} as {}", task.path.display(), task.relative_path);

        // the form owns the open file; it is dropped with the request
        let form = Self::file_form(task).await?;
        let request = self.build_request(&task.relative_path, form)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(TransferError::from)?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(UploadOutcome::Uploaded);
        }

        // keep the status even when the body cannot be read
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!("failed to read response body: {err}");
                String::new()
            }
        };

        Ok(UploadOutcome::Rejected { status, body })
    }
}

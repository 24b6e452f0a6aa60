//! Streams release assets to a GitHub upload endpoint.
use async_trait::async_trait;
use log::*;
use reqwest::{
    Body, Client, Request,
    header::{
        ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap,
        HeaderValue,
    },
};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

#[cfg(test)]
use mockall::automock;

use crate::{
    Result,
    error::TransferError,
    release_asset::{request::AssetTarget, types::ReleaseAssetResponse},
};

/// Upper bound for a single asset upload.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const OCTET_STREAM: &str = "application/octet-stream";

/// Uploads one validated asset. Any non-2xx response is an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssetClient: Send + Sync {
    async fn upload(
        &self,
        target: &AssetTarget,
    ) -> Result<ReleaseAssetResponse>;
}

/// reqwest client sending `Authorization: token <token>` with every upload.
pub struct GithubAssetClient {
    client: Client,
    headers: HeaderMap,
}

impl GithubAssetClient {
    pub fn new(token: &SecretString, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut token_value = HeaderValue::from_str(
            format!("token {}", token.expose_secret()).as_str(),
        )
        .map_err(TransferError::from)?;
        token_value.set_sensitive(true);

        headers.append(AUTHORIZATION, token_value);
        headers.append(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.append(CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransferError::from)?;

        Ok(Self { client, headers })
    }

    fn build_request(
        &self,
        url: Url,
        body: Body,
        length: u64,
    ) -> Result<Request> {
        let request = self
            .client
            .post(url)
            .headers(self.headers.clone())
            .header(CONTENT_LENGTH, length)
            .body(body)
            .build()
            .map_err(TransferError::from)?;

        Ok(request)
    }
}

#[async_trait]
impl AssetClient for GithubAssetClient {
    async fn upload(
        &self,
        target: &AssetTarget,
    ) -> Result<ReleaseAssetResponse> {
        let file = tokio::fs::File::open(&target.path)
            .await
            .map_err(TransferError::from)?;
        let length = file.metadata().await.map_err(TransferError::from)?.len();
        debug!("streaming {} bytes from {}", length, target.path.display());

        let request =
            self.build_request(target.url.clone(), Body::from(file), length)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(TransferError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransferError::UnexpectedStatus { status, body }.into());
        }

        let bytes = response.bytes().await.map_err(TransferError::from)?;
        let asset = serde_json::from_slice::<ReleaseAssetResponse>(&bytes)
            .map_err(TransferError::from)?;

        Ok(asset)
    }
}

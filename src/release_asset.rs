//! GitHub release asset upload.

pub mod client;
pub mod request;
pub mod types;

use log::*;
use std::time::Duration;

use crate::{
    Result,
    release_asset::{
        client::AssetClient,
        request::{AssetTarget, AssetUpload},
        types::ReleaseAssetResponse,
    },
};

pub use client::{DEFAULT_TIMEOUT_SECS, GithubAssetClient};

/// Validate `asset`, then build a GitHub client and upload it. Validation
/// failures are reported before the client exists.
pub async fn upload_asset(
    asset: &AssetUpload,
    timeout: Duration,
) -> Result<ReleaseAssetResponse> {
    let target = asset.validate()?;
    let client = GithubAssetClient::new(&asset.token, timeout)?;

    send_asset(&target, &client).await
}

/// Upload an already validated asset through `client`.
pub async fn send_asset(
    target: &AssetTarget,
    client: &dyn AssetClient,
) -> Result<ReleaseAssetResponse> {
    info!("uploading {} to {}...", target.name, target.url);
    let response = client.upload(target).await?;
    info!("successfully uploaded {}", target.name);

    Ok(response)
}

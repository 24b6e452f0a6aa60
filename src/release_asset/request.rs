use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use url::Url;

use crate::{Result, error::TransferError, path_helpers::base_name};

/// Raw inputs for a release asset upload, as given on the command line or
/// in the environment.
#[derive(Debug, Clone)]
pub struct AssetUpload {
    pub token: SecretString,
    pub upload_url: String,
    pub asset_path: PathBuf,
}

/// Validated upload: the file exists and the url is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTarget {
    pub url: Url,
    pub name: String,
    pub path: PathBuf,
}

impl AssetUpload {
    pub fn new(
        token: impl Into<String>,
        upload_url: impl Into<String>,
        asset_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            token: SecretString::from(token.into()),
            upload_url: upload_url.into(),
            asset_path: asset_path.into(),
        }
    }

    /// Check the inputs and resolve the final upload url. Does not touch the
    /// network.
    pub fn validate(&self) -> Result<AssetTarget> {
        if self.token.expose_secret().is_empty()
            || self.upload_url.is_empty()
            || self.asset_path.as_os_str().is_empty()
        {
            return Err(TransferError::invalid_args(
                "missing GITHUB_TOKEN, UPLOAD_URL, or ASSET_PATH",
            )
            .into());
        }

        if !self.asset_path.is_file() {
            return Err(
                TransferError::AssetNotFound(self.asset_path.clone()).into()
            );
        }

        let name = base_name(&self.asset_path).ok_or_else(|| {
            TransferError::AssetNotFound(self.asset_path.clone())
        })?;

        let url = asset_upload_url(&self.upload_url, &name)?;

        Ok(AssetTarget {
            url,
            name,
            path: self.asset_path.clone(),
        })
    }
}

/// Strip the `{?name,label}` style template from a release upload url and
/// add the asset name as the `name` query parameter.
pub fn asset_upload_url(template: &str, name: &str) -> Result<Url> {
    let base = template.split('{').next().unwrap_or_default();

    let mut url = Url::parse(base).map_err(|err| {
        TransferError::invalid_args(format!(
            "invalid upload url ({template}): {err}"
        ))
    })?;

    url.query_pairs_mut().append_pair("name", name);

    Ok(url)
}

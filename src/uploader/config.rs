//! Upload server configuration read from the process environment.
use secrecy::SecretString;
use std::env;
use url::Url;

use crate::{Result, error::TransferError};

/// Environment variable holding the secret sent in the `key` header.
pub const KEY_ENV_VAR: &str = "KEY";
/// Environment variable holding the full upload endpoint URL.
pub const SERVER_ENV_VAR: &str = "SERVER";

/// Remote endpoint every file is posted to, fixed at process start.
#[derive(Debug, Clone)]
pub struct UploadTarget {
    /// Full upload endpoint URL.
    pub server: Url,
    /// Secret key sent with every request.
    pub key: SecretString,
}

impl UploadTarget {
    /// Load the target from `KEY` and `SERVER`.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            env::var(KEY_ENV_VAR).ok(),
            env::var(SERVER_ENV_VAR).ok(),
        )
    }

    /// Build the target from raw values, treating empty strings as unset.
    pub fn from_values(
        key: Option<String>,
        server: Option<String>,
    ) -> Result<Self> {
        let key = key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| TransferError::MissingEnv(KEY_ENV_VAR.into()))?;

        let server = server
            .filter(|s| !s.is_empty())
            .ok_or_else(|| TransferError::MissingEnv(SERVER_ENV_VAR.into()))?;

        let server = Url::parse(&server).map_err(|err| {
            TransferError::invalid_config(format!(
                "{SERVER_ENV_VAR} is not a valid url ({server}): {err}"
            ))
        })?;

        Ok(Self {
            server,
            key: SecretString::from(key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn builds_target_from_values() {
        let target = UploadTarget::from_values(
            Some("secret".into()),
            Some("https://files.example.com/upload".into()),
        )
        .unwrap();

        assert_eq!(target.server.as_str(), "https://files.example.com/upload");
        assert_eq!(target.key.expose_secret(), "secret");
    }

    #[test]
    fn missing_key_is_reported() {
        let err = UploadTarget::from_values(
            None,
            Some("https://files.example.com/upload".into()),
        )
        .unwrap_err();

        let err = err.downcast::<TransferError>().unwrap();
        assert!(
            matches!(err, TransferError::MissingEnv(ref name) if name == "KEY")
        );
    }

    #[test]
    fn empty_server_is_treated_as_missing() {
        let err =
            UploadTarget::from_values(Some("secret".into()), Some("".into()))
                .unwrap_err();

        let err = err.downcast::<TransferError>().unwrap();
        assert!(matches!(
            err,
            TransferError::MissingEnv(ref name) if name == "SERVER"
        ));
    }

    #[test]
    fn malformed_server_is_invalid_config() {
        let err = UploadTarget::from_values(
            Some("secret".into()),
            Some("files.example.com/upload".into()),
        )
        .unwrap_err();

        let err = err.downcast::<TransferError>().unwrap();
        assert!(matches!(err, TransferError::InvalidConfig(_)));
    }
}

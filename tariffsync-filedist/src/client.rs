//! HTTP access to the distribution server.

use crate::error::{FiledistError, FiledistResult};
use crate::keyring::PublicKeyring;
use crate::listing::{FileRef, extract_signed_refs};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// A named feed of export files, e.g. full snapshots (`tot`) or deltas (`dif`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionCategory {
    pub name: String,
    /// Listing page URL; file references are resolved against it.
    pub url: String,
}

impl DistributionCategory {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Thin wrapper over a [`reqwest::Client`] for the distribution endpoints.
#[derive(Clone)]
pub struct DistributionClient {
    client: Client,
}

impl DistributionClient {
    /// Builds a client whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> FiledistResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FiledistError::Client)?;
        Ok(Self { client })
    }

    /// Retrieves a resource, failing on any non-success status.
    pub async fn get_bytes(&self, url: &str) -> FiledistResult<Vec<u8>> {
        let transport = |source| FiledistError::Transport {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FiledistError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(transport)?;
        debug!(url, bytes = body.len(), "retrieved");
        Ok(body.to_vec())
    }

    /// Fetches and imports the authority's public signing key.
    pub async fn fetch_public_key(&self, url: &str) -> FiledistResult<PublicKeyring> {
        let body = self.get_bytes(url).await?;
        let armored = String::from_utf8(body)
            .map_err(|e| FiledistError::Armor(format!("key block is not UTF-8: {e}")))?;
        let keyring = PublicKeyring::from_armored(&armored)?;
        info!(url, key_id = %keyring.key_id(), "imported public key");
        Ok(keyring)
    }

    /// Lists the signed files a category currently offers, in page order.
    pub async fn discover(
        &self,
        category: &DistributionCategory,
        signed_extension: &str,
    ) -> FiledistResult<Vec<FileRef>> {
        let markup = self.get_bytes(&category.url).await?;
        let refs = extract_signed_refs(&markup, signed_extension)
            .into_iter()
            .map(|href| FileRef::resolve(&category.url, &href))
            .collect::<FiledistResult<Vec<_>>>()?;
        debug!(category = %category.name, files = refs.len(), "listing parsed");
        Ok(refs)
    }

    /// Retrieves one listed file's raw, still armored bytes.
    pub async fn fetch_file(&self, file: &FileRef) -> FiledistResult<Vec<u8>> {
        self.get_bytes(&file.url).await
    }
}

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::config::RemoteConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait ImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches images over HTTP with a fixed timeout and a browser user agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(remote: &RemoteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(remote.timeout_secs))
            .user_agent(remote.user_agent.as_str())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(HttpFetcher { client })
    }
}

impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Downloads `url` and writes the body verbatim to `target`.
pub async fn download_image<F: ImageFetcher>(
    fetcher: &F,
    url: &str,
    target: &Path,
) -> Result<(), FetchError> {
    let bytes = fetcher.fetch(url).await?;

    tokio::fs::write(target, &bytes)
        .await
        .map_err(|source| FetchError::Write {
            path: target.to_path_buf(),
            source,
        })
}

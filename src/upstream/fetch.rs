//! Texture image downloads.

use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::error::UpstreamError;

/// Downloads the image a texture URL points at.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Result<Bytes, UpstreamError>;
}

/// Fetches images over HTTP with the shared client.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch_image(&self, url: &str) -> Result<Bytes, UpstreamError> {
        debug!("Fetching texture image {}", url);

        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes)
    }
}

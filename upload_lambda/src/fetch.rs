use async_trait::async_trait;
use reqwest::Client;

use crate::error::FetchError;

pub(crate) const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

#[async_trait]
pub(crate) trait ImageFetcher {
    /// Downloads the resource at `url` and returns its whole body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches over HTTP with a client shared across invocations.
pub(crate) struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

use url::Url;

use crate::error::Result;

/// The internal HTTP client is already wrapped in `Arc`, so the downloader is cheap to clone.
#[derive(Debug, Clone)]
pub struct Downloader(reqwest::Client);

impl Downloader {
    pub fn new() -> Result<Self> {
        let client = reqwest::ClientBuilder::new().build()?;
        Ok(Self(client))
    }

    /// Fetch the body of `url`. Any non-success status is an error.
    pub async fn download(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self.0.get(url.as_str()).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

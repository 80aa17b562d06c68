use std::time::Duration;

use anyhow::Context as _;

use crate::domain::repository::ReferenceImageFetcher;
use crate::domain::types::FetchedImage;
use crate::error::DesignsServiceError;

/// Fetches catalog picture URLs over HTTP. Failures here are recoverable —
/// the pipeline logs and skips the image rather than aborting.
#[derive(Clone)]
pub struct HttpReferenceImageFetcher {
    pub http: reqwest::Client,
    pub timeout: Duration,
}

impl ReferenceImageFetcher for HttpReferenceImageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, DesignsServiceError> {
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("fetch reference image {url}"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("reference image {url} returned error status"))?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_owned();
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("read reference image body {url}"))?;
        Ok(FetchedImage {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

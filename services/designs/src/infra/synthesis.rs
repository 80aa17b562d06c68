use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::domain::repository::SynthesisClient;
use crate::domain::types::ImagePart;
use crate::error::DesignsServiceError;

/// One composite per run, at the resolution the synthesis model accepts.
const OUTPUT_COUNT: u8 = 1;
const OUTPUT_SIZE: &str = "1024x1024";

/// Client for the external image-edits API. Submits one multi-part request
/// per run; no retries. Every failure mode — transport error, non-2xx,
/// undecodable body, missing image payload — collapses into
/// [`DesignsServiceError::SynthesisFailed`] so callers see one error shape.
#[derive(Clone)]
pub struct HttpSynthesisClient {
    pub http: reqwest::Client,
    pub url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct SynthesisResponse {
    #[serde(default)]
    data: Vec<SynthesisImage>,
}

#[derive(Debug, Deserialize)]
struct SynthesisImage {
    b64_json: Option<String>,
}

fn synthesis_failure(e: impl Into<anyhow::Error>, context: &'static str) -> DesignsServiceError {
    DesignsServiceError::SynthesisFailed(e.into().context(context))
}

impl SynthesisClient for HttpSynthesisClient {
    async fn synthesize(
        &self,
        prompt: &str,
        images: &[ImagePart],
    ) -> Result<Vec<u8>, DesignsServiceError> {
        let mut form = Form::new()
            .text("prompt", prompt.to_owned())
            .text("n", OUTPUT_COUNT.to_string())
            .text("size", OUTPUT_SIZE)
            .text("model", self.model.clone());
        for (index, image) in images.iter().enumerate() {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)
                .map_err(|e| synthesis_failure(e, "invalid image content type"))?;
            form = form.part(format!("image[{index}]"), part);
        }

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| synthesis_failure(e, "synthesis request failed"))?;
        let response = response
            .error_for_status()
            .map_err(|e| synthesis_failure(e, "synthesis endpoint returned error status"))?;
        let body: SynthesisResponse = response
            .json()
            .await
            .map_err(|e| synthesis_failure(e, "synthesis response was not valid JSON"))?;

        let encoded = body
            .data
            .into_iter()
            .next()
            .and_then(|image| image.b64_json)
            .ok_or_else(|| {
                DesignsServiceError::SynthesisFailed(anyhow::anyhow!(
                    "synthesis response contained no image payload"
                ))
            })?;
        BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| synthesis_failure(e, "synthesis payload is not valid base64"))
    }
}

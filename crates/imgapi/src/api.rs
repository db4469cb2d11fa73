use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};

use crate::data_url::{format_data_url, parse_image_data, InlineImage};
use crate::models::GeminiResponse;

pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable holding the API credential, read on every call.
pub const API_KEY_ENV: &str = "API_KEY";

/// MIME type reported for generated parts that omit one.
const GENERATED_MIME_FALLBACK: &str = "image/png";

const RECREATE_FRAMING: &str =
    "Following the user's instructions, re-create this food photograph. Instructions:";

pub struct GeminiImageClient {
    endpoint: String,
    model: String,
    http: Client,
}

impl Default for GeminiImageClient {
    fn default() -> Self {
        Self::new(DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL)
    }
}

impl GeminiImageClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            http: Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Dispatches exactly one generateContent request carrying the selected
    /// image plus the framed instruction text, and returns the first returned
    /// image part as a data URL. No retry, no caching, no client timeout.
    ///
    /// Input validation and the credential lookup both happen before any
    /// network I/O.
    pub async fn recreate(&self, prompt: &str, image: &str) -> Result<String> {
        let inline = parse_image_data(image)?;

        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| anyhow::anyhow!("{API_KEY_ENV} environment variable not set."))?;

        let url = format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );
        let body = build_recreate_body(prompt, &inline);

        let response_text = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("HTTP request failed")?
            .error_for_status()
            .context("Non-success status returned")?
            .text()
            .await
            .context("Reading response body failed")?;

        let response: GeminiResponse = serde_json::from_str(&response_text).with_context(|| {
            format!(
                "Failed to decode Gemini response JSON. Raw response: {}",
                response_text
            )
        })?;

        first_image_data_url(&response)
            .ok_or_else(|| anyhow::anyhow!("No image was generated in the response for re-creation."))
    }
}

/// Request body: one image part, one text part wrapping the caller's prompt,
/// image-only response modality.
pub fn build_recreate_body(prompt: &str, image: &InlineImage) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                {
                    "inlineData": {
                        "mimeType": image.mime_type,
                        "data": image.data
                    }
                },
                { "text": format!("{RECREATE_FRAMING} {prompt}") }
            ]
        }],
        "generationConfig": {
            "responseModalities": ["IMAGE"]
        }
    })
}

/// Scans response parts in order and re-encodes the first image-bearing one
/// as a data URL suitable for direct display.
pub fn first_image_data_url(response: &GeminiResponse) -> Option<String> {
    for candidate in &response.candidates {
        for part in &candidate.content.parts {
            if let Some(inline_data) = &part.inline_data {
                let data = inline_data.data.trim();
                if data.is_empty() {
                    continue;
                }

                let mime_type = inline_data.mime_type.trim();
                let mime_type = if mime_type.is_empty() {
                    GENERATED_MIME_FALLBACK
                } else {
                    mime_type
                };

                return Some(format_data_url(mime_type, data));
            }
        }
    }

    None
}

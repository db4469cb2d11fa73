use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine as _;

/// MIME type assumed for bare base64 payloads that arrive without a data URL
/// wrapper. Lossy by nature; kept as a documented heuristic.
pub const FALLBACK_MIME: &str = "image/jpeg";

const SUPPORTED_MIMES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// A MIME type declaration plus base64 payload, split out of an inline image
/// data string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn to_data_url(&self) -> String {
        format_data_url(&self.mime_type, &self.data)
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        BASE64_ENGINE
            .decode(self.data.trim())
            .context("Base64 decoding failed")
    }
}

pub fn format_data_url(mime_type: &str, data_b64: &str) -> String {
    format!("data:{mime_type};base64,{data_b64}")
}

pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format_data_url(mime_type, &BASE64_ENGINE.encode(bytes))
}

/// Splits an inline image data string into MIME type and payload.
///
/// Accepts a data URL declaring a JPEG, PNG or WEBP payload, or a bare base64
/// string (assumed JPEG). Anything else is an input error; callers are
/// expected to reject the value before any request is built from it.
pub fn parse_image_data(value: &str) -> Result<InlineImage> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        bail!("Image payload is empty.");
    }

    if let Some(rest) = trimmed.strip_prefix("data:") {
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| anyhow::anyhow!("Invalid base64 image string format"))?;

        let mime_type = mime_type.trim();
        if !SUPPORTED_MIMES.contains(&mime_type) {
            bail!("Unsupported image MIME type '{mime_type}'; expected JPEG, PNG or WEBP");
        }

        let payload = payload.trim();
        if payload.is_empty() {
            bail!("Image payload is empty.");
        }
        BASE64_ENGINE
            .decode(payload)
            .map_err(|_| anyhow::anyhow!("Invalid base64 image string format"))?;

        return Ok(InlineImage {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        });
    }

    // Bare base64 payload without a wrapper: accepted, MIME assumed JPEG.
    if BASE64_ENGINE.decode(trimmed).is_ok() {
        return Ok(InlineImage {
            mime_type: FALLBACK_MIME.to_string(),
            data: trimmed.to_string(),
        });
    }

    bail!("Invalid base64 image string format")
}

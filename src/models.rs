use serde::{Deserialize, Serialize};

/// One uploaded photo: its inline data URL plus the original file name. The
/// upload sequence is append-only apart from explicit removal, and duplicate
/// entries are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub data: String,
    pub name: String,
}

/// Outcome of a successful generation: the returned image as a data URL and
/// the exact prompt that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecreatedPhoto {
    pub image: String,
    pub prompt: String,
}

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tokio::task::JoinSet;
use tracing::warn;

use crate::models::UploadedImage;

/// Upload formats accepted at the file boundary.
const ACCEPTED_MIMES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Reads a batch of files concurrently and returns the ones that decoded.
///
/// One task per file, joined before anything is returned, so the caller can
/// append the whole batch in a single step. A file that fails to read or is
/// not an accepted image format is skipped and never aborts the rest. The
/// returned order follows task completion; no ordering is guaranteed within a
/// batch.
pub async fn load_batch(paths: &[PathBuf]) -> Vec<UploadedImage> {
    let mut tasks = JoinSet::new();
    for path in paths {
        let path = path.clone();
        tasks.spawn(async move { load_one(&path).await });
    }

    let mut batch = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(image)) => batch.push(image),
            Ok(Err(err)) => warn!("skipping upload: {err:#}"),
            Err(err) => warn!("upload task failed: {err}"),
        }
    }
    batch
}

async fn load_one(path: &Path) -> Result<UploadedImage> {
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream");
    if !ACCEPTED_MIMES.contains(&mime_type) {
        bail!("'{}' is not a PNG, JPEG or WEBP image", path.display());
    }

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Unable to read file '{}'", path.display()))?;

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    Ok(UploadedImage {
        data: imgapi::encode_data_url(mime_type, &bytes),
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join("foodshot-ingest-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        assert!(load_batch(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn failures_are_skipped_and_successes_survive() {
        let paths = vec![
            temp_file("plate.png", b"png-bytes"),
            temp_file("soup.jpg", b"jpg-bytes"),
            temp_file("notes.txt", b"not an image"),
            PathBuf::from("/definitely/missing/photo.png"),
        ];

        let batch = load_batch(&paths).await;
        assert_eq!(batch.len(), 2);

        let mut names: Vec<&str> = batch.iter().map(|image| image.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["plate.png", "soup.jpg"]);
    }

    #[tokio::test]
    async fn loaded_images_carry_self_describing_data() {
        let paths = vec![temp_file("salad.webp", b"webp-bytes")];
        let batch = load_batch(&paths).await;

        assert_eq!(batch.len(), 1);
        let parsed = imgapi::parse_image_data(&batch[0].data).unwrap();
        assert_eq!(parsed.mime_type, "image/webp");
        assert_eq!(parsed.decode_bytes().unwrap(), b"webp-bytes");
    }
}

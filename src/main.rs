use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use foodshot::{
    Studio, DOWNLOAD_FILE_NAME, FIELD_ENV_PREFIX, FORM_FIELDS, INSPIRE_ENV,
    PREDEFINED_INSPIRATIONS,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        bail!("usage: foodshot <photo.png|photo.jpg|photo.webp>...");
    }

    let engine = Arc::new(imgapi::GeminiImageClient::default());
    let mut studio = Studio::new(engine);
    apply_env_overrides(&mut studio);

    studio.add_images(&paths).await;

    // The first argument's file is the one to re-create; the rest stay in the
    // upload strip.
    let wanted = paths[0]
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    let selection = studio
        .uploads()
        .iter()
        .find(|image| image.name == wanted)
        .or_else(|| studio.uploads().first())
        .map(|image| image.data.clone());
    if let Some(data) = selection {
        studio.select_image(data);
    }

    studio.recreate().await;

    if let Some(message) = studio.error() {
        bail!("{message}");
    }

    let photo = studio
        .result()
        .context("generation finished without a result")?;

    let inline = imgapi::parse_image_data(&photo.image)?;
    tokio::fs::write(DOWNLOAD_FILE_NAME, inline.decode_bytes()?)
        .await
        .with_context(|| format!("Unable to write '{DOWNLOAD_FILE_NAME}'"))?;

    info!(file = DOWNLOAD_FILE_NAME, "saved re-created image");
    println!("Prompt: {}", photo.prompt);
    println!("Saved: {DOWNLOAD_FILE_NAME}");
    Ok(())
}

/// Field overrides come from the environment, one variable per field
/// (FOODSHOT_PHOTO_STYLE, FOODSHOT_PROPS, ...); FOODSHOT_INSPIRE appends a
/// styling snippet to the props field.
fn apply_env_overrides(studio: &mut Studio) {
    for descriptor in FORM_FIELDS {
        let key = format!(
            "{FIELD_ENV_PREFIX}{}",
            descriptor.id.as_str().to_ascii_uppercase()
        );
        if let Ok(value) = std::env::var(&key) {
            studio.set_field(descriptor.id, value);
        }
    }

    // FOODSHOT_INSPIRE takes either an index into the predefined snippets or
    // a freeform snippet of its own.
    if let Ok(idea) = std::env::var(INSPIRE_ENV) {
        let idea = idea.trim();
        if let Some(snippet) = idea
            .parse::<usize>()
            .ok()
            .and_then(|index| PREDEFINED_INSPIRATIONS.get(index))
        {
            studio.apply_inspiration(snippet);
        } else if !idea.is_empty() {
            studio.apply_inspiration(idea);
        }
    }
}

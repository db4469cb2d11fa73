use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::fields::FieldId;
use crate::form::FormData;
use crate::ingest;
use crate::models::{RecreatedPhoto, UploadedImage};
use crate::prompt::build_prompt;

pub const NO_SELECTION_MESSAGE: &str = "Please upload and select an image to re-create.";

/// The remote re-creation collaborator. A trait so tests can stand in for the
/// real Gemini client.
#[async_trait]
pub trait RecreateEngine: Send + Sync {
    /// Re-creates the given inline image following the prompt; returns the
    /// generated image as a data URL.
    async fn recreate(&self, prompt: &str, image: &str) -> Result<String>;
}

#[async_trait]
impl RecreateEngine for imgapi::GeminiImageClient {
    async fn recreate(&self, prompt: &str, image: &str) -> Result<String> {
        imgapi::GeminiImageClient::recreate(self, prompt, image).await
    }
}

/// The single owner of all transient session state: form values, the upload
/// sequence, the selection, and the outcome of the last generation.
///
/// At most one generation request is in flight at a time; the busy flag backs
/// the disabled submit affordance. Error and result are mutually exclusive.
pub struct Studio {
    engine: Arc<dyn RecreateEngine>,
    form: FormData,
    uploads: Vec<UploadedImage>,
    selected: Option<String>,
    busy: bool,
    error: Option<String>,
    result: Option<RecreatedPhoto>,
}

impl Studio {
    pub fn new(engine: Arc<dyn RecreateEngine>) -> Self {
        Self {
            engine,
            form: FormData::default(),
            uploads: Vec::new(),
            selected: None,
            busy: false,
            error: None,
            result: None,
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        self.form.set(id, value);
    }

    pub fn apply_inspiration(&mut self, idea: &str) {
        self.form.apply_inspiration(idea);
    }

    pub fn uploads(&self) -> &[UploadedImage] {
        &self.uploads
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&RecreatedPhoto> {
        self.result.as_ref()
    }

    /// Ingests a batch of files and appends the successfully decoded ones in
    /// one step, once the whole batch has finished. Returns how many landed.
    pub async fn add_images(&mut self, paths: &[PathBuf]) -> usize {
        if paths.is_empty() {
            return 0;
        }
        let batch = ingest::load_batch(paths).await;
        let added = batch.len();
        info!(requested = paths.len(), added, "ingested upload batch");
        self.uploads.extend(batch);
        added
    }

    /// Removes the image at `index`, shifting later entries down. Clears the
    /// selection when the removed image's data is the selected value.
    pub fn remove_image(&mut self, index: usize) {
        if index >= self.uploads.len() {
            return;
        }
        let removed = self.uploads.remove(index);
        if self.selected.as_deref() == Some(removed.data.as_str()) {
            self.selected = None;
        }
    }

    /// Marks the given encoded image value as selected. The value is not
    /// required to be present in the upload sequence; a vanished value simply
    /// never matches anything.
    pub fn select_image(&mut self, data: impl Into<String>) {
        self.selected = Some(data.into());
    }

    /// The submit flow: validates the selection, clears the previous outcome,
    /// builds the prompt, and runs one generation request. All failures land
    /// in the error slot; nothing here is fatal and the user can always retry.
    pub async fn recreate(&mut self) {
        if self.busy {
            warn!("generation already in progress; submit ignored");
            return;
        }

        let Some(selected) = self.selected.clone() else {
            self.result = None;
            self.error = Some(NO_SELECTION_MESSAGE.to_string());
            return;
        };

        self.busy = true;
        self.error = None;
        self.result = None;

        let prompt = build_prompt(&self.form);
        match self.engine.recreate(&prompt, &selected).await {
            Ok(image) => {
                info!("re-creation succeeded");
                self.result = Some(RecreatedPhoto { image, prompt });
            }
            Err(err) => {
                warn!("re-creation failed: {err:#}");
                self.error = Some(format!("{err:#}"));
            }
        }
        self.busy = false;
    }

    #[cfg(test)]
    fn force_busy(&mut self) {
        self.busy = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockEngine {
        calls: AtomicUsize,
        failure: Option<String>,
    }

    impl MockEngine {
        fn succeeding() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                failure: None,
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                failure: Some(message.to_string()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecreateEngine for MockEngine {
        async fn recreate(&self, _prompt: &str, _image: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.failure {
                Some(message) => anyhow::bail!("{message}"),
                None => Ok("data:image/png;base64,Z2VuZXJhdGVk".to_string()),
            }
        }
    }

    fn temp_image(name: &str, bytes: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join("foodshot-session-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    fn index_of(studio: &Studio, name: &str) -> usize {
        studio
            .uploads()
            .iter()
            .position(|image| image.name == name)
            .expect("upload must exist")
    }

    #[tokio::test]
    async fn submit_without_selection_blocks_before_any_io() {
        let engine = MockEngine::succeeding();
        let mut studio = Studio::new(engine.clone());

        studio.recreate().await;

        assert_eq!(studio.error(), Some(NO_SELECTION_MESSAGE));
        assert!(studio.result().is_none());
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_submit_stores_image_and_prompt() {
        let engine = MockEngine::succeeding();
        let mut studio = Studio::new(engine.clone());
        studio.select_image("data:image/jpeg;base64,dXBsb2Fk");

        studio.recreate().await;

        let photo = studio.result().expect("result must be set");
        assert_eq!(photo.image, "data:image/png;base64,Z2VuZXJhdGVk");
        assert_eq!(photo.prompt, build_prompt(&FormData::default()));
        assert!(studio.error().is_none());
        assert!(!studio.is_busy());
        assert_eq!(engine.call_count(), 1);
    }

    #[tokio::test]
    async fn failed_submit_surfaces_the_engine_message() {
        let engine = MockEngine::failing("Non-success status returned");
        let mut studio = Studio::new(engine.clone());
        studio.select_image("data:image/jpeg;base64,dXBsb2Fk");

        studio.recreate().await;

        assert!(studio
            .error()
            .unwrap()
            .contains("Non-success status returned"));
        assert!(studio.result().is_none());
        assert!(!studio.is_busy());
    }

    #[tokio::test]
    async fn new_submit_clears_the_previous_outcome() {
        let engine = MockEngine::succeeding();
        let mut studio = Studio::new(engine);
        studio.select_image("data:image/jpeg;base64,dXBsb2Fk");

        studio.recreate().await;
        assert!(studio.result().is_some());

        let failing = MockEngine::failing("transport down");
        studio.engine = failing;
        studio.recreate().await;

        assert!(studio.result().is_none());
        assert!(studio.error().unwrap().contains("transport down"));
    }

    #[tokio::test]
    async fn busy_studio_ignores_a_second_submit() {
        let engine = MockEngine::succeeding();
        let mut studio = Studio::new(engine.clone());
        studio.select_image("data:image/jpeg;base64,dXBsb2Fk");
        studio.force_busy();

        studio.recreate().await;

        assert_eq!(engine.call_count(), 0);
        assert!(studio.result().is_none());
    }

    #[tokio::test]
    async fn removing_the_selected_image_clears_the_selection() {
        let engine = MockEngine::succeeding();
        let mut studio = Studio::new(engine);
        let paths = vec![
            temp_image("a.png", b"aaa"),
            temp_image("b.png", b"bbb"),
            temp_image("c.png", b"ccc"),
        ];
        assert_eq!(studio.add_images(&paths).await, 3);

        let b_index = index_of(&studio, "b.png");
        let b_data = studio.uploads()[b_index].data.clone();
        studio.select_image(b_data);

        studio.remove_image(index_of(&studio, "b.png"));
        assert!(studio.selected().is_none());
        assert_eq!(studio.uploads().len(), 2);
    }

    #[tokio::test]
    async fn removing_another_image_keeps_selection_and_shifts_indices() {
        let engine = MockEngine::succeeding();
        let mut studio = Studio::new(engine);
        let paths = vec![
            temp_image("d.png", b"ddd"),
            temp_image("e.png", b"eee"),
            temp_image("f.png", b"fff"),
        ];
        studio.add_images(&paths).await;

        let e_data = studio.uploads()[index_of(&studio, "e.png")].data.clone();
        studio.select_image(e_data.clone());

        studio.remove_image(index_of(&studio, "d.png"));

        assert_eq!(studio.selected(), Some(e_data.as_str()));
        assert_eq!(studio.uploads().len(), 2);
        assert!(studio
            .uploads()
            .iter()
            .all(|image| image.name != "d.png"));
    }

    #[tokio::test]
    async fn out_of_range_removal_is_ignored() {
        let engine = MockEngine::succeeding();
        let mut studio = Studio::new(engine);
        studio.remove_image(3);
        assert!(studio.uploads().is_empty());
    }

    #[tokio::test]
    async fn empty_ingest_batch_is_a_no_op() {
        let engine = MockEngine::succeeding();
        let mut studio = Studio::new(engine);
        assert_eq!(studio.add_images(&[]).await, 0);
        assert!(studio.uploads().is_empty());
    }
}

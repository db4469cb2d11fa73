mod constants;
mod fields;
mod form;
mod ingest;
mod models;
mod prompt;
mod session;

pub use constants::{DOWNLOAD_FILE_NAME, FIELD_ENV_PREFIX, INSPIRE_ENV};
pub use fields::{field, FieldId, FieldKind, FormField, FORM_FIELDS, PREDEFINED_INSPIRATIONS};
pub use form::FormData;
pub use ingest::load_batch;
pub use models::{RecreatedPhoto, UploadedImage};
pub use prompt::build_prompt;
pub use session::{RecreateEngine, Studio, NO_SELECTION_MESSAGE};

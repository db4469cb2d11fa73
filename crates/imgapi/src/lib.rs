pub mod data_url;
pub mod models;

mod api;

pub use api::{
    build_recreate_body, first_image_data_url, GeminiImageClient, API_KEY_ENV,
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL,
};
pub use data_url::{encode_data_url, format_data_url, parse_image_data, InlineImage};

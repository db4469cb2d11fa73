pub const DOWNLOAD_FILE_NAME: &str = "ai-food-photo.jpg";
pub const FIELD_ENV_PREFIX: &str = "FOODSHOT_";
pub const INSPIRE_ENV: &str = "FOODSHOT_INSPIRE";

mod types;
mod utils;

pub use types::{Settings, TextFeatureConfig};
pub use utils::{DEFAULT_SETTINGS_FILE, TESSERACT_CMD_ENV};

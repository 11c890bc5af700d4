use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tesseract::{OcrConfig, TesseractCommand};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFeatureConfig {
    /// OCR every n-th frame.
    pub sample_rate: usize,
    /// Number of leading sampled frames that count as the hook.
    pub hook_frames_limit: usize,
    /// Words shorter than this do not count towards context clarity.
    pub min_word_length: usize,
    pub frame_extension: String,
}

impl Default for TextFeatureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 3,
            hook_frames_limit: 5,
            min_word_length: 3,
            frame_extension: "jpg".to_string(),
        }
    }
}

/// Startup settings. Loaded once and passed around by reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tesseract_cmd: Option<String>,
    pub ocr: OcrConfig,
    pub text_features: TextFeatureConfig,
    pub metadata_output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tesseract_cmd: None,
            ocr: OcrConfig::default(),
            text_features: TextFeatureConfig::default(),
            metadata_output_dir: PathBuf::from("data").join("json"),
        }
    }
}

impl Settings {
    pub fn with_tesseract_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.tesseract_cmd = Some(cmd.into());
        self
    }

    pub fn tesseract_cmd(&self) -> Option<&str> {
        self.tesseract_cmd.as_deref()
    }

    pub fn tesseract(&self) -> TesseractCommand {
        TesseractCommand::resolve(self.tesseract_cmd())
    }
}

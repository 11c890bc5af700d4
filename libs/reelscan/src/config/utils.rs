use std::path::Path;

use anyhow::{bail, Context, Result};

use super::types::Settings;

pub const TESSERACT_CMD_ENV: &str = "TESSERACT_CMD";
pub const DEFAULT_SETTINGS_FILE: &str = "reelscan.toml";

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).context("Invalid settings file")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`, or from `reelscan.toml` in the working
    /// directory when present, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_SETTINGS_FILE))?
            }
            None => {
                log::debug!("No settings file found, using defaults");
                Settings::default()
            }
        };

        let settings = settings.with_env_overrides(|key| std::env::var(key).ok());
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Self::from_toml_str(&content).with_context(|| format!("In {}", path.display()))
    }

    /// A non-empty `TESSERACT_CMD` wins over the file value.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cmd) = lookup(TESSERACT_CMD_ENV).filter(|v| !v.is_empty()) {
            log::debug!("{} set in environment: {}", TESSERACT_CMD_ENV, cmd);
            self.tesseract_cmd = Some(cmd);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.text_features.sample_rate == 0 {
            bail!("text_features.sample_rate must be at least 1");
        }
        if self.text_features.hook_frames_limit == 0 {
            bail!("text_features.hook_frames_limit must be at least 1");
        }
        if self.ocr.lang.trim().is_empty() {
            bail!("ocr.lang must not be empty");
        }
        Ok(())
    }
}

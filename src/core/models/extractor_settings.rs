use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractorSettings {
    #[serde(default = "default_primary_language")]
    pub primary_language: String,
    #[serde(default = "default_secondary_language")]
    pub secondary_language: String,
    #[serde(default = "default_recognition_timeout_ms")]
    pub recognition_timeout_ms: u64,
    #[serde(default)]
    pub preprocess_for_handwriting: bool,
    #[serde(default)]
    pub tesseract_dpi: Option<i32>,
    #[serde(default)]
    pub tesseract_psm: Option<i32>,
    #[serde(default)]
    pub tesseract_oem: Option<i32>,
    #[serde(default = "default_tesseract_program")]
    pub tesseract_program: String,
}

fn default_primary_language() -> String {
    global_constants::DEFAULT_PRIMARY_LANGUAGE.to_string()
}

fn default_secondary_language() -> String {
    global_constants::DEFAULT_SECONDARY_LANGUAGE.to_string()
}

fn default_tesseract_program() -> String {
    global_constants::DEFAULT_TESSERACT_PROGRAM.to_string()
}

fn default_recognition_timeout_ms() -> u64 {
    global_constants::DEFAULT_RECOGNITION_TIMEOUT_MS
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            primary_language: default_primary_language(),
            secondary_language: default_secondary_language(),
            recognition_timeout_ms: default_recognition_timeout_ms(),
            preprocess_for_handwriting: false,
            tesseract_dpi: None,
            tesseract_psm: None,
            tesseract_oem: None,
            tesseract_program: default_tesseract_program(),
        }
    }
}

impl ExtractorSettings {
    /// Loads from the per-user config directory, writing defaults on first run.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to_path(&settings_path)?;
            return Ok(default_settings);
        }

        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Could not read settings file {:?}", settings_path))?;
        let settings: ExtractorSettings =
            serde_json::from_str(&contents).context("Settings file is not valid JSON")?;
        settings.validate()?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] Languages: primary={}, secondary={}, timeout={}ms",
            settings.primary_language,
            settings.secondary_language,
            settings.recognition_timeout_ms
        );

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.recognition_timeout_ms == 0 {
            anyhow::bail!("recognition_timeout_ms must be greater than zero");
        }

        if self.primary_language.trim().is_empty() || self.secondary_language.trim().is_empty() {
            anyhow::bail!("Language codes must not be empty");
        }

        if self.tesseract_program.trim().is_empty() {
            anyhow::bail!("tesseract_program must name an executable");
        }

        Ok(())
    }

    pub fn recognition_timeout(&self) -> Duration {
        Duration::from_millis(self.recognition_timeout_ms)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

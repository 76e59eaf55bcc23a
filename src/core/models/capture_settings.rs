use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{ImageFormat, Platform};
use crate::global_constants;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureSettings {
    #[serde(default)]
    pub output_format: ImageFormat,
    #[serde(default)]
    pub thumbnail_format: ImageFormat,
    #[serde(default)]
    pub platform_override: Option<Platform>,
}

impl CaptureSettings {
    pub fn effective_platform(&self) -> Platform {
        self.platform_override.unwrap_or_else(Platform::current)
    }

    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(&settings_path)?;
            return Ok(default_settings);
        }

        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("failed to read settings from {:?}", settings_path))?;
        let settings: CaptureSettings = serde_json::from_str(&contents)
            .with_context(|| format!("invalid settings in {:?}", settings_path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] output={:?}, thumbnail={:?}, platform_override={:?}",
            settings.output_format,
            settings.thumbnail_format,
            settings.platform_override
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

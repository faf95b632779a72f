//! User settings
//!
//! Settings are read once at startup from a JSON file. Every field has a
//! default, so a partial file (or no file at all) is fine. The file is never
//! written back.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use super::language::Language;

/// Overrides the settings file location
pub const CONFIG_PATH_ENV: &str = "SCREEN_TRANSLATOR_CONFIG";
/// Overrides `ocr.tesseract_path`
pub const TESSERACT_PATH_ENV: &str = "SCREEN_TRANSLATOR_TESSERACT";

const CONFIG_DIR_NAME: &str = "screen-translator";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_language: Language,
    pub target_language: Language,
    pub ocr: OcrSettings,
    pub translator: TranslatorSettings,
    pub capture: CaptureSettings,
    pub appearance: AppearanceSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    /// Path to the tesseract executable, or a bare name looked up on PATH
    pub tesseract_path: PathBuf,
    /// Passed as `--psm` when set
    pub page_segmentation_mode: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorSettings {
    pub endpoint: String,
    /// Request timeout; 0 disables it
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Where the last capture is written for inspection; `null` disables it
    pub debug_image: Option<PathBuf>,
    /// Hide the main window while capturing
    pub hide_window: bool,
    /// Time for the compositor to remove the hidden window
    pub settle_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub selection_opacity: f64,
    pub overlay_opacity: f64,
    pub overlay_width: i32,
    pub overlay_height: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_language: Language::English,
            target_language: Language::Turkish,
            ocr: OcrSettings::default(),
            translator: TranslatorSettings::default(),
            capture: CaptureSettings::default(),
            appearance: AppearanceSettings::default(),
        }
    }
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            tesseract_path: default_tesseract_path(),
            page_segmentation_mode: None,
        }
    }
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            debug_image: Some(PathBuf::from("captured_region.png")),
            hide_window: true,
            settle_delay_ms: 200,
        }
    }
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            selection_opacity: 0.3,
            overlay_opacity: 0.8,
            overlay_width: 400,
            overlay_height: 200,
        }
    }
}

fn default_tesseract_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Program Files\Tesseract-OCR\tesseract.exe")
    } else {
        PathBuf::from("tesseract")
    }
}

impl Settings {
    /// Load settings from the default location, applying environment
    /// overrides. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let mut settings = match config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            Some(path) => {
                debug!("No settings file at {:?}, using defaults", path);
                Self::default()
            }
            None => Self::default(),
        };

        if let Some(path) = env::var_os(TESSERACT_PATH_ENV) {
            settings.ocr.tesseract_path = PathBuf::from(path);
        }

        Ok(settings)
    }

    /// Parse a settings file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;

        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

//! Application state types
//!
//! This module contains the state shared between the selector, the
//! translation pipeline and the overlay.

use crate::app::{Language, Settings};
use crate::selection::Region;

/// Outcome of one successful capture, recognize and translate cycle
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationResult {
    /// Text as recognized by OCR
    pub source_text: String,
    /// Language the user asked OCR to read
    pub source_language: Language,
    /// Language code the translator reports for the source text
    pub recognized_language: String,
    pub target_language: Language,
    pub translated_text: String,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Last finalized selection
    pub region: Option<Region>,
    /// Last successful translation
    pub last_result: Option<TranslationResult>,
    pub source_language: Language,
    pub target_language: Language,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AppState {
    /// Create a new application state with the configured languages
    pub fn new(settings: &Settings) -> Self {
        Self {
            region: None,
            last_result: None,
            source_language: settings.source_language,
            target_language: settings.target_language,
        }
    }

    /// Replace the selected region
    pub fn set_region(&mut self, region: Region) {
        self.region = Some(region);
    }

    pub fn has_region(&self) -> bool {
        self.region.is_some()
    }

    /// Translated text of the last successful cycle
    pub fn translated_text(&self) -> Option<&str> {
        self.last_result
            .as_ref()
            .map(|result| result.translated_text.as_str())
    }
}

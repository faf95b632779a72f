//! Languages offered for recognition and translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language supported by both the OCR engine and the translator.
///
/// Serialized with its two-letter translation code; the three-letter OCR
/// code is accepted as an alias when reading settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en", alias = "eng")]
    English,
    #[serde(rename = "tr", alias = "tur")]
    Turkish,
    #[serde(rename = "fr", alias = "fra")]
    French,
    #[serde(rename = "es", alias = "spa")]
    Spanish,
    #[serde(rename = "de", alias = "deu")]
    German,
}

impl Language {
    /// All languages in the order they are listed in the UI
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Turkish,
        Language::French,
        Language::Spanish,
        Language::German,
    ];

    /// Tesseract traineddata code
    pub fn ocr_code(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Turkish => "tur",
            Language::French => "fra",
            Language::Spanish => "spa",
            Language::German => "deu",
        }
    }

    /// ISO 639-1 code used by the translator
    pub fn translate_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Turkish => "Turkish",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
        }
    }

    /// Position in [`Language::ALL`], used as a dropdown index
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|l| l == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Language> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

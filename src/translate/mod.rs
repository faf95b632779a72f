//! Machine translation
//!
//! The pipeline only sees the [`Translator`] trait; the production
//! implementation calls Google's public `gtx` endpoint.

mod google;

use thiserror::Error;

pub use google::GoogleTranslator;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("translation service returned HTTP {0}")]
    Status(u16),
    #[error("could not decode translation response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected translation response: {0}")]
    UnexpectedShape(&'static str),
}

/// Translated text and, when the service reports it, the detected source language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub detected_source: Option<String>,
}

pub trait Translator {
    /// `source` and `target` are two-letter language codes
    fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<Translation, TranslateError>;
}

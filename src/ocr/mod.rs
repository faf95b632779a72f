//! Text recognition
//!
//! The pipeline only sees the [`TextRecognizer`] trait; the production
//! implementation drives the tesseract command-line tool.

mod tesseract;

use image::RgbaImage;
use std::path::PathBuf;
use thiserror::Error;

pub use tesseract::TesseractRecognizer;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("tesseract was not found at {path:?}; install it or set ocr.tesseract_path")]
    EngineMissing { path: PathBuf },
    #[error("failed to encode the capture for OCR: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to run tesseract: {0}")]
    Io(#[from] std::io::Error),
    #[error("tesseract exited with {}: {stderr}", exit_label(.code))]
    Failed { code: Option<i32>, stderr: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Turns a raster into text
pub trait TextRecognizer {
    /// `language_hint` is a tesseract language code such as `eng`
    fn recognize(&self, image: &RgbaImage, language_hint: &str) -> Result<String, OcrError>;
}

//! User-facing messages
//!
//! Every outcome the shell can produce is turned into a [`StatusView`] here:
//! the text for the result area and the line for the status bar.

use crate::app::TranslationResult;
use crate::overlay::{OverlayError, OverlayUpdate};
use crate::pipeline::PipelineError;
use crate::selection::SelectionOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Replaces the result area; `None` leaves it untouched
    pub body: Option<String>,
    pub status: String,
}

impl StatusView {
    fn new(body: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            status: status.into(),
        }
    }

    fn status_only(status: impl Into<String>) -> Self {
        Self {
            body: None,
            status: status.into(),
        }
    }
}

pub fn ready() -> StatusView {
    StatusView::new("", "Ready")
}

pub fn selecting() -> StatusView {
    StatusView::new(
        "Drag over the screen to select a region... (Esc cancels)",
        "Select a region of the screen...",
    )
}

pub fn selection(outcome: &SelectionOutcome) -> StatusView {
    match outcome {
        SelectionOutcome::Finalized(region) => StatusView::new(
            format!(
                "Region selected. Now press 'Translate'.\nCoordinates: {}",
                region
            ),
            format!("Region selected: {}", region),
        ),
        SelectionOutcome::Cancelled => {
            StatusView::new("Region selection cancelled.", "Region selection cancelled")
        }
    }
}

pub fn selection_in_progress() -> StatusView {
    StatusView::status_only("Finish or cancel the selection first")
}

pub fn translating() -> StatusView {
    StatusView::new("Translating...", "Translating...")
}

pub fn translation(outcome: &Result<TranslationResult, PipelineError>) -> StatusView {
    match outcome {
        Ok(result) => StatusView::new(
            format!(
                "Original Text ({}):\n{}\n\nTranslated Text ({}):\n{}",
                result.source_language.ocr_code(),
                result.source_text,
                result.target_language.translate_code(),
                result.translated_text
            ),
            "Translation complete",
        ),
        Err(PipelineError::NoRegion) => {
            StatusView::new("Please select a region first!", "No region selected")
        }
        Err(PipelineError::NoTextFound) => {
            StatusView::new("No text found in the selected region.", "No text found")
        }
        Err(e) => StatusView::new(format!("An error occurred: {}", e), "Error"),
    }
}

pub fn overlay(outcome: &Result<OverlayUpdate, OverlayError>) -> StatusView {
    match outcome {
        Ok(OverlayUpdate::Created) => StatusView::status_only("Overlay window shown"),
        Ok(OverlayUpdate::Updated) => StatusView::status_only("Overlay text updated"),
        Err(OverlayError::NoTranslation) => {
            StatusView::new("Please translate something first!", "Nothing to show")
        }
    }
}

pub fn overlay_closed() -> StatusView {
    StatusView::status_only("Overlay window closed")
}

pub fn copied(copied: bool) -> StatusView {
    if copied {
        StatusView::status_only("Translation copied to clipboard")
    } else {
        StatusView::status_only("Nothing to copy")
    }
}

pub fn startup_error(message: &str) -> StatusView {
    StatusView::new(format!("An error occurred: {}", message), "Error")
}

//! Capture, recognize and translate
//!
//! Turns the selected region in [`AppState`] into a [`TranslationResult`].
//! Every failure comes back as a [`PipelineError`]; rendering it is the
//! caller's job.

use log::{debug, info, warn};
use std::path::PathBuf;
use thiserror::Error;

use crate::app::{AppState, Settings, TranslationResult};
use crate::capture::{CaptureError, CaptureProvider, XcapCapture};
use crate::ocr::{OcrError, TesseractRecognizer, TextRecognizer};
use crate::translate::{GoogleTranslator, TranslateError, Translator};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no region has been selected")]
    NoRegion,
    #[error("no text found in the selected region")]
    NoTextFound,
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Recognition(#[from] OcrError),
    #[error(transparent)]
    Translation(#[from] TranslateError),
}

pub struct Pipeline {
    capture: Box<dyn CaptureProvider>,
    recognizer: Box<dyn TextRecognizer>,
    translator: Box<dyn Translator>,
    debug_image: Option<PathBuf>,
}

impl Pipeline {
    pub fn new(
        capture: Box<dyn CaptureProvider>,
        recognizer: Box<dyn TextRecognizer>,
        translator: Box<dyn Translator>,
    ) -> Self {
        Self {
            capture,
            recognizer,
            translator,
            debug_image: None,
        }
    }

    /// Wire up xcap, tesseract and the gtx translator from settings
    pub fn from_settings(settings: &Settings) -> Result<Self, TranslateError> {
        let translator = GoogleTranslator::from_settings(&settings.translator)?;
        Ok(Self::new(
            Box::new(XcapCapture::new()),
            Box::new(TesseractRecognizer::from_settings(&settings.ocr)),
            Box::new(translator),
        )
        .with_debug_image(settings.capture.debug_image.clone()))
    }

    /// Write every capture to `path` for inspection
    pub fn with_debug_image(mut self, path: Option<PathBuf>) -> Self {
        self.debug_image = path;
        self
    }

    pub fn run(&self, state: &mut AppState) -> Result<TranslationResult, PipelineError> {
        let region = state.region.ok_or(PipelineError::NoRegion)?;

        if region.is_empty() {
            debug!("Region {} has no area, skipping capture", region);
            return Err(PipelineError::NoTextFound);
        }

        let image = self.capture.capture(&region)?;

        if let Some(path) = &self.debug_image {
            if let Err(e) = image.save(path) {
                warn!("Failed to write debug capture to {:?}: {}", path, e);
            }
        }

        let source = state.source_language;
        let target = state.target_language;

        let text = self.recognizer.recognize(&image, source.ocr_code())?;
        let text = text.trim();
        if text.is_empty() {
            return Err(PipelineError::NoTextFound);
        }

        let translation =
            self.translator
                .translate(text, source.translate_code(), target.translate_code())?;

        let result = TranslationResult {
            source_text: text.to_string(),
            source_language: source,
            recognized_language: translation
                .detected_source
                .unwrap_or_else(|| source.translate_code().to_string()),
            target_language: target,
            translated_text: translation.text,
        };

        info!(
            "Translated {} characters from {} to {}",
            result.source_text.chars().count(),
            result.recognized_language,
            target.translate_code()
        );

        state.last_result = Some(result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Language;
    use crate::selection::{Point, Region};
    use crate::translate::Translation;
    use image::RgbaImage;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StubCapture {
        calls: Rc<Cell<usize>>,
    }

    impl CaptureProvider for StubCapture {
        fn capture(&self, _region: &Region) -> Result<RgbaImage, CaptureError> {
            self.calls.set(self.calls.get() + 1);
            Ok(RgbaImage::new(16, 16))
        }
    }

    struct FailingCapture;

    impl CaptureProvider for FailingCapture {
        fn capture(&self, region: &Region) -> Result<RgbaImage, CaptureError> {
            Err(CaptureError::OutOfBounds(*region))
        }
    }

    struct StubRecognizer {
        text: &'static str,
        hints: Rc<std::cell::RefCell<Vec<String>>>,
    }

    impl TextRecognizer for StubRecognizer {
        fn recognize(&self, _image: &RgbaImage, language_hint: &str) -> Result<String, OcrError> {
            self.hints.borrow_mut().push(language_hint.to_string());
            Ok(self.text.to_string())
        }
    }

    struct MissingEngine;

    impl TextRecognizer for MissingEngine {
        fn recognize(&self, _image: &RgbaImage, _language_hint: &str) -> Result<String, OcrError> {
            Err(OcrError::EngineMissing {
                path: PathBuf::from("tesseract"),
            })
        }
    }

    /// Fails the test if the pipeline ever reaches translation
    struct UnreachableTranslator;

    impl Translator for UnreachableTranslator {
        fn translate(&self, text: &str, _: &str, _: &str) -> Result<Translation, TranslateError> {
            panic!("translator must not be called, got {:?}", text);
        }
    }

    struct DictionaryTranslator;

    impl Translator for DictionaryTranslator {
        fn translate(
            &self,
            text: &str,
            source: &str,
            target: &str,
        ) -> Result<Translation, TranslateError> {
            assert_eq!((source, target), ("en", "tr"));
            match text {
                "Hello" => Ok(Translation {
                    text: "Merhaba".to_string(),
                    detected_source: Some("en".to_string()),
                }),
                other => panic!("unexpected text {:?}", other),
            }
        }
    }

    struct OfflineTranslator;

    impl Translator for OfflineTranslator {
        fn translate(&self, _: &str, _: &str, _: &str) -> Result<Translation, TranslateError> {
            Err(TranslateError::Status(503))
        }
    }

    fn state_with_region() -> AppState {
        let mut state = AppState::default();
        state.source_language = Language::English;
        state.target_language = Language::Turkish;
        state.set_region(Region::from_corners(Point::new(10, 10), Point::new(110, 60)));
        state
    }

    fn recognizer(text: &'static str) -> StubRecognizer {
        StubRecognizer {
            text,
            hints: Rc::default(),
        }
    }

    #[test]
    fn test_no_region_performs_no_capture() {
        let calls = Rc::new(Cell::new(0));
        let pipeline = Pipeline::new(
            Box::new(StubCapture {
                calls: calls.clone(),
            }),
            Box::new(recognizer("Hello")),
            Box::new(UnreachableTranslator),
        );

        let mut state = AppState::default();
        let result = pipeline.run(&mut state);

        assert!(matches!(result, Err(PipelineError::NoRegion)));
        assert_eq!(calls.get(), 0);
        assert!(state.last_result.is_none());
    }

    #[test]
    fn test_empty_text_never_translates() {
        for text in ["", "   \n\t\u{c}\n"] {
            let pipeline = Pipeline::new(
                Box::new(StubCapture {
                    calls: Rc::default(),
                }),
                Box::new(recognizer(text)),
                Box::new(UnreachableTranslator),
            );

            let mut state = state_with_region();
            let result = pipeline.run(&mut state);
            assert!(matches!(result, Err(PipelineError::NoTextFound)));
            assert!(state.last_result.is_none());
        }
    }

    #[test]
    fn test_zero_area_region_is_no_text_found() {
        let calls = Rc::new(Cell::new(0));
        let pipeline = Pipeline::new(
            Box::new(StubCapture {
                calls: calls.clone(),
            }),
            Box::new(recognizer("Hello")),
            Box::new(UnreachableTranslator),
        );

        let mut state = AppState::default();
        let p = Point::new(30, 30);
        state.set_region(Region::from_corners(p, p));

        assert!(matches!(
            pipeline.run(&mut state),
            Err(PipelineError::NoTextFound)
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_successful_cycle_stores_result() {
        let calls = Rc::new(Cell::new(0));
        let stub = recognizer("Hello\n\u{c}");
        let hints = stub.hints.clone();
        let pipeline = Pipeline::new(
            Box::new(StubCapture {
                calls: calls.clone(),
            }),
            Box::new(stub),
            Box::new(DictionaryTranslator),
        );

        let mut state = state_with_region();
        let result = pipeline.run(&mut state).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(hints.borrow().as_slice(), ["eng".to_string()]);
        assert_eq!(result.source_text, "Hello");
        assert_eq!(result.translated_text, "Merhaba");
        assert_eq!(result.recognized_language, "en");
        assert_eq!(result.target_language, Language::Turkish);
        assert_eq!(state.last_result, Some(result));
        assert_eq!(state.translated_text(), Some("Merhaba"));
    }

    #[test]
    fn test_capture_failure_is_typed() {
        let pipeline = Pipeline::new(
            Box::new(FailingCapture),
            Box::new(recognizer("Hello")),
            Box::new(UnreachableTranslator),
        );
        let mut state = state_with_region();
        assert!(matches!(
            pipeline.run(&mut state),
            Err(PipelineError::Capture(CaptureError::OutOfBounds(_)))
        ));
    }

    #[test]
    fn test_recognizer_failure_is_typed() {
        let pipeline = Pipeline::new(
            Box::new(StubCapture {
                calls: Rc::default(),
            }),
            Box::new(MissingEngine),
            Box::new(UnreachableTranslator),
        );
        let mut state = state_with_region();
        assert!(matches!(
            pipeline.run(&mut state),
            Err(PipelineError::Recognition(OcrError::EngineMissing { .. }))
        ));
    }

    #[test]
    fn test_translator_failure_keeps_previous_result() {
        let ok = Pipeline::new(
            Box::new(StubCapture {
                calls: Rc::default(),
            }),
            Box::new(recognizer("Hello")),
            Box::new(DictionaryTranslator),
        );
        let failing = Pipeline::new(
            Box::new(StubCapture {
                calls: Rc::default(),
            }),
            Box::new(recognizer("Hello")),
            Box::new(OfflineTranslator),
        );

        let mut state = state_with_region();
        ok.run(&mut state).unwrap();
        let result = failing.run(&mut state);

        assert!(matches!(
            result,
            Err(PipelineError::Translation(TranslateError::Status(503)))
        ));
        assert_eq!(state.translated_text(), Some("Merhaba"));
    }

    #[test]
    fn test_debug_image_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("captured_region.png");
        let pipeline = Pipeline::new(
            Box::new(StubCapture {
                calls: Rc::default(),
            }),
            Box::new(recognizer("Hello")),
            Box::new(DictionaryTranslator),
        )
        .with_debug_image(Some(path.clone()));

        let mut state = state_with_region();
        pipeline.run(&mut state).unwrap();

        let written = image::open(&path).unwrap();
        assert_eq!((written.width(), written.height()), (16, 16));
    }

    #[test]
    fn test_unwritable_debug_image_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("capture.png");
        let pipeline = Pipeline::new(
            Box::new(StubCapture {
                calls: Rc::default(),
            }),
            Box::new(recognizer("Hello")),
            Box::new(DictionaryTranslator),
        )
        .with_debug_image(Some(path));

        let mut state = state_with_region();
        assert!(pipeline.run(&mut state).is_ok());
    }
}

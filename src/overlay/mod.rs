//! Floating translation overlay
//!
//! [`OverlayController`] owns at most one overlay window. The window is
//! created lazily by a factory on the first `show`, updated in place on
//! later calls and forgotten when it closes.

use log::debug;
use thiserror::Error;

use crate::app::TranslationResult;

/// A window that displays translated text
pub trait OverlaySurface {
    fn set_text(&mut self, text: &str);
    /// Put the window on screen and raise it above other windows
    fn present(&mut self);
    fn close(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayUpdate {
    Created,
    Updated,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    #[error("there is no translation to show yet")]
    NoTranslation,
}

pub type OverlayFactory<W> = Box<dyn FnMut(&str) -> W>;

pub struct OverlayController<W> {
    window: Option<W>,
    factory: OverlayFactory<W>,
}

impl<W: OverlaySurface> OverlayController<W> {
    pub fn new(factory: OverlayFactory<W>) -> Self {
        Self {
            window: None,
            factory,
        }
    }

    pub fn is_open(&self) -> bool {
        self.window.is_some()
    }

    /// Show the translated text of `result`, creating the window if needed
    pub fn show(
        &mut self,
        result: Option<&TranslationResult>,
    ) -> Result<OverlayUpdate, OverlayError> {
        let text = result
            .map(|r| r.translated_text.as_str())
            .ok_or(OverlayError::NoTranslation)?;

        match self.window.as_mut() {
            Some(window) => {
                debug!("Updating overlay text");
                window.set_text(text);
                window.present();
                Ok(OverlayUpdate::Updated)
            }
            None => {
                debug!("Creating overlay window");
                let mut window = (self.factory)(text);
                window.present();
                self.window = Some(window);
                Ok(OverlayUpdate::Created)
            }
        }
    }

    /// Destroy the window. Returns false when there was nothing to close.
    pub fn close(&mut self) -> bool {
        match self.window.take() {
            Some(mut window) => {
                debug!("Closing overlay window");
                window.close();
                true
            }
            None => false,
        }
    }

    /// Drop the reference to a window that was closed from outside
    pub fn forget(&mut self) {
        self.window = None;
    }
}

//! Capture module for screen region capture
//!
//! This module provides the capture seam used by the translation pipeline
//! and its xcap-backed implementation.

pub mod screen;

use image::RgbaImage;
use thiserror::Error;

use crate::selection::Region;

pub use screen::XcapCapture;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("screen capture failed: {0}")]
    Backend(#[from] xcap::XCapError),
    #[error("region {0} is outside the captured monitor")]
    OutOfBounds(Region),
}

/// Produces a raster of a screen region
pub trait CaptureProvider {
    fn capture(&self, region: &Region) -> Result<RgbaImage, CaptureError>;
}

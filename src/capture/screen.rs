//! Screen capture module using xcap library
//!
//! Captures the monitor that contains a selected region and crops the
//! result down to that region.

use image::RgbaImage;
use log::debug;
use xcap::Monitor;

use super::{CaptureError, CaptureProvider};
use crate::selection::Region;

/// Geometry of a monitor in screen coordinates
#[derive(Debug, Clone)]
pub struct MonitorInfo {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub scale_factor: f32,
}

impl MonitorInfo {
    /// Create MonitorInfo from xcap Monitor
    fn from_xcap(monitor: &Monitor) -> Result<Self, CaptureError> {
        Ok(Self {
            name: monitor.name()?,
            x: monitor.x()?,
            y: monitor.y()?,
            width: monitor.width()?,
            height: monitor.height()?,
            scale_factor: monitor.scale_factor()?,
        })
    }
}

/// Capture provider backed by xcap
#[derive(Debug, Default, Clone, Copy)]
pub struct XcapCapture;

impl XcapCapture {
    pub fn new() -> Self {
        Self
    }
}

impl CaptureProvider for XcapCapture {
    fn capture(&self, region: &Region) -> Result<RgbaImage, CaptureError> {
        let monitor = Monitor::from_point(region.x1(), region.y1())?;
        let info = MonitorInfo::from_xcap(&monitor)?;
        debug!(
            "Capturing {} on monitor '{}' ({}x{} at {}, {}, scale {})",
            region, info.name, info.width, info.height, info.x, info.y, info.scale_factor
        );

        let image = monitor.capture_image()?;
        crop_to_region(&image, &info, region)
    }
}

/// Cut `region` (screen coordinates) out of a full capture of `monitor`.
///
/// Screen coordinates are logical; the captured image is in physical pixels,
/// so offsets and sizes are multiplied by the monitor's scale factor. The
/// crop is clamped to the image, and a region that falls entirely outside
/// it is an error.
pub fn crop_to_region(
    image: &RgbaImage,
    monitor: &MonitorInfo,
    region: &Region,
) -> Result<RgbaImage, CaptureError> {
    let scale = if monitor.scale_factor > 0.0 {
        monitor.scale_factor as f64
    } else {
        1.0
    };

    let left = ((region.x1() - monitor.x) as f64 * scale).round() as i64;
    let top = ((region.y1() - monitor.y) as f64 * scale).round() as i64;
    let right = ((region.x2() - monitor.x) as f64 * scale).round() as i64;
    let bottom = ((region.y2() - monitor.y) as f64 * scale).round() as i64;

    // Clamp to image bounds
    let left = left.clamp(0, image.width() as i64);
    let top = top.clamp(0, image.height() as i64);
    let right = right.clamp(0, image.width() as i64);
    let bottom = bottom.clamp(0, image.height() as i64);

    if right <= left || bottom <= top {
        return Err(CaptureError::OutOfBounds(*region));
    }

    let cropped = image::imageops::crop_imm(
        image,
        left as u32,
        top as u32,
        (right - left) as u32,
        (bottom - top) as u32,
    )
    .to_image();

    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Point;
    use image::Rgba;

    fn monitor(x: i32, y: i32, scale_factor: f32) -> MonitorInfo {
        MonitorInfo {
            name: "test".to_string(),
            x,
            y,
            width: 100,
            height: 100,
            scale_factor,
        }
    }

    fn region(x1: i32, y1: i32, x2: i32, y2: i32) -> Region {
        Region::from_corners(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_crop_plain() {
        let mut image = RgbaImage::new(100, 100);
        image.put_pixel(10, 10, Rgba([255, 0, 0, 255]));

        let cropped = crop_to_region(&image, &monitor(0, 0, 1.0), &region(10, 10, 30, 20)).unwrap();
        assert_eq!(cropped.dimensions(), (20, 10));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_crop_honors_monitor_origin() {
        let mut image = RgbaImage::new(100, 100);
        image.put_pixel(5, 5, Rgba([0, 255, 0, 255]));

        // Second monitor placed right of a 1920px wide primary
        let cropped =
            crop_to_region(&image, &monitor(1920, 0, 1.0), &region(1925, 5, 1935, 15)).unwrap();
        assert_eq!(cropped.dimensions(), (10, 10));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_crop_honors_scale_factor() {
        let image = RgbaImage::new(200, 200);
        let cropped = crop_to_region(&image, &monitor(0, 0, 2.0), &region(10, 10, 30, 20)).unwrap();
        assert_eq!(cropped.dimensions(), (40, 20));
    }

    #[test]
    fn test_crop_is_clamped_to_image() {
        let image = RgbaImage::new(100, 100);
        let cropped = crop_to_region(&image, &monitor(0, 0, 1.0), &region(90, 90, 150, 120)).unwrap();
        assert_eq!(cropped.dimensions(), (10, 10));
    }

    #[test]
    fn test_crop_outside_image_fails() {
        let image = RgbaImage::new(100, 100);
        let result = crop_to_region(&image, &monitor(0, 0, 1.0), &region(200, 200, 250, 250));
        assert!(matches!(result, Err(CaptureError::OutOfBounds(_))));
    }
}

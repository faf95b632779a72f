use image::{ImageFormat, RgbaImage};
use log::{debug, warn};
use std::io::{Cursor, ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{OcrError, TextRecognizer};
use crate::app::config::OcrSettings;

/// Runs `tesseract stdin stdout -l <lang>` with the capture piped in as PNG
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    binary: PathBuf,
    page_segmentation_mode: Option<u8>,
}

impl TesseractRecognizer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            page_segmentation_mode: None,
        }
    }

    pub fn from_settings(settings: &OcrSettings) -> Self {
        Self {
            page_segmentation_mode: settings.page_segmentation_mode,
            ..Self::new(settings.tesseract_path.clone())
        }
    }

    fn args(&self, language: &str) -> Vec<String> {
        let mut args = vec![
            "stdin".to_string(),
            "stdout".to_string(),
            "-l".to_string(),
            language.to_string(),
        ];
        if let Some(psm) = self.page_segmentation_mode {
            args.push("--psm".to_string());
            args.push(psm.to_string());
        }
        args
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &RgbaImage, language_hint: &str) -> Result<String, OcrError> {
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        let args = self.args(language_hint);
        debug!("Running {:?} {}", self.binary, args.join(" "));

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => OcrError::EngineMissing {
                    path: self.binary.clone(),
                },
                _ => OcrError::Io(e),
            })?;

        // tesseract loads its language data before reading stdin and may
        // exit early; its stderr then explains more than the broken pipe
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&png) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("tesseract closed stdin early");
                }
                Err(e) => return Err(OcrError::Io(e)),
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("tesseract failed: {}", stderr);
            return Err(OcrError::Failed {
                code: output.status.code(),
                stderr,
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Recognized {} characters", text.chars().count());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_without_psm() {
        let recognizer = TesseractRecognizer::new("tesseract");
        assert_eq!(recognizer.args("tur"), vec!["stdin", "stdout", "-l", "tur"]);
    }

    #[test]
    fn test_args_with_psm() {
        let settings = OcrSettings {
            tesseract_path: PathBuf::from("/usr/bin/tesseract"),
            page_segmentation_mode: Some(6),
        };
        let recognizer = TesseractRecognizer::from_settings(&settings);
        assert_eq!(
            recognizer.args("eng"),
            vec!["stdin", "stdout", "-l", "eng", "--psm", "6"]
        );
    }

    #[test]
    fn test_missing_binary() {
        let recognizer = TesseractRecognizer::new("/nonexistent/bin/tesseract-ocr-missing");
        let image = RgbaImage::new(8, 8);

        match recognizer.recognize(&image, "eng") {
            Err(OcrError::EngineMissing { path }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/bin/tesseract-ocr-missing"));
            }
            other => panic!("expected EngineMissing, got {:?}", other),
        }
    }

    /// Writes an executable shell script standing in for tesseract
    #[cfg(unix)]
    fn fake_tesseract(dir: &std::path::Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("tesseract");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Pixel noise so the PNG stays larger than a pipe buffer
    #[cfg(unix)]
    fn noisy_image(width: u32, height: u32) -> RgbaImage {
        let mut seed: u32 = 0x1234_5678;
        RgbaImage::from_fn(width, height, |_, _| {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let [r, g, b, a] = seed.to_le_bytes();
            image::Rgba([r, g, b, a])
        })
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_tesseract(
            dir.path(),
            "echo \"Failed loading language 'xyz'\" >&2\nexit 1",
        );
        let recognizer = TesseractRecognizer::new(binary);

        match recognizer.recognize(&noisy_image(800, 300), "xyz") {
            Err(OcrError::Failed { code, stderr }) => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "Failed loading language 'xyz'");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_reads_text_from_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_tesseract(dir.path(), "cat > /dev/null\necho 'Hello world'");
        let recognizer = TesseractRecognizer::new(binary);

        let text = recognizer.recognize(&noisy_image(64, 64), "eng").unwrap();
        assert_eq!(text.trim(), "Hello world");
    }

    #[test]
    fn test_failed_error_message() {
        let err = OcrError::Failed {
            code: Some(1),
            stderr: "Failed loading language 'xyz'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tesseract exited with status 1: Failed loading language 'xyz'"
        );
    }
}

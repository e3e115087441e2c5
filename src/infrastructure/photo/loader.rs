//! Reads and probes uploaded photos.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use image::ImageReader;
use tracing::{debug, warn};

use crate::domain::entities::{PhotoFormat, UploadedPhoto};
use crate::domain::errors::PhotoError;

/// Loads photos picked in the lost child panel.
pub struct PhotoLoader;

impl PhotoLoader {
    /// Validates the extension, checks the file size and probes the header for
    /// the pixel size. The image body is never read.
    ///
    /// # Errors
    /// Returns error for unsupported extensions, empty files or read failures.
    pub fn load(path: &Path) -> Result<UploadedPhoto, PhotoError> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        let format =
            PhotoFormat::from_extension(extension).ok_or_else(|| PhotoError::unsupported(extension))?;

        let size = fs::metadata(path)?.len();
        if size == 0 {
            return Err(PhotoError::Empty);
        }

        let dimensions = Self::probe_dimensions(path)?;
        if dimensions.is_none() {
            warn!(path = %path.display(), "Could not decode photo header");
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(file = %file_name, size, ?dimensions, "Photo loaded");

        Ok(UploadedPhoto::new(file_name, format, size, dimensions))
    }

    fn probe_dimensions(path: &Path) -> Result<Option<(u32, u32)>, PhotoError> {
        let reader = ImageReader::open(path)?;
        Ok(reader
            .with_guessed_format()
            .ok()
            .and_then(|reader| reader.into_dimensions().ok()))
    }

    /// Returns whether the explorer should list this file.
    #[must_use]
    pub fn is_candidate(path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .and_then(PhotoFormat::from_extension)
            .is_some()
    }
}

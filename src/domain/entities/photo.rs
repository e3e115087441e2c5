//! Uploaded photo value object.

/// Image formats accepted by the lost child uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Jpeg,
    Png,
}

impl PhotoFormat {
    /// Resolves a format from a file extension, ignoring case.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Returns a short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
        }
    }
}

/// Photo picked by a parent. The bytes are only probed, never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedPhoto {
    file_name: String,
    format: PhotoFormat,
    size_bytes: u64,
    dimensions: Option<(u32, u32)>,
}

impl UploadedPhoto {
    /// Creates new uploaded photo.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        format: PhotoFormat,
        size_bytes: u64,
        dimensions: Option<(u32, u32)>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            format,
            size_bytes,
            dimensions,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub const fn format(&self) -> PhotoFormat {
        self.format
    }

    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Pixel size, when the header could be decoded.
    #[must_use]
    pub const fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    /// Returns a one-line description for the preview block.
    #[must_use]
    pub fn summary(&self) -> String {
        let kib = self.size_bytes.div_ceil(1024);
        match self.dimensions {
            Some((w, h)) => format!(
                "{} ({}, {w}x{h}, {kib} KiB)",
                self.file_name,
                self.format.name()
            ),
            None => format!("{} ({}, {kib} KiB)", self.file_name, self.format.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert_eq!(PhotoFormat::from_extension("jpg"), Some(PhotoFormat::Jpeg));
        assert_eq!(PhotoFormat::from_extension("JPEG"), Some(PhotoFormat::Jpeg));
        assert_eq!(PhotoFormat::from_extension("Png"), Some(PhotoFormat::Png));
        assert_eq!(PhotoFormat::from_extension("gif"), None);
        assert_eq!(PhotoFormat::from_extension(""), None);
    }

    #[test]
    fn test_summary() {
        let photo = UploadedPhoto::new("kid.png", PhotoFormat::Png, 2048, Some((200, 300)));
        assert_eq!(photo.summary(), "kid.png (PNG, 200x300, 2 KiB)");

        let photo = UploadedPhoto::new("kid.jpg", PhotoFormat::Jpeg, 10, None);
        assert_eq!(photo.summary(), "kid.jpg (JPEG, 1 KiB)");
    }
}

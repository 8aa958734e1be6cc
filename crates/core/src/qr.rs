//! QR code rendering collaborator.

use crate::error::{Error, Result};

/// Renders a URL as a QR code image.
pub trait QrRenderer {
    /// Encoded image bytes for the URL.
    fn render(&self, url: &str) -> Result<Vec<u8>>;
}

impl<Q: QrRenderer + ?Sized> QrRenderer for &Q {
    fn render(&self, url: &str) -> Result<Vec<u8>> {
        (**self).render(url)
    }
}

/// A renderer for environments without network access.
///
/// Always fails, so QR blocks degrade to their plain-text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineQrRenderer;

impl QrRenderer for OfflineQrRenderer {
    fn render(&self, _url: &str) -> Result<Vec<u8>> {
        Err(Error::QrError("no QR renderer configured".to_string()))
    }
}

/// Picture formats that can be embedded in a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// Detect the format from magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_formats() {
        assert_eq!(
            ImageFormat::sniff(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"<html>error</html>"), None);
        assert_eq!(ImageFormat::sniff(&[]), None);
    }

    #[test]
    fn test_offline_renderer_fails() {
        assert!(OfflineQrRenderer.render("https://example.com").is_err());
    }
}

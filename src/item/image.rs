//! Photo attachments: raw bytes plus a MIME type, encoded to a `data:` URI
//! once the posting is admitted.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Largest accepted source image, measured before encoding.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),
}

/// An image picked for a posting, not yet encoded.
///
/// A file over the size limit is never read: the attachment keeps only its
/// size, so admission rejects it with the usual image error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    mime: String,
    size: u64,
    bytes: Option<Vec<u8>>,
}

impl ImageAttachment {
    #[must_use]
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            bytes: Some(bytes),
        }
    }

    /// Read an image file, inferring the MIME type from its extension.
    ///
    /// The file is stat'ed first; contents are only loaded when it is at
    /// most `max_bytes` long.
    pub fn read(path: &Path, max_bytes: u64) -> Result<Self, ImageError> {
        let mime = mime_for_path(path)
            .ok_or_else(|| ImageError::UnsupportedType(path.display().to_string()))?;
        let io_error = |source: std::io::Error| ImageError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > max_bytes {
            debug!(
                "Not loading {}: {size} bytes is over the {max_bytes} byte limit",
                path.display()
            );
            return Ok(Self {
                mime: mime.to_string(),
                size,
                bytes: None,
            });
        }

        let bytes = std::fs::read(path).map_err(io_error)?;
        Ok(Self::new(mime, bytes))
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Source size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// False when the file was too large to be read.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.bytes.is_some()
    }

    #[must_use]
    pub fn to_data_uri(&self) -> String {
        let encoded = self
            .bytes
            .as_deref()
            .map(|bytes| STANDARD.encode(bytes))
            .unwrap_or_default();
        format!("data:{};base64,{encoded}", self.mime)
    }
}

/// MIME type for the image extensions the board accepts.
#[must_use]
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

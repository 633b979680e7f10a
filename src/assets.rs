//! Opaque binary payloads embedded in the card
//!
//! The card ships with a WOFF2 font and a WebP background image, both stored
//! base64-encoded under `assets/` and compiled into the binary. Custom
//! background images can be loaded from disk and are encoded on the fly.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

const EMBEDDED_FONT: &str = include_str!("../assets/suite-regular.woff2.b64");
const EMBEDDED_BACKGROUND: &str = include_str!("../assets/card-background.webp.b64");

/// Errors that can occur when loading an image asset
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read asset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported image type '{0}' (expected png, jpg, jpeg, gif, webp or svg)")]
    UnsupportedImage(String),
}

/// Base64 payload of the SUITE Regular font used by `@font-face`
pub fn embedded_font_base64() -> &'static str {
    EMBEDDED_FONT.trim()
}

/// A raster or vector image inlined as a data URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// MIME type, e.g. `image/webp`
    pub mime: String,
    /// Base64-encoded image bytes
    pub base64: String,
}

impl ImageAsset {
    /// Wrap raw image bytes
    pub fn from_bytes(mime: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime: mime.into(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// The background image bundled with the crate
    pub fn embedded_background() -> Self {
        Self {
            mime: "image/webp".to_string(),
            base64: EMBEDDED_BACKGROUND.trim().to_string(),
        }
    }

    /// Load an image from disk, picking the MIME type from the file extension
    pub fn from_file(path: &Path) -> Result<Self, AssetError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let mime = mime_for_extension(&extension)
            .ok_or_else(|| AssetError::UnsupportedImage(extension.clone()))?;
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), mime, bytes = bytes.len(), "loaded image asset");
        Ok(Self::from_bytes(mime, &bytes))
    }

    /// `data:` URI suitable for an `href` attribute
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

fn mime_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

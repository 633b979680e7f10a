//! Crate-level error type
//!
//! Rendering never fails; errors only come from loading themes, images and
//! card bodies.

use thiserror::Error;

use crate::assets::AssetError;
use crate::theme::ThemeError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("failed to read card body: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_error_converts() {
        let err: Error = ThemeError::UnknownTheme("neon".to_string()).into();
        assert_eq!(err.to_string(), "theme error: Unknown theme 'neon'");
    }

    #[test]
    fn test_asset_error_converts() {
        let err: Error = AssetError::UnsupportedImage("bmp".to_string()).into();
        assert!(matches!(err, Error::Asset(_)));
        assert!(err.to_string().starts_with("asset error: Unsupported image type 'bmp'"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Decoding embedded slide images into Iced-ready handles.

use crate::error::Result;
use crate::slides::SlideDeck;
use iced::widget::image;

/// A decoded slide image plus its pixel dimensions.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates an `ImageData` from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes encoded image bytes (PNG/JPEG) into an `ImageData`.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// Loads one slide asset by name, decoding off the UI thread.
///
/// Returns the asset name with the decode result so the caller can route the
/// image into the cache. Used both for the visible slide and for prefetch.
pub async fn load_slide(asset: String) -> (String, Result<ImageData>) {
    let name = asset.clone();
    let result = tokio::task::spawn_blocking(move || {
        let bytes = SlideDeck::asset_bytes(&asset)?;
        decode(&bytes)
    })
    .await
    .unwrap_or_else(|e| Err(crate::error::Error::Image(format!("decode task failed: {e}"))));

    (name, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_builtin_slide_yields_pixels() {
        let bytes = SlideDeck::asset_bytes("01.png").expect("asset");
        let image = decode(&bytes).expect("decode");
        assert!(image.width > 0);
        assert!(image.height > 0);
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, crate::error::Error::Image(_)));
    }

    #[tokio::test]
    async fn load_slide_returns_asset_name_with_result() {
        let (name, result) = load_slide("02.png".to_string()).await;
        assert_eq!(name, "02.png");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn load_slide_reports_missing_asset() {
        let (_, result) = load_slide("nope.png".to_string()).await;
        assert!(result.is_err());
    }
}

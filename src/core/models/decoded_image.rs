use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::DynamicImage;
use uuid::Uuid;

/// Read-only decoded image shared by every recognition call of one extraction.
#[derive(Clone)]
pub struct DecodedImage {
    decode_id: Uuid,
    source: PathBuf,
    pixels: Arc<DynamicImage>,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("decode_id", &self.decode_id)
            .field("source", &self.source)
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

impl DecodedImage {
    pub fn build(source: &Path, pixels: DynamicImage) -> Self {
        let decode_id = Uuid::new_v4();
        log::debug!(
            "[DECODED_IMAGE] building handle {}: {}x{} from {:?}",
            decode_id,
            pixels.width(),
            pixels.height(),
            source
        );

        Self {
            decode_id,
            source: source.to_path_buf(),
            pixels: Arc::new(pixels),
        }
    }

    /// Identifies the decode that produced this handle. Clones share it.
    pub fn decode_id(&self) -> Uuid {
        self.decode_id
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_clones_share_decode_id_and_pixels() {
        let pixels = DynamicImage::ImageRgb8(RgbImage::new(4, 3));
        let handle = DecodedImage::build(Path::new("/tmp/a.png"), pixels);
        let clone = handle.clone();

        assert_eq!(handle.decode_id(), clone.decode_id());
        assert!(Arc::ptr_eq(&handle.pixels, &clone.pixels));
        assert_eq!(clone.width(), 4);
        assert_eq!(clone.height(), 3);
    }

    #[test]
    fn test_separate_builds_get_distinct_ids() {
        let first = DecodedImage::build(Path::new("/tmp/a.png"), DynamicImage::new_rgb8(1, 1));
        let second = DecodedImage::build(Path::new("/tmp/a.png"), DynamicImage::new_rgb8(1, 1));

        assert_ne!(first.decode_id(), second.decode_id());
    }
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{DynamicImage, GrayImage};

use crate::core::interfaces::adapters::ImageDecoder;
use crate::core::models::{DecodedImage, ImageReference};
use crate::global_constants;

pub struct FilesystemImageDecoder {
    preprocess_for_handwriting: bool,
}

impl FilesystemImageDecoder {
    pub fn build(preprocess_for_handwriting: bool) -> Self {
        log::info!(
            "[IMAGE_DECODER] Initializing filesystem decoder (handwriting preprocessing: {})",
            preprocess_for_handwriting
        );
        Self {
            preprocess_for_handwriting,
        }
    }

    /// Grayscale plus gamma correction. Improves handwritten labels at a
    /// noticeable speed cost.
    pub(crate) fn apply_handwriting_preprocessing(image: &DynamicImage) -> DynamicImage {
        let gamma_table: Vec<u8> = (0..=255u16)
            .map(|value| {
                let normalized = value as f64 / 255.0;
                (255.0 * normalized.powf(global_constants::HANDWRITING_GAMMA)) as u8
            })
            .collect();

        let mut grayscale: GrayImage = image.to_luma8();
        for pixel in grayscale.pixels_mut() {
            pixel.0[0] = gamma_table[pixel.0[0] as usize];
        }

        DynamicImage::ImageLuma8(grayscale)
    }
}

#[async_trait]
impl ImageDecoder for FilesystemImageDecoder {
    async fn decode(&self, reference: &ImageReference) -> Result<DecodedImage> {
        log::debug!("[IMAGE_DECODER] Reading {:?}", reference.path());

        let bytes = tokio::fs::read(reference.path())
            .await
            .context("Failed to read image file")?;

        let image = image::load_from_memory(&bytes).context("Failed to decode image data")?;
        log::debug!(
            "[IMAGE_DECODER] Image dimensions: {}x{}",
            image.width(),
            image.height()
        );

        let image = if self.preprocess_for_handwriting {
            log::debug!("[IMAGE_DECODER] Applying handwriting preprocessing");
            Self::apply_handwriting_preprocessing(&image)
        } else {
            image
        };

        Ok(DecodedImage::build(reference.path(), image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_fixture_bytes, write_fixture_png};
    use image::Luma;

    #[tokio::test]
    async fn test_decode_png_fixture() {
        let path = write_fixture_png();
        let reference = ImageReference::parse(path.to_str().unwrap()).unwrap();

        let decoded = FilesystemImageDecoder::build(false)
            .decode(&reference)
            .await
            .unwrap();

        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_decode_garbage_bytes_fails() {
        let path = write_fixture_bytes(b"definitely not an image", "jpg");
        let reference = ImageReference::parse(path.to_str().unwrap()).unwrap();

        let result = FilesystemImageDecoder::build(false).decode(&reference).await;

        assert!(result.is_err());

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_decode_with_preprocessing_yields_grayscale() {
        let path = write_fixture_png();
        let reference = ImageReference::parse(path.to_str().unwrap()).unwrap();

        let decoded = FilesystemImageDecoder::build(true)
            .decode(&reference)
            .await
            .unwrap();

        assert!(matches!(decoded.pixels(), DynamicImage::ImageLuma8(_)));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_gamma_correction_brightens_mid_tones() {
        let source = DynamicImage::ImageLuma8(GrayImage::from_fn(3, 1, |x, _| match x {
            0 => Luma([0]),
            1 => Luma([64]),
            _ => Luma([255]),
        }));

        let processed = FilesystemImageDecoder::apply_handwriting_preprocessing(&source).to_luma8();

        assert_eq!(processed.get_pixel(0, 0).0[0], 0);
        assert_eq!(processed.get_pixel(1, 0).0[0], 127);
        assert_eq!(processed.get_pixel(2, 0).0[0], 255);
    }
}

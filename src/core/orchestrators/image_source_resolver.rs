use std::sync::Arc;

use crate::core::interfaces::adapters::ImageDecoder;
use crate::core::models::{DecodedImage, ExtractionError, ImageReference};

/// Confirms a reference points at a readable file, then decodes it once.
pub struct ImageSourceResolver {
    decoder: Arc<dyn ImageDecoder>,
}

impl ImageSourceResolver {
    pub fn build(decoder: Arc<dyn ImageDecoder>) -> Self {
        Self { decoder }
    }

    pub async fn resolve(&self, raw_reference: &str) -> Result<DecodedImage, ExtractionError> {
        let reference = ImageReference::parse(raw_reference)?;
        log::debug!("[RESOLVER] Resolving {:?}", reference.path());

        match tokio::fs::metadata(reference.path()).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => {
                log::error!("[RESOLVER] Not a regular file: {}", reference.as_str());
                return Err(ExtractionError::ResourceNotFound {
                    reference: reference.as_str().to_string(),
                });
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                log::error!("[RESOLVER] File does not exist: {}", reference.as_str());
                return Err(ExtractionError::ResourceNotFound {
                    reference: reference.as_str().to_string(),
                });
            }
            Err(error) => {
                log::error!(
                    "[RESOLVER] Cannot access {} ({:?}): {}",
                    reference.as_str(),
                    error.kind(),
                    error
                );
                return Err(ExtractionError::Unexpected(format!(
                    "Cannot access {}: {}",
                    reference.as_str(),
                    error
                )));
            }
        }

        let decoded = self.decoder.decode(&reference).await.map_err(|error| {
            log::error!("[RESOLVER] Decode failed for {}: {:#}", reference.as_str(), error);
            ExtractionError::DecodeFailed {
                reference: reference.as_str().to_string(),
                cause: format!("{:#}", error),
            }
        })?;

        log::info!(
            "[RESOLVER] Decoded {} as {}x{}",
            reference.as_str(),
            decoded.width(),
            decoded.height()
        );

        Ok(decoded)
    }
}

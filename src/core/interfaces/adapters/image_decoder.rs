use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{DecodedImage, ImageReference};

#[async_trait]
pub trait ImageDecoder: Send + Sync {
    async fn decode(&self, reference: &ImageReference) -> Result<DecodedImage>;
}

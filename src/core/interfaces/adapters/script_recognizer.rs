use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{DecodedImage, Script};

/// A text recognition backend trained for a single script.
#[async_trait]
pub trait ScriptRecognizer: Send + Sync {
    fn script(&self) -> Script;

    async fn recognize(&self, image: &DecodedImage) -> Result<String>;
}

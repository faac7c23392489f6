use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use image::{DynamicImage, Rgb, RgbImage};
use uuid::Uuid;

use crate::core::interfaces::adapters::{ImageDecoder, ScriptRecognizer};
use crate::core::models::{DecodedImage, ImageReference, Script};

#[derive(Clone)]
pub enum MockBehavior {
    Succeed(String),
    Fail(String),
    Hang,
    Panic(String),
}

pub struct MockScriptRecognizer {
    script: Script,
    behavior: MockBehavior,
    calls: AtomicUsize,
    seen_decode_ids: Mutex<Vec<Uuid>>,
}

impl MockScriptRecognizer {
    pub fn build(script: Script, behavior: MockBehavior) -> Self {
        Self {
            script,
            behavior,
            calls: AtomicUsize::new(0),
            seen_decode_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(script: Script, text: &str) -> Self {
        Self::build(script, MockBehavior::Succeed(text.to_string()))
    }

    pub fn failing(script: Script, cause: &str) -> Self {
        Self::build(script, MockBehavior::Fail(cause.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_decode_ids(&self) -> Vec<Uuid> {
        self.seen_decode_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptRecognizer for MockScriptRecognizer {
    fn script(&self) -> Script {
        self.script
    }

    async fn recognize(&self, image: &DecodedImage) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_decode_ids.lock().unwrap().push(image.decode_id());

        match &self.behavior {
            MockBehavior::Succeed(text) => Ok(text.clone()),
            MockBehavior::Fail(cause) => Err(anyhow::anyhow!(cause.clone())),
            MockBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(String::new())
            }
            MockBehavior::Panic(message) => panic!("{}", message),
        }
    }
}

pub struct MockImageDecoder {
    calls: AtomicUsize,
    panic_on_decode: bool,
}

impl MockImageDecoder {
    pub fn build() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            panic_on_decode: false,
        }
    }

    pub fn panicking() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            panic_on_decode: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageDecoder for MockImageDecoder {
    async fn decode(&self, reference: &ImageReference) -> anyhow::Result<DecodedImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panic_on_decode {
            panic!("decoder state corrupted");
        }
        Ok(DecodedImage::build(
            reference.path(),
            DynamicImage::new_rgb8(8, 8),
        ))
    }
}

pub fn sample_decoded_image() -> DecodedImage {
    DecodedImage::build(
        std::path::Path::new("/fixtures/pill.png"),
        DynamicImage::new_rgb8(8, 8),
    )
}

/// Writes a small striped PNG into the temp directory and returns its path.
pub fn write_fixture_png() -> PathBuf {
    let path = std::env::temp_dir().join(format!("dual-script-fixture-{}.png", Uuid::new_v4()));
    let image = RgbImage::from_fn(16, 8, |x, _y| {
        if x % 2 == 0 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    });
    image.save(&path).unwrap();
    path
}

pub fn write_fixture_bytes(bytes: &[u8], extension: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "dual-script-fixture-{}.{}",
        Uuid::new_v4(),
        extension
    ));
    std::fs::write(&path, bytes).unwrap();
    path
}

pub fn missing_path() -> PathBuf {
    std::env::temp_dir().join(format!("dual-script-missing-{}.jpg", Uuid::new_v4()))
}

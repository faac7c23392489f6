use std::sync::Arc;

use serde::Serialize;

use crate::adapters::{FilesystemImageDecoder, TesseractScriptRecognizer};
use crate::core::interfaces::adapters::ScriptRecognizer;
use crate::core::models::{ExtractorSettings, RecognitionWarning, Script};
use crate::core::orchestrators::DualScriptTextExtractor;

/// One JSON line per input image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ImageReport {
    Extracted {
        image: String,
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        warnings: Vec<RecognitionWarning>,
        #[serde(skip_serializing_if = "Option::is_none")]
        keywords: Option<String>,
    },
    Failed {
        image: String,
        code: String,
        message: String,
    },
}

impl ImageReport {
    pub fn is_failure(&self) -> bool {
        matches!(self, ImageReport::Failed { .. })
    }
}

pub async fn build_extractor(settings: &ExtractorSettings) -> DualScriptTextExtractor {
    log::info!("[APP] Wiring Tesseract-backed extractor");

    let korean_recognizer =
        TesseractScriptRecognizer::build(Script::Korean, &settings.primary_language, settings);
    let latin_recognizer =
        TesseractScriptRecognizer::build(Script::Latin, &settings.secondary_language, settings);

    for recognizer in [&korean_recognizer, &latin_recognizer] {
        if !recognizer.probe(settings.recognition_timeout()).await {
            log::warn!("[APP] {} recognizer may fail at runtime", recognizer.script());
        }
    }

    DualScriptTextExtractor::build(
        Arc::new(FilesystemImageDecoder::build(settings.preprocess_for_handwriting)),
        Arc::new(korean_recognizer),
        Arc::new(latin_recognizer),
        settings.recognition_timeout(),
    )
}

/// Extracts every image concurrently; reports keep the input order.
pub async fn run_batch(
    extractor: &DualScriptTextExtractor,
    images: &[String],
    keyword_count: Option<usize>,
) -> Vec<ImageReport> {
    let extractions = images.iter().map(|image| async move {
        match extractor.extract(image).await {
            Ok(outcome) => {
                if outcome.is_degraded() {
                    log::warn!(
                        "[APP] {} extracted with {} warning(s)",
                        image,
                        outcome.warnings().len()
                    );
                }
                ImageReport::Extracted {
                    image: image.clone(),
                    text: outcome.text().to_string(),
                    warnings: outcome.warnings().to_vec(),
                    keywords: keyword_count.map(|count| outcome.keyword_summary(count)),
                }
            }
            Err(error) => {
                let response = error.to_response();
                ImageReport::Failed {
                    image: image.clone(),
                    code: response.code,
                    message: response.message,
                }
            }
        }
    });

    futures::future::join_all(extractions).await
}

/// The binary exits non-zero when this holds.
pub fn any_failure(reports: &[ImageReport]) -> bool {
    reports.iter().any(ImageReport::is_failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        missing_path, write_fixture_png, MockImageDecoder, MockScriptRecognizer,
    };
    use std::time::Duration;

    fn create_extractor(latin: MockScriptRecognizer) -> DualScriptTextExtractor {
        DualScriptTextExtractor::build(
            Arc::new(MockImageDecoder::build()),
            Arc::new(MockScriptRecognizer::succeeding(Script::Korean, "타이레놀정 타이레놀정")),
            Arc::new(latin),
            Duration::from_millis(500),
        )
    }

    #[tokio::test]
    async fn test_run_batch_keeps_input_order_and_mixes_outcomes() {
        let extractor = create_extractor(MockScriptRecognizer::succeeding(Script::Latin, "Tylenol"));
        let fixture = write_fixture_png();
        let images = vec![
            missing_path().to_str().unwrap().to_string(),
            fixture.to_str().unwrap().to_string(),
        ];

        let reports = run_batch(&extractor, &images, Some(1)).await;

        assert_eq!(reports.len(), 2);
        assert!(reports[0].is_failure());
        assert!(any_failure(&reports));
        assert_eq!(
            reports[1],
            ImageReport::Extracted {
                image: images[1].clone(),
                text: "타이레놀정 타이레놀정 Tylenol".to_string(),
                warnings: vec![],
                keywords: Some("타이레놀정".to_string()),
            }
        );

        std::fs::remove_file(&fixture).ok();
    }

    #[tokio::test]
    async fn test_report_serialization_shapes() {
        let extractor = create_extractor(MockScriptRecognizer::failing(Script::Latin, "no latin model"));
        let fixture = write_fixture_png();
        let images = vec![fixture.to_str().unwrap().to_string(), String::new()];

        let reports = run_batch(&extractor, &images, None).await;

        let extracted = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(extracted["text"], "타이레놀정 타이레놀정");
        assert_eq!(extracted["warnings"][0]["script"], "Latin");
        assert!(extracted.get("keywords").is_none());

        let failed = serde_json::to_value(&reports[1]).unwrap();
        assert_eq!(failed["code"], "FILE_NOT_FOUND");

        std::fs::remove_file(&fixture).ok();
    }

    #[tokio::test]
    async fn test_degraded_batch_is_not_a_failure() {
        let extractor = create_extractor(MockScriptRecognizer::failing(Script::Latin, "no latin model"));
        let fixture = write_fixture_png();
        let images = vec![fixture.to_str().unwrap().to_string()];

        let reports = run_batch(&extractor, &images, None).await;

        assert!(!any_failure(&reports));
        assert!(!any_failure(&[]));

        std::fs::remove_file(&fixture).ok();
    }
}

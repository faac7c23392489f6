use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use uuid::Uuid;

use crate::core::interfaces::adapters::{ImageDecoder, ScriptRecognizer};
use crate::core::models::{ErrorResponse, ExtractionError, ExtractionOutcome, ExtractionPayload};
use crate::core::orchestrators::{ImageSourceResolver, RecognitionOrchestrator, ResultAssembler};
use crate::utils;

/// Extracts mixed Korean and Latin text from one image per call.
///
/// The Korean recognizer is authoritative: if it fails the extraction fails.
/// The Latin recognizer only enriches the result, and its failure is reported
/// as a warning on the outcome. Holds no per-call state, so one instance can
/// serve concurrent extractions.
#[derive(Clone)]
pub struct DualScriptTextExtractor {
    resolver: Arc<ImageSourceResolver>,
    orchestrator: Arc<RecognitionOrchestrator>,
    assembler: Arc<ResultAssembler>,
}

impl DualScriptTextExtractor {
    pub fn build(
        decoder: Arc<dyn ImageDecoder>,
        korean_recognizer: Arc<dyn ScriptRecognizer>,
        latin_recognizer: Arc<dyn ScriptRecognizer>,
        recognition_timeout: Duration,
    ) -> Self {
        log::info!(
            "[EXTRACTOR] Initializing with primary={}, secondary={}, timeout={}ms",
            korean_recognizer.script(),
            latin_recognizer.script(),
            recognition_timeout.as_millis()
        );

        let assembler = ResultAssembler::build(korean_recognizer.script(), latin_recognizer.script());

        Self {
            resolver: Arc::new(ImageSourceResolver::build(decoder)),
            orchestrator: Arc::new(RecognitionOrchestrator::build(
                korean_recognizer,
                latin_recognizer,
                recognition_timeout,
            )),
            assembler: Arc::new(assembler),
        }
    }

    pub async fn extract(&self, reference: &str) -> Result<ExtractionOutcome, ExtractionError> {
        let request_id = Uuid::new_v4();
        log::info!(
            "[EXTRACTOR] [{}] Starting OCR process for image: {}",
            request_id,
            reference
        );

        let result = AssertUnwindSafe(self.run_pipeline(reference))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic_payload| {
                Err(ExtractionError::Unexpected(utils::describe_panic_payload(
                    panic_payload.as_ref(),
                )))
            });

        match &result {
            Ok(outcome) => {
                for warning in outcome.warnings() {
                    log::warn!(
                        "[EXTRACTOR] [{}] Degraded result, {} recognition failed: {}",
                        request_id,
                        warning.script,
                        warning.message
                    );
                }
                log::info!(
                    "[EXTRACTOR] [{}] Extraction complete. {} characters from {:?}",
                    request_id,
                    outcome.text().chars().count(),
                    outcome.contributing_scripts()
                );
            }
            Err(error) => {
                log::error!(
                    "[EXTRACTOR] [{}] Extraction failed with {}: {}",
                    request_id,
                    error.code(),
                    error
                );
            }
        }

        result
    }

    /// Same as [`extract`](Self::extract), flattened to the caller-facing shapes.
    pub async fn extract_payload(&self, reference: &str) -> Result<ExtractionPayload, ErrorResponse> {
        self.extract(reference)
            .await
            .map(|outcome| outcome.payload())
            .map_err(|error| error.to_response())
    }

    async fn run_pipeline(&self, reference: &str) -> Result<ExtractionOutcome, ExtractionError> {
        let decoded_image = self.resolver.resolve(reference).await?;
        let terminal_state = self.orchestrator.run(&decoded_image).await;
        self.assembler.assemble(terminal_state)
    }
}

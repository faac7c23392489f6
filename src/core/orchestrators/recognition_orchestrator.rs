use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;

use crate::core::interfaces::adapters::ScriptRecognizer;
use crate::core::models::{
    DecodedImage, ExtractionError, RecognitionFailure, RecognitionOutcome, RecognitionRequest,
    RecognitionResult, RecognitionWarning, Script,
};
use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestrationState {
    Start,
    PrimaryRecognized {
        primary_text: String,
    },
    Combined {
        primary_text: String,
        secondary_text: String,
    },
    PartialSuccess {
        primary_text: String,
        secondary_warning: RecognitionWarning,
    },
    Failed(ExtractionError),
}

impl OrchestrationState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrchestrationState::Combined { .. }
                | OrchestrationState::PartialSuccess { .. }
                | OrchestrationState::Failed(_)
        )
    }

    fn name(&self) -> &'static str {
        match self {
            OrchestrationState::Start => "Start",
            OrchestrationState::PrimaryRecognized { .. } => "PrimaryRecognized",
            OrchestrationState::Combined { .. } => "Combined",
            OrchestrationState::PartialSuccess { .. } => "PartialSuccess",
            OrchestrationState::Failed(_) => "Failed",
        }
    }
}

/// Runs the primary recognizer, then the secondary one only if the primary
/// succeeded. Primary failure is fatal; secondary failure degrades the result.
pub struct RecognitionOrchestrator {
    primary: Arc<dyn ScriptRecognizer>,
    secondary: Arc<dyn ScriptRecognizer>,
    recognition_timeout: Duration,
}

impl RecognitionOrchestrator {
    pub fn build(
        primary: Arc<dyn ScriptRecognizer>,
        secondary: Arc<dyn ScriptRecognizer>,
        recognition_timeout: Duration,
    ) -> Self {
        Self {
            primary,
            secondary,
            recognition_timeout,
        }
    }

    pub async fn run(&self, image: &DecodedImage) -> OrchestrationState {
        let mut state = OrchestrationState::Start;

        while !state.is_terminal() {
            let previous = state.name();
            state = self.advance(state, image).await;
            log::debug!("[ORCHESTRATOR] {} -> {}", previous, state.name());
        }

        state
    }

    async fn advance(&self, state: OrchestrationState, image: &DecodedImage) -> OrchestrationState {
        match state {
            OrchestrationState::Start => {
                let request = RecognitionRequest::new(image, self.primary.script());
                let result = self.dispatch(self.primary.as_ref(), request).await;

                match result.outcome {
                    RecognitionOutcome::Recognized(primary_text) => {
                        log::info!(
                            "[ORCHESTRATOR] {} OCR successful: {}",
                            result.script,
                            primary_text
                        );
                        OrchestrationState::PrimaryRecognized { primary_text }
                    }
                    RecognitionOutcome::Failed(failure) => {
                        log::error!("[ORCHESTRATOR] {} OCR failed: {}", result.script, failure);
                        OrchestrationState::Failed(Self::primary_failure_error(result.script, failure))
                    }
                }
            }
            OrchestrationState::PrimaryRecognized { primary_text } => {
                let request = RecognitionRequest::new(image, self.secondary.script());
                let result = self.dispatch(self.secondary.as_ref(), request).await;

                match result.outcome {
                    RecognitionOutcome::Recognized(secondary_text) => {
                        log::info!(
                            "[ORCHESTRATOR] {} OCR successful: {}",
                            result.script,
                            secondary_text
                        );
                        OrchestrationState::Combined {
                            primary_text,
                            secondary_text,
                        }
                    }
                    RecognitionOutcome::Failed(failure) => {
                        log::warn!(
                            "[ORCHESTRATOR] {} OCR failed, keeping primary text only: {}",
                            result.script,
                            failure
                        );
                        OrchestrationState::PartialSuccess {
                            primary_text,
                            secondary_warning: RecognitionWarning::from_failure(
                                result.script,
                                &failure,
                            ),
                        }
                    }
                }
            }
            terminal => terminal,
        }
    }

    async fn dispatch(
        &self,
        recognizer: &dyn ScriptRecognizer,
        request: RecognitionRequest<'_>,
    ) -> RecognitionResult {
        log::info!(
            "[ORCHESTRATOR] Starting {} recognition on decode {}",
            request.script,
            request.image.decode_id()
        );

        let guarded = AssertUnwindSafe(recognizer.recognize(request.image)).catch_unwind();

        let result = match tokio::time::timeout(self.recognition_timeout, guarded).await {
            Ok(Ok(Ok(text))) => RecognitionResult::recognized(request.script, text),
            Ok(Ok(Err(error))) => RecognitionResult::failed(
                request.script,
                RecognitionFailure::Backend(format!("{:#}", error)),
            ),
            Ok(Err(panic_payload)) => RecognitionResult::failed(
                request.script,
                RecognitionFailure::Panicked(utils::describe_panic_payload(panic_payload.as_ref())),
            ),
            Err(_) => RecognitionResult::failed(
                request.script,
                RecognitionFailure::TimedOut(self.recognition_timeout),
            ),
        };

        log::debug!(
            "[ORCHESTRATOR] {} recognition finished: success={}, {} chars",
            result.script,
            result.is_success(),
            result.text().map_or(0, |text| text.chars().count())
        );

        result
    }

    fn primary_failure_error(script: Script, failure: RecognitionFailure) -> ExtractionError {
        match failure {
            RecognitionFailure::TimedOut(timeout) => {
                ExtractionError::PrimaryRecognitionTimedOut { script, timeout }
            }
            other => ExtractionError::PrimaryRecognitionFailed {
                script,
                cause: other.to_string(),
            },
        }
    }
}

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::core::models::{DecodedImage, Script};

/// One recognize attempt for one script against an already decoded image.
#[derive(Debug, Clone, Copy)]
pub struct RecognitionRequest<'a> {
    pub image: &'a DecodedImage,
    pub script: Script,
}

impl<'a> RecognitionRequest<'a> {
    pub fn new(image: &'a DecodedImage, script: Script) -> Self {
        Self { image, script }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionFailure {
    Backend(String),
    TimedOut(Duration),
    Panicked(String),
}

impl fmt::Display for RecognitionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionFailure::Backend(cause) => write!(f, "{}", cause),
            RecognitionFailure::TimedOut(limit) => {
                write!(f, "recognition timed out after {} ms", limit.as_millis())
            }
            RecognitionFailure::Panicked(cause) => write!(f, "recognizer panicked: {}", cause),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Recognized(String),
    Failed(RecognitionFailure),
}

/// Transient per-script result owned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    pub script: Script,
    pub outcome: RecognitionOutcome,
}

impl RecognitionResult {
    pub fn recognized(script: Script, text: String) -> Self {
        Self {
            script,
            outcome: RecognitionOutcome::Recognized(text),
        }
    }

    pub fn failed(script: Script, failure: RecognitionFailure) -> Self {
        Self {
            script,
            outcome: RecognitionOutcome::Failed(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RecognitionOutcome::Recognized(_))
    }

    pub fn text(&self) -> Option<&str> {
        match &self.outcome {
            RecognitionOutcome::Recognized(text) => Some(text),
            RecognitionOutcome::Failed(_) => None,
        }
    }
}

/// A recognition failure that degraded the outcome without failing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecognitionWarning {
    pub script: Script,
    pub message: String,
}

impl RecognitionWarning {
    pub fn from_failure(script: Script, failure: &RecognitionFailure) -> Self {
        Self {
            script,
            message: failure.to_string(),
        }
    }
}

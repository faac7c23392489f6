use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::core::models::Script;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("{}: {reference}", global_constants::MESSAGE_FILE_NOT_FOUND)]
    ResourceNotFound { reference: String },

    #[error("Failed to decode image {reference}: {cause}")]
    DecodeFailed { reference: String, cause: String },

    #[error("{cause}")]
    PrimaryRecognitionFailed { script: Script, cause: String },

    #[error("{script} recognition timed out after {} ms", .timeout.as_millis())]
    PrimaryRecognitionTimedOut { script: Script, timeout: Duration },

    #[error("{0}")]
    Unexpected(String),
}

impl ExtractionError {
    pub fn code(&self) -> &'static str {
        match self {
            ExtractionError::ResourceNotFound { .. } => global_constants::ERROR_CODE_FILE_NOT_FOUND,
            ExtractionError::DecodeFailed { .. } => global_constants::ERROR_CODE_DECODE_FAILED,
            ExtractionError::PrimaryRecognitionFailed { .. } => {
                global_constants::ERROR_CODE_KOREAN_OCR_FAILED
            }
            ExtractionError::PrimaryRecognitionTimedOut { .. } => {
                global_constants::ERROR_CODE_KOREAN_OCR_TIMEOUT
            }
            ExtractionError::Unexpected(_) => global_constants::ERROR_CODE_UNEXPECTED,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Structured failure handed to callers in place of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

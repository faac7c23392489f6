use serde::Serialize;

use crate::core::models::{RecognitionWarning, Script};
use crate::utils;

/// The single payload returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionPayload {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    text: String,
    contributing_scripts: Vec<Script>,
    warnings: Vec<RecognitionWarning>,
}

impl ExtractionOutcome {
    pub(crate) fn build(
        text: String,
        contributing_scripts: Vec<Script>,
        warnings: Vec<RecognitionWarning>,
    ) -> Self {
        Self {
            text,
            contributing_scripts,
            warnings,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn contributing_scripts(&self) -> &[Script] {
        &self.contributing_scripts
    }

    /// Failures that degraded this outcome without failing it.
    pub fn warnings(&self) -> &[RecognitionWarning] {
        &self.warnings
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn payload(&self) -> ExtractionPayload {
        ExtractionPayload {
            text: self.text.clone(),
        }
    }

    pub fn keyword_summary(&self, keyword_count: usize) -> String {
        utils::summarize_top_keywords(&self.text, keyword_count)
    }
}

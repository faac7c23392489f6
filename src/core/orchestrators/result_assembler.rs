use crate::core::models::{ExtractionError, ExtractionOutcome, Script};
use crate::core::orchestrators::OrchestrationState;
use crate::global_constants;

pub struct ResultAssembler {
    primary_script: Script,
    secondary_script: Script,
}

impl ResultAssembler {
    pub fn build(primary_script: Script, secondary_script: Script) -> Self {
        Self {
            primary_script,
            secondary_script,
        }
    }

    pub fn assemble(&self, state: OrchestrationState) -> Result<ExtractionOutcome, ExtractionError> {
        match state {
            OrchestrationState::Combined {
                primary_text,
                secondary_text,
            } => {
                let combined_text =
                    [primary_text, secondary_text].join(global_constants::TEXT_SEPARATOR);
                log::debug!("[ASSEMBLER] Combined OCR result: {}", combined_text);

                Ok(ExtractionOutcome::build(
                    combined_text,
                    vec![self.primary_script, self.secondary_script],
                    Vec::new(),
                ))
            }
            OrchestrationState::PartialSuccess {
                primary_text,
                secondary_warning,
            } => Ok(ExtractionOutcome::build(
                primary_text,
                vec![self.primary_script],
                vec![secondary_warning],
            )),
            OrchestrationState::Failed(error) => Err(error),
            unfinished => Err(ExtractionError::Unexpected(format!(
                "recognition stopped in non-terminal state {:?}",
                unfinished
            ))),
        }
    }
}

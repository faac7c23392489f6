mod dual_script_extractor;
mod image_source_resolver;
mod recognition_orchestrator;
mod result_assembler;

pub use dual_script_extractor::DualScriptTextExtractor;
pub use image_source_resolver::ImageSourceResolver;
pub use recognition_orchestrator::{OrchestrationState, RecognitionOrchestrator};
pub use result_assembler::ResultAssembler;

pub mod adapters;
pub mod app;
pub mod core;
pub mod global_constants;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use crate::core::models::{
    ErrorResponse, ExtractionError, ExtractionOutcome, ExtractionPayload, ExtractorSettings, Script,
};
pub use crate::core::orchestrators::DualScriptTextExtractor;

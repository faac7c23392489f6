mod decoded_image;
mod extraction_error;
mod extraction_outcome;
mod extractor_settings;
mod image_reference;
mod recognition;
mod script;

pub use decoded_image::DecodedImage;
pub use extraction_error::{ErrorResponse, ExtractionError};
pub use extraction_outcome::{ExtractionOutcome, ExtractionPayload};
pub use extractor_settings::ExtractorSettings;
pub use image_reference::ImageReference;
pub use recognition::{
    RecognitionFailure, RecognitionOutcome, RecognitionRequest, RecognitionResult,
    RecognitionWarning,
};
pub use script::Script;

mod image_decoder;
mod script_recognizer;

pub use image_decoder::ImageDecoder;
pub use script_recognizer::ScriptRecognizer;

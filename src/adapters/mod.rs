mod filesystem_image_decoder;
mod tesseract_script_recognizer;

pub use filesystem_image_decoder::FilesystemImageDecoder;
pub use tesseract_script_recognizer::TesseractScriptRecognizer;

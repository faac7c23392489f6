pub const APPLICATION_NAME: &str = "dual-script-ocr";

pub const ERROR_CODE_FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
pub const ERROR_CODE_DECODE_FAILED: &str = "DECODE_FAILED";
pub const ERROR_CODE_KOREAN_OCR_FAILED: &str = "KOREAN_OCR_FAILED";
pub const ERROR_CODE_KOREAN_OCR_TIMEOUT: &str = "KOREAN_OCR_TIMEOUT";
pub const ERROR_CODE_UNEXPECTED: &str = "UNEXPECTED_ERROR";

pub const MESSAGE_FILE_NOT_FOUND: &str = "The image file does not exist";

pub const TEXT_SEPARATOR: &str = " ";

pub const DEFAULT_PRIMARY_LANGUAGE: &str = "kor";
pub const DEFAULT_SECONDARY_LANGUAGE: &str = "eng";
pub const DEFAULT_RECOGNITION_TIMEOUT_MS: u64 = 30_000;

pub const HANDWRITING_GAMMA: f64 = 0.5;

pub const FILE_URI_SCHEME: &str = "file://";
pub const LOCAL_FILE_HOST: &str = "localhost";

pub const SETTINGS_DIRECTORY_NAME: &str = "dual-script-ocr";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[cfg(target_os = "windows")]
pub const DEFAULT_TESSERACT_PROGRAM: &str = "tesseract.exe";
#[cfg(not(target_os = "windows"))]
pub const DEFAULT_TESSERACT_PROGRAM: &str = "tesseract";

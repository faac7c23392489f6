use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use dual_script_ocr::app;
use dual_script_ocr::global_constants;
use dual_script_ocr::ExtractorSettings;

/// Extract Korean and Latin text from photographed documents
#[derive(Parser, Debug)]
#[command(name = "dual-script-ocr")]
#[command(about = "Korean + Latin OCR for pill packages", long_about = None)]
struct Args {
    /// Image paths or file:// URIs
    #[arg(required = true)]
    images: Vec<String>,

    /// Settings file (defaults to the per-user config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Per-recognizer timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Also print the N most frequent words of each result
    #[arg(short = 'k', long, num_args = 0..=1, default_missing_value = "5")]
    keywords: Option<usize>,

    /// Grayscale + gamma preprocessing for handwritten labels (slower)
    #[arg(short = 'p', long, default_value = "false")]
    preprocess: bool,
}

fn load_settings(args: &Args) -> Result<ExtractorSettings> {
    let mut settings = match &args.config {
        Some(path) => ExtractorSettings::load_from_path(path)
            .with_context(|| format!("Failed to load settings from {:?}", path))?,
        None => ExtractorSettings::load().unwrap_or_else(|error| {
            log::warn!("[MAIN] Failed to load settings: {}, using defaults", error);
            ExtractorSettings::default()
        }),
    };

    if let Some(timeout_ms) = args.timeout_ms {
        settings.recognition_timeout_ms = timeout_ms;
    }
    if args.preprocess {
        settings.preprocess_for_handwriting = true;
    }

    settings.validate()?;
    Ok(settings)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::builder()
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("dual_script_ocr"), log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::info!(
        "[MAIN] Starting {} for {} image(s)",
        global_constants::APPLICATION_NAME,
        args.images.len()
    );

    let settings = load_settings(&args)?;
    let extractor = app::build_extractor(&settings).await;

    let reports = app::run_batch(&extractor, &args.images, args.keywords).await;

    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    if app::any_failure(&reports) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn write_settings_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cli-settings-{}.json", Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn parse(settings_file: &std::path::Path, extra: &[&str]) -> Args {
        let config = settings_file.to_str().unwrap();
        let mut argv = vec!["dual-script-ocr", "pill.jpg", "--config", config];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_command_line_overrides_settings_file() {
        let settings_file = write_settings_file(r#"{ "recognition_timeout_ms": 1500 }"#);

        let args = parse(&settings_file, &["--timeout-ms", "250", "--preprocess"]);
        let settings = load_settings(&args).unwrap();

        assert_eq!(settings.recognition_timeout_ms, 250);
        assert!(settings.preprocess_for_handwriting);
        assert_eq!(settings.primary_language, "kor");

        std::fs::remove_file(&settings_file).ok();
    }

    #[test]
    fn test_settings_file_values_survive_without_overrides() {
        let settings_file =
            write_settings_file(r#"{ "recognition_timeout_ms": 1500, "preprocess_for_handwriting": true }"#);

        let args = parse(&settings_file, &[]);
        let settings = load_settings(&args).unwrap();

        assert_eq!(settings.recognition_timeout_ms, 1500);
        assert!(settings.preprocess_for_handwriting);
        assert_eq!(args.keywords, None);

        std::fs::remove_file(&settings_file).ok();
    }

    #[test]
    fn test_zero_timeout_override_is_rejected() {
        let settings_file = write_settings_file("{}");

        let args = parse(&settings_file, &["--timeout-ms", "0"]);

        assert!(load_settings(&args).is_err());

        std::fs::remove_file(&settings_file).ok();
    }

    #[test]
    fn test_bare_keywords_flag_defaults_to_five() {
        let settings_file = write_settings_file("{}");

        let bare = parse(&settings_file, &["--keywords"]);
        let explicit = parse(&settings_file, &["-k", "2"]);

        assert_eq!(bare.keywords, Some(5));
        assert_eq!(explicit.keywords, Some(2));

        std::fs::remove_file(&settings_file).ok();
    }

    #[test]
    fn test_images_are_required() {
        assert!(Args::try_parse_from(["dual-script-ocr"]).is_err());
    }
}

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusty_tesseract::{Args, Image as TesseractImage};
use tokio::process::Command;

use crate::core::interfaces::adapters::ScriptRecognizer;
use crate::core::models::{DecodedImage, ExtractorSettings, Script};

/// Runs the Tesseract CLI with one script's language pack.
///
/// The child process is killed when the recognition future is dropped, so a
/// deadline on `recognize` also stops the backend and removes its input file.
pub struct TesseractScriptRecognizer {
    script: Script,
    language: String,
    program: String,
    dpi: Option<i32>,
    psm: Option<i32>,
    oem: Option<i32>,
}

impl TesseractScriptRecognizer {
    pub fn build(script: Script, language: &str, settings: &ExtractorSettings) -> Self {
        log::info!(
            "[TESSERACT_OCR] Initializing {} recognizer with language pack '{}'",
            script,
            language
        );

        Self {
            script,
            language: language.to_string(),
            program: settings.tesseract_program.clone(),
            dpi: settings.tesseract_dpi,
            psm: settings.tesseract_psm,
            oem: settings.tesseract_oem,
        }
    }

    /// Warns when the installed Tesseract lacks the configured language pack.
    pub async fn probe(&self, limit: Duration) -> bool {
        match tokio::time::timeout(limit, self.list_installed_languages()).await {
            Ok(Ok(installed)) => {
                let available = installed.iter().any(|lang| *lang == self.language);
                if !available {
                    log::warn!(
                        "[TESSERACT_OCR] Language pack '{}' is not installed ({} available)",
                        self.language,
                        installed.len()
                    );
                }
                available
            }
            Ok(Err(error)) => {
                log::warn!("[TESSERACT_OCR] Could not query Tesseract: {:#}", error);
                false
            }
            Err(_) => {
                log::warn!(
                    "[TESSERACT_OCR] '{}' did not list its languages within {} ms",
                    self.program,
                    limit.as_millis()
                );
                false
            }
        }
    }

    async fn list_installed_languages(&self) -> Result<Vec<String>> {
        let output = Command::new(&self.program)
            .arg("--list-langs")
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("Failed to launch {}", self.program))?;

        if !output.status.success() {
            anyhow::bail!("{} --list-langs exited with {}", self.program, output.status);
        }

        // First line is the "List of available languages" header.
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .skip(1)
            .map(|line| line.trim().to_string())
            .collect())
    }

    fn build_args(&self) -> Args {
        let defaults = Args::default();
        Args {
            lang: self.language.clone(),
            config_variables: HashMap::new(),
            dpi: self.dpi.or(defaults.dpi),
            psm: self.psm.or(defaults.psm),
            oem: self.oem.or(defaults.oem),
        }
    }

    fn build_command(&self, input: &TesseractImage, args: &Args) -> Result<Command> {
        let input_path = input
            .get_image_path()
            .map_err(|error| anyhow::anyhow!("Tesseract input has no usable path: {:?}", error))?;

        let mut command = Command::new(&self.program);
        command
            .arg(input_path)
            .arg("stdout")
            .arg("-l")
            .arg(&args.lang);

        if let Some(dpi) = args.dpi {
            command.arg("--dpi").arg(dpi.to_string());
        }
        if let Some(psm) = args.psm {
            command.arg("--psm").arg(psm.to_string());
        }
        if let Some(oem) = args.oem {
            command.arg("--oem").arg(oem.to_string());
        }
        for (key, value) in &args.config_variables {
            command.arg("-c").arg(format!("{}={}", key, value));
        }

        command.kill_on_drop(true);
        Ok(command)
    }
}

#[async_trait]
impl ScriptRecognizer for TesseractScriptRecognizer {
    fn script(&self) -> Script {
        self.script
    }

    async fn recognize(&self, image: &DecodedImage) -> Result<String> {
        log::info!(
            "[TESSERACT_OCR] Starting {} text extraction ({})",
            self.script,
            self.language
        );
        log::debug!(
            "[TESSERACT_OCR] Image dimensions: {}x{} from {:?}",
            image.width(),
            image.height(),
            image.source()
        );

        let shared_image = image.clone();
        let input = tokio::task::spawn_blocking(move || {
            TesseractImage::from_dynamic_image(shared_image.pixels())
                .map_err(|error| anyhow::anyhow!("Failed to convert image to PNG format: {:?}", error))
        })
        .await
        .context("Tesseract input worker terminated")??;

        let args = self.build_args();
        let output = self
            .build_command(&input, &args)?
            .output()
            .await
            .with_context(|| format!("Failed to launch {}", self.program))?;

        if !output.status.success() {
            anyhow::bail!(
                "Failed to extract text from image: tesseract exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let extracted_text = String::from_utf8_lossy(&output.stdout).trim().to_string();

        log::info!(
            "[TESSERACT_OCR] {} extraction complete. Extracted {} characters",
            self.script,
            extracted_text.chars().count()
        );
        log::debug!("[TESSERACT_OCR] Extracted text: {}", extracted_text);

        Ok(extracted_text)
    }
}

use std::path::{Path, PathBuf};

use crate::core::models::ExtractionError;
use crate::global_constants;

/// A caller-supplied pointer to image bytes on local storage.
///
/// Accepts either a plain filesystem path or a `file://` URI. Percent-encoded
/// URIs are decoded so that paths containing Hangul or spaces resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    original: String,
    path: PathBuf,
}

impl ImageReference {
    pub fn parse(reference: &str) -> Result<Self, ExtractionError> {
        let not_found = || ExtractionError::ResourceNotFound {
            reference: reference.to_string(),
        };

        // Blank input is rejected, but a real path keeps its surrounding whitespace.
        if reference.trim().is_empty() {
            return Err(not_found());
        }

        let path = match reference.strip_prefix(global_constants::FILE_URI_SCHEME) {
            Some(authority_and_path) => {
                let encoded_path = Self::strip_local_authority(authority_and_path).ok_or_else(|| {
                    log::debug!("[RESOLVER] Remote host in file URI {}", reference);
                    not_found()
                })?;
                let decoded = urlencoding::decode(encoded_path).map_err(|_| not_found())?;
                PathBuf::from(decoded.into_owned())
            }
            None if Self::has_foreign_scheme(reference) => {
                log::debug!("[RESOLVER] Unsupported URI scheme in {}", reference);
                return Err(not_found());
            }
            None => PathBuf::from(reference),
        };

        Ok(Self {
            original: reference.to_string(),
            path,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `file:///p` and `file://localhost/p` name local files; any other host does not.
    fn strip_local_authority(authority_and_path: &str) -> Option<&str> {
        if authority_and_path.starts_with('/') {
            return Some(authority_and_path);
        }

        let (host, _) = authority_and_path.split_once('/')?;
        if host.eq_ignore_ascii_case(global_constants::LOCAL_FILE_HOST) {
            Some(&authority_and_path[host.len()..])
        } else {
            None
        }
    }

    fn has_foreign_scheme(reference: &str) -> bool {
        match reference.split_once("://") {
            Some((scheme, _)) => {
                !scheme.is_empty()
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
            }
            None => false,
        }
    }
}

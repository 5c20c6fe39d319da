//! Bundle loading and report derivation
//!
//! The loader is the only fallible piece; deriving the report from the
//! loaded text is pure so it can be tested without file system fixtures.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{BundlecheckError, Result};

/// Where the prover writes the bundle, relative to the working directory
pub const DEFAULT_BUNDLE_PATH: &str = "proof_output/verification_bundle.hex";

/// Number of leading characters shown in the report
pub const PREFIX_CHARS: usize = 200;

/// Values derived from a loaded bundle
#[derive(Debug, Serialize)]
pub struct BundleReport {
    pub byte_count: usize,
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Read the bundle file and strip surrounding whitespace
///
/// The content is not validated as hex here; malformed or empty bundles
/// are reported on as-is.
pub fn load_bundle(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BundlecheckError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => BundlecheckError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    Ok(content.trim().to_string())
}

/// Derive the report values from bundle text
///
/// Two hex characters encode one byte; an odd trailing nibble is dropped
/// by the floor division. Counting characters rather than bytes keeps the
/// prefix cut safe even when the file holds non-ASCII garbage.
pub fn derive_report(text: &str) -> BundleReport {
    let byte_count = text.chars().count() / 2;
    let prefix: String = text.chars().take(PREFIX_CHARS).collect();

    BundleReport {
        byte_count,
        prefix,
        digest: None,
    }
}

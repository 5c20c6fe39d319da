//! Error types and handling for Bundlecheck
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Bundlecheck operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlecheckError {
    // File system errors
    #[error("Bundle file not found: {path}")]
    #[diagnostic(
        code(bundlecheck::fs::not_found),
        help(
            "Run the prover first so it writes proof_output/verification_bundle.hex, or pass the bundle path explicitly"
        )
    )]
    FileNotFound { path: String },

    #[error("Failed to read bundle file: {path}: {reason}")]
    #[diagnostic(code(bundlecheck::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundlecheck::fs::io_error))]
    IoError { message: String },

    // Bundle errors
    #[error("Bundle is not valid hex: {path}: {reason}")]
    #[diagnostic(
        code(bundlecheck::bundle::invalid_hex),
        help("The bundle must contain an even number of hexadecimal characters; re-generate it or drop --strict")
    )]
    InvalidHex { path: String, reason: String },
}

impl From<std::io::Error> for BundlecheckError {
    fn from(err: std::io::Error) -> Self {
        BundlecheckError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundlecheckError>;

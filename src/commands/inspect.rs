//! Inspect command implementation

use std::path::PathBuf;

use console::Style;

use crate::bundle::{self, DEFAULT_BUNDLE_PATH, PREFIX_CHARS};
use crate::cli::InspectArgs;
use crate::error::{BundlecheckError, Result};
use crate::hash;

pub fn run(dir: Option<PathBuf>, verbose: bool, args: InspectArgs) -> Result<()> {
    let base = match dir {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    // join() keeps an absolute override as-is
    let bundle_path = base.join(
        args.path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_PATH)),
    );

    if verbose {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Bundle file:"),
            bundle_path.display()
        );
    }

    let text = bundle::load_bundle(&bundle_path)?;

    // --strict and --digest both need the text to decode as hex; the
    // default path stays permissive and never decodes
    let decoded = if args.strict || args.digest {
        let bytes = hex::decode(&text).map_err(|e| BundlecheckError::InvalidHex {
            path: bundle_path.display().to_string(),
            reason: e.to_string(),
        })?;
        Some(bytes)
    } else {
        None
    };

    let mut report = bundle::derive_report(&text);
    if args.digest {
        report.digest = decoded.as_deref().map(hash::hash_bytes);
    }

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&report).map_err(|e| BundlecheckError::IoError {
                message: e.to_string(),
            })?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Bundle size: {} bytes", report.byte_count);
    println!(
        "Bundle hex (first {} chars): {}...",
        PREFIX_CHARS, report.prefix
    );

    if let Some(ref digest) = report.digest {
        println!("{} {}", Style::new().bold().apply_to("Digest:"), digest);
    }

    Ok(())
}

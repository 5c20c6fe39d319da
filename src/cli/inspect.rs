use clap::Parser;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Inspect the default bundle:\n    bundlecheck inspect\n\n\
                  Inspect a specific file:\n    bundlecheck inspect target/bundle.hex\n\n\
                  Reject malformed hex:\n    bundlecheck inspect --strict\n\n\
                  Print an integrity digest:\n    bundlecheck inspect --digest\n\n\
                  Emit the report as JSON:\n    bundlecheck inspect --json")]
pub struct InspectArgs {
    /// Bundle file to inspect (defaults to proof_output/verification_bundle.hex)
    pub path: Option<PathBuf>,

    /// Fail when the bundle is not well-formed hex
    #[arg(long)]
    pub strict: bool,

    /// Print a BLAKE3 digest of the decoded bundle bytes
    #[arg(long)]
    pub digest: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - inspect: Inspect command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod inspect;

pub use completions::CompletionsArgs;
pub use inspect::InspectArgs;

/// Bundlecheck - proof bundle diagnostics
///
/// Inspect hex-encoded proof verification bundles before submission.
#[derive(Parser, Debug)]
#[command(
    name = "bundlecheck",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Diagnostic CLI for hex-encoded proof verification bundles",
    long_about = "Bundlecheck reports the size and a leading excerpt of a hex-encoded proof \
                  verification bundle, as written by the prover into proof_output/. It reads \
                  the bundle as opaque text and performs no cryptographic verification.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundlecheck inspect                       \x1b[90m# Inspect proof_output/verification_bundle.hex\x1b[0m\n   \
                  bundlecheck inspect target/bundle.hex     \x1b[90m# Inspect a specific bundle file\x1b[0m\n   \
                  bundlecheck inspect --strict --digest     \x1b[90m# Validate hex and print a BLAKE3 digest\x1b[0m\n   \
                  bundlecheck inspect --json                \x1b[90m# Emit the report as JSON\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Base directory for resolving bundle paths (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "BUNDLECHECK_DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a proof verification bundle
    Inspect(InspectArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_inspect() {
        let cli = Cli::try_parse_from(["bundlecheck", "inspect"]).unwrap();
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.path, None);
                assert!(!args.strict);
                assert!(!args.digest);
                assert!(!args.json);
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_cli_parsing_inspect_with_path() {
        let cli = Cli::try_parse_from(["bundlecheck", "inspect", "target/bundle.hex"]).unwrap();
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.path, Some(PathBuf::from("target/bundle.hex")));
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_cli_parsing_inspect_flags() {
        let cli =
            Cli::try_parse_from(["bundlecheck", "inspect", "--strict", "--digest", "--json"])
                .unwrap();
        match cli.command {
            Commands::Inspect(args) => {
                assert!(args.strict);
                assert!(args.digest);
                assert!(args.json);
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["bundlecheck", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["bundlecheck", "-v", "-C", "/tmp/proofs", "inspect"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/proofs")));
    }

    #[test]
    fn test_cli_dir_flag_overrides_env() {
        let env_path = if cfg!(windows) {
            r"C:\temp\env-proofs"
        } else {
            "/tmp/env-proofs"
        };
        let flag_path = if cfg!(windows) {
            r"C:\temp\flag-proofs"
        } else {
            "/tmp/flag-proofs"
        };
        unsafe {
            std::env::set_var("BUNDLECHECK_DIR", env_path);
        }
        let cli = Cli::try_parse_from(["bundlecheck", "-C", flag_path, "inspect"]).unwrap();
        // Flag should override environment variable
        assert_eq!(cli.dir, Some(PathBuf::from(flag_path)));
        unsafe {
            std::env::remove_var("BUNDLECHECK_DIR");
        }
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["bundlecheck", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}

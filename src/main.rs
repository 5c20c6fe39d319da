//! Bundlecheck - proof bundle diagnostics
//!
//! A command line tool for inspecting hex-encoded proof verification bundles
//! before they are handed off to an on-chain verifier.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod error;
mod hash;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => commands::inspect::run(cli.dir, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

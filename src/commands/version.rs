//! Version command implementation

use crate::bundle::{DEFAULT_BUNDLE_PATH, PREFIX_CHARS};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("bundlecheck {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Defaults:");
    println!("  Bundle path: {}", DEFAULT_BUNDLE_PATH);
    println!("  Prefix window: {} chars", PREFIX_CHARS);
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

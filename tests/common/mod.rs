//! Common test utilities for Bundlecheck integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace holding a prover output layout
#[allow(dead_code)]
pub struct ProofWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl ProofWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write the bundle at the default prover output location
    pub fn write_bundle(&self, content: &str) -> PathBuf {
        self.write_file("proof_output/verification_bundle.hex", content)
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

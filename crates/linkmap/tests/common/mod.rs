//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/linkmap to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_linkmap_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "linkmap", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build linkmap");

    assert!(status.success(), "Failed to build linkmap binary");

    workspace.join("target/debug/linkmap")
}

/// Run the linkmap binary directly in the specified directory
pub fn run_linkmap_in_dir(dir: &Path, args: &[&str]) -> Output {
    let binary = get_linkmap_binary();

    Command::new(&binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute linkmap binary")
}

/// The full export header shared by test fixtures.
pub const HEADER: &str = "Issue key,Summary,Inward issue link (Blocks),Outward issue link (Blocks),Inward issue link (Cloners),Outward issue link (Cloners),Inward issue link (Duplicate),Outward issue link (Duplicate),Inward issue link (Relates),Outward issue link (Relates)";

/// Write a CSV export into `dir` and return its path.
pub fn write_export(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("{HEADER}\n{body}")).expect("failed to write export fixture");
    path
}

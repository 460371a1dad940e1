//! Test harness for arbor integration tests

use std::path::Path;
use std::process::Command;

pub use arbor::test_utils::TempTree;

pub fn run_arbor(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_arbor");
    let output = Command::new(binary)
        .args(args)
        .env_remove("ARBOR_LOG")
        .env("NO_COLOR", "1")
        .current_dir(dir)
        .output()
        .expect("Failed to run arbor");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TempTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_runs_binary() {
        let tree = TempTree::new();
        let (_stdout, _stderr, success) = run_arbor(tree.path(), &["--version"]);
        assert!(success);
    }
}

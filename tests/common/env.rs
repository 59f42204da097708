//! Isolated revision roots for testing.
//!
//! `TestRoot` owns a temp directory, provisions revision directories in it
//! and runs the `revroot` binary against it with `REVROOT_*` cleared.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread::sleep;
use std::time::Duration;

use tempfile::TempDir;

use revroot::RevisionStore;

const CLEARED_VARS: &[&str] = &[
    "REVROOT_ROOT",
    "REVROOT_ENV",
    "REVROOT_KEEP",
    "REVROOT_LOG",
    "RUST_LOG",
];

/// Result of running a revroot CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestRoot {
    pub dir: TempDir,
}

impl TestRoot {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp root"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path relative to the root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Store over this root with no environment
    pub fn store(&self) -> RevisionStore {
        RevisionStore::new(self.root(), None)
    }

    /// Create and populate `revs/<name>`, as a provisioner would.
    ///
    /// Sleeps briefly afterwards so consecutive revisions get distinct
    /// creation times.
    pub fn provision(&self, name: &str) -> PathBuf {
        let dir = self.path("revs").join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create revision");
        std::fs::write(dir.join("REVISION"), name).expect("Failed to write revision file");
        sleep(Duration::from_millis(15));
        dir
    }

    /// Write a file under the root, creating parents
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run revroot against this root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run revroot against this root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_revroot"));
        cmd.current_dir(self.root()).arg("--root").arg(self.root()).args(args);
        for var in CLEARED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute revroot");
        output_to_result(output)
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Assert that output (stdout or stderr) contains expected pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

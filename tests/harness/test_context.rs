//! Shared testing harness for `skulens` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CONFIG_VARS: &[&str] = &[
    "DB_HOST",
    "DB_PORT",
    "DB_NAME",
    "DB_USER",
    "DB_PASSWORD",
    "OPENAI_API_KEY",
    "SKULENS_MODEL",
    "SKULENS_API_URL",
    "RUST_LOG",
];

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `skulens` binary with no inherited configuration.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("skulens").expect("Failed to locate skulens binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Like [`cli`](Self::cli), with a complete database configuration.
    pub(crate) fn cli_with_database(&self, port: u16) -> Command {
        let mut cmd = self.cli();
        cmd.env("DB_HOST", "127.0.0.1")
            .env("DB_PORT", port.to_string())
            .env("DB_NAME", "catalog")
            .env("DB_USER", "reader")
            .env("DB_PASSWORD", "secret");
        cmd
    }

    /// Write a file relative to the working directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the working directory.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }
}
